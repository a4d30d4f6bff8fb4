//! Shared test utilities for the app module.
//!
//! This module provides helper functions and utilities for testing:
//! - `create_test_app` - Creates an `App` against an unreachable backend
//! - `place_app` - Caches a layout so mouse hit-testing has rects to test
//! - `render_app` - Renders the app to a `TestBackend` terminal
//! - Key and mouse event helpers (`char_key`, `key`, `left_click`)

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::TestBackend};

use crate::app::App;

/// Backend base URL pointing at a port nothing listens on, so any request a
/// test accidentally fires fails fast instead of hanging.
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:9";

/// Creates an `App` for testing. Remote calls will fail; outcomes are
/// injected directly via `apply_event` instead.
pub fn create_test_app() -> App {
    App::new(UNREACHABLE_SERVER).expect("test app should construct")
}

/// Caches a layout for the given terminal size so mouse handlers and scroll
/// clamping have rects to work against, without rendering a frame.
pub fn place_app(app: &mut App, width: u16, height: u16) {
    app.update_layout(Rect::new(0, 0, width, height));
}

/// Renders the app once to a `TestBackend` terminal and returns it for
/// buffer assertions.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })
        .expect("draw should succeed");
    terminal
}

/// Returns true if the rendered buffer contains `needle` anywhere.
pub fn buffer_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom()).any(|y| {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        row.contains(needle)
    })
}

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for the given key code with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a left-button mouse click at the given cell.
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Types a string into the app one key at a time.
pub fn type_chars(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}
