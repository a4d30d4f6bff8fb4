//! Key, mouse and paste handling for the App.
//!
//! Handlers are explicit functions over the controller state; nothing is
//! captured in closures. Input priority mirrors the page's stacking order:
//! an active alert is modal and captures everything, then the auth modal,
//! then the open chat widget, then the home view.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::app::state::{AuthTab, MoodOption};

impl App {
    /// Handles a key event according to the current focus.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // An active alert blocks interaction with everything beneath it.
        if self.notifications.active_alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notifications.dismiss_active_alert();
            }
            return;
        }

        if self.panels.auth_open() {
            self.handle_auth_key(key);
        } else if self.panels.chat_open() {
            self.handle_chat_key(key);
        } else {
            self.handle_home_key(key);
        }
    }

    /// Handles key events on the home view.
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char(d @ '1'..='5') => {
                if let Some(option) = MoodOption::from_digit(d) {
                    self.select_mood(option);
                }
            }
            KeyCode::Char('c') => self.panels.open_chat(),
            KeyCode::Char('l') => self.panels.open_auth(),
            KeyCode::Char('f') => self.need_friend(),
            KeyCode::Char('b') => self.book_counselor(),
            KeyCode::Up | KeyCode::Char('k') => self.inspiration_scroll.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                let content_len = self.inspiration_line_count();
                let visible = self.layout.home.inspiration_visible_height;
                self.inspiration_scroll.scroll_down(content_len, visible);
            }
            _ => {}
        }
    }

    /// Handles key events while the auth modal is open.
    fn handle_auth_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.panels.close_auth(),
            KeyCode::Left => self.switch_auth_tab(AuthTab::Login),
            KeyCode::Right => self.switch_auth_tab(AuthTab::Signup),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => self.auth_form.focus_next(),
            KeyCode::Enter => self.submit_auth_form(),
            _ => {
                self.auth_form.focused_input().input(key);
            }
        }
    }

    /// Handles key events while the chat widget is open.
    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.panels.close_chat(),
            KeyCode::Enter => self.submit_chat_input(),
            KeyCode::Up => self.scroll_transcript_up(),
            KeyCode::Down => self.scroll_transcript_down(),
            _ => {
                self.chat.input.input(key);
            }
        }
    }

    /// Switches the visible auth tab, clearing the shared fields when the
    /// tab actually changes.
    pub(crate) fn switch_auth_tab(&mut self, tab: AuthTab) {
        if self.panels.auth_tab() != tab {
            self.panels.toggle_auth_tab(tab);
            self.auth_form.clear();
        }
    }

    /// Handles a mouse event against the rects cached for this frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(pos),
            MouseEventKind::ScrollUp => self.handle_scroll_up(pos),
            MouseEventKind::ScrollDown => self.handle_scroll_down(pos),
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position) {
        // Alert captures clicks; one on the box itself dismisses it.
        if self.notifications.active_alert().is_some() {
            if self.layout.alert.contains(pos) {
                self.notifications.dismiss_active_alert();
            }
            return;
        }

        if self.panels.auth_open() {
            // A click on the backdrop (anything outside the modal content)
            // closes the modal, same as the close affordance. Clicks inside
            // the content are inert.
            if !self.layout.auth_modal.contains(pos) {
                self.panels.close_auth();
            }
            return;
        }

        if self.panels.chat_open() && self.layout.chat.panel.contains(pos) {
            return;
        }

        if self.panels.launcher_visible() && self.layout.launcher.contains(pos) {
            self.panels.open_chat();
            return;
        }

        for (rect, option) in self
            .layout
            .home
            .mood_options
            .iter()
            .zip(MoodOption::all())
        {
            if rect.contains(pos) {
                self.select_mood(*option);
                return;
            }
        }
    }

    fn handle_scroll_up(&mut self, pos: Position) {
        if self.panels.chat_open() && self.layout.chat.panel.contains(pos) {
            self.scroll_transcript_up();
        } else if self.layout.home.inspiration.contains(pos) {
            self.inspiration_scroll.scroll_up();
        }
    }

    fn handle_scroll_down(&mut self, pos: Position) {
        if self.panels.chat_open() && self.layout.chat.panel.contains(pos) {
            self.scroll_transcript_down();
        } else if self.layout.home.inspiration.contains(pos) {
            let content_len = self.inspiration_line_count();
            let visible = self.layout.home.inspiration_visible_height;
            self.inspiration_scroll.scroll_down(content_len, visible);
        }
    }

    fn scroll_transcript_up(&mut self) {
        self.chat.scroll.scroll_up();
    }

    fn scroll_transcript_down(&mut self) {
        let width = self.layout.chat.transcript.width as usize;
        let content_len = self.transcript_visual_line_count(width);
        let visible = self.layout.chat.transcript_visible_height;
        self.chat.scroll.scroll_down(content_len, visible);
    }

    /// Handles pasted text from bracketed paste mode.
    ///
    /// The paste goes to whichever input has focus. Inputs here are
    /// single-line, so newlines become spaces and other control characters
    /// are dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if text.is_empty() || self.notifications.active_alert().is_some() {
            return;
        }

        let filtered: String = text
            .replace(['\r', '\n'], " ")
            .chars()
            .filter(|c| !c.is_control())
            .collect();

        if self.panels.auth_open() {
            self.auth_form.focused_input().insert_str(&filtered);
        } else if self.panels.chat_open() {
            self.chat.input.insert_str(&filtered);
        }
    }
}
