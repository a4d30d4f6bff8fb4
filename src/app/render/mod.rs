//! UI rendering.
//!
//! Rendering is a pure projection of the app state into the frame, using
//! the rects cached by `App::update_layout` for the current frame.

mod auth;
mod chat;
mod home;
mod inspiration;
mod notifications;

use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

impl App {
    /// Renders the whole page in stacking order: home sections, then the
    /// chat widget or its launcher, then the auth modal, then notifications
    /// on top of everything.
    pub fn render(&self, frame: &mut Frame) {
        self.render_home(frame);
        self.render_inspiration(frame);

        if self.panels.chat_open() {
            self.render_chat(frame);
        } else {
            self.render_launcher(frame);
        }

        if self.panels.auth_open() {
            self.render_auth_modal(frame);
        }

        self.render_notifications(frame);
    }
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are emitted on their own line rather than split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
