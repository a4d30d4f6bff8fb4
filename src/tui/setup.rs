//! Terminal setup and configuration utilities.
//!
//! This module handles low-level terminal event configuration:
//! - Mouse capture (for launcher clicks and modal backdrop dismissal)
//! - Bracketed paste mode (for reliable paste into the chat input)

use std::io::stdout;

use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

/// Guard to ensure terminal event modes are disabled on drop.
///
/// This ensures proper cleanup even if the application panics.
pub struct TerminalEventGuard {
    mouse_capture_enabled: bool,
    bracketed_paste_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            mouse_capture_enabled: false,
            bracketed_paste_enabled: false,
        };

        match execute!(stdout(), EnableMouseCapture) {
            Ok(()) => guard.mouse_capture_enabled = true,
            Err(e) => {
                eprintln!("Warning: Could not enable mouse capture: {e}");
                eprintln!("Clicking the chat launcher or modal backdrop will not work.");
            }
        }

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => guard.bracketed_paste_enabled = true,
            Err(e) => {
                eprintln!("Warning: Could not enable bracketed paste mode: {e}");
                eprintln!("Multi-line paste may not work correctly.");
            }
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
        if self.mouse_capture_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
    }
}
