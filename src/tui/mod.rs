//! Terminal UI utilities.

mod setup;
mod theme;

pub use setup::TerminalEventGuard;
pub use theme::Theme;
