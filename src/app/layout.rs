//! Layout calculation helpers for the TUI.
//!
//! This module provides a single source of truth for every rect the renderer
//! draws into and the mouse handler hit-tests against. The layout is
//! calculated once per frame and cached on the app, so a click on the auth
//! modal backdrop is judged against exactly the rect the modal was drawn in.

use ratatui::layout::{Constraint, Layout, Rect};

/// Number of mood option cards.
pub const MOOD_OPTION_COUNT: usize = 5;

/// Width of the floating chat widget.
const CHAT_WIDTH: u16 = 44;
/// Height of the floating chat widget.
const CHAT_HEIGHT: u16 = 16;
/// Size of the chat launcher affordance.
const LAUNCHER_WIDTH: u16 = 12;
const LAUNCHER_HEIGHT: u16 = 3;
/// Size of the centered auth modal content area.
const AUTH_MODAL_WIDTH: u16 = 46;
const AUTH_MODAL_HEIGHT: u16 = 14;
/// Size of the centered alert box.
const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 8;
/// Width of a toast notification.
pub const TOAST_WIDTH: u16 = 40;

/// Rects for the always-visible home sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeLayout {
    /// Title bar (1 line).
    pub header: Rect,
    /// Mood selector strip.
    pub mood: Rect,
    /// Per-option card rects within the mood strip, in display order.
    pub mood_options: [Rect; MOOD_OPTION_COUNT],
    /// Dashboard charts row.
    pub dashboard: Rect,
    /// Inspiration cards area (scrollable).
    pub inspiration: Rect,
    /// Key hints (1 line).
    pub footer: Rect,
    /// Visible content height of the inspiration area (excluding borders).
    pub inspiration_visible_height: usize,
}

/// Rects for the floating chat widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLayout {
    /// The whole widget panel.
    pub panel: Rect,
    /// Transcript area inside the panel.
    pub transcript: Rect,
    /// Composer area inside the panel.
    pub input: Rect,
    /// Visible height of the transcript (excluding borders).
    pub transcript_visible_height: usize,
}

/// All rects for one frame. Hidden panels carry zero-sized rects; the mouse
/// handler additionally consults the visibility state before hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLayout {
    /// Home sections.
    pub home: HomeLayout,
    /// Chat launcher affordance (bottom right), zero-sized while the chat
    /// widget is open.
    pub launcher: Rect,
    /// Floating chat widget, zero-sized while closed.
    pub chat: ChatLayout,
    /// Auth modal content area, zero-sized while closed. Everything outside
    /// this rect is the backdrop.
    pub auth_modal: Rect,
    /// Centered alert box, zero-sized when no alert is active.
    pub alert: Rect,
}

/// Calculates the home section layout.
#[must_use]
pub fn calculate_home_layout(area: Rect) -> HomeLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(4), // Mood selector
        Constraint::Length(9), // Dashboard charts
        Constraint::Min(5),    // Inspiration cards
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let mood = chunks[1];
    let mood_columns = Layout::horizontal([Constraint::Ratio(1, 5); MOOD_OPTION_COUNT]).split(mood);
    let mut mood_options = [Rect::default(); MOOD_OPTION_COUNT];
    for (slot, rect) in mood_options.iter_mut().zip(mood_columns.iter()) {
        *slot = *rect;
    }

    let inspiration = chunks[3];

    HomeLayout {
        header: chunks[0],
        mood,
        mood_options,
        dashboard: chunks[2],
        inspiration,
        footer: chunks[4],
        inspiration_visible_height: inspiration.height.saturating_sub(2) as usize,
    }
}

/// Calculates the floating chat widget layout, anchored bottom-right above
/// the footer.
#[must_use]
pub fn calculate_chat_layout(area: Rect) -> ChatLayout {
    let width = CHAT_WIDTH.min(area.width);
    let height = CHAT_HEIGHT.min(area.height.saturating_sub(1));
    let panel = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    };

    let inner = Rect {
        x: panel.x + 1,
        y: panel.y + 1,
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    };
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(inner);
    let transcript = chunks[0];

    ChatLayout {
        panel,
        transcript,
        input: chunks[1],
        transcript_visible_height: transcript.height as usize,
    }
}

/// Calculates the chat launcher rect, bottom-right above the footer.
#[must_use]
pub fn calculate_launcher_rect(area: Rect) -> Rect {
    let width = LAUNCHER_WIDTH.min(area.width);
    let height = LAUNCHER_HEIGHT.min(area.height);
    Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    }
}

/// Centers a rect of the given size within `area`, clamping to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Calculates the auth modal content rect.
#[must_use]
pub fn calculate_auth_modal_rect(area: Rect) -> Rect {
    centered_rect(AUTH_MODAL_WIDTH, AUTH_MODAL_HEIGHT, area)
}

/// Calculates the centered alert box rect.
#[must_use]
pub fn calculate_alert_rect(area: Rect) -> Rect {
    centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_layout_sections_stack_vertically() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = calculate_home_layout(area);

        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.mood.height, 4);
        assert_eq!(layout.dashboard.height, 9);
        assert_eq!(layout.footer.height, 1);
        // Inspiration takes the rest: 30 - 1 - 4 - 9 - 1 = 15
        assert_eq!(layout.inspiration.height, 15);
        assert_eq!(layout.inspiration_visible_height, 13);

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.mood.y, 1);
        assert_eq!(layout.dashboard.y, 5);
        assert_eq!(layout.inspiration.y, 14);
        assert_eq!(layout.footer.y, 29);
    }

    #[test]
    fn mood_options_tile_the_mood_strip() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = calculate_home_layout(area);

        let total: u16 = layout.mood_options.iter().map(|r| r.width).sum();
        assert_eq!(total, layout.mood.width);
        for pair in layout.mood_options.windows(2) {
            assert_eq!(pair[0].right(), pair[1].x);
        }
        for rect in &layout.mood_options {
            assert_eq!(rect.y, layout.mood.y);
            assert_eq!(rect.height, layout.mood.height);
        }
    }

    #[test]
    fn chat_widget_is_anchored_bottom_right() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_chat_layout(area);

        assert_eq!(layout.panel.right(), area.right());
        assert_eq!(layout.panel.bottom(), area.bottom() - 1);
        assert_eq!(layout.panel.width, CHAT_WIDTH);
        assert_eq!(layout.panel.height, CHAT_HEIGHT);

        // Transcript and input sit inside the panel borders.
        assert!(layout.transcript.y > layout.panel.y);
        assert_eq!(layout.input.bottom() + 1, layout.panel.bottom());
        assert_eq!(layout.input.height, 3);
    }

    #[test]
    fn chat_widget_shrinks_on_small_terminals() {
        let area = Rect::new(0, 0, 30, 10);
        let layout = calculate_chat_layout(area);
        assert!(layout.panel.width <= 30);
        assert!(layout.panel.height <= 10);
    }

    #[test]
    fn launcher_does_not_overlap_chat_anchor_edge() {
        let area = Rect::new(0, 0, 120, 40);
        let launcher = calculate_launcher_rect(area);
        assert!(launcher.right() < area.right());
        assert!(launcher.bottom() < area.bottom());
        assert_eq!(launcher.width, LAUNCHER_WIDTH);
    }

    #[test]
    fn auth_modal_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = calculate_auth_modal_rect(area);
        assert_eq!(modal.x, (100 - AUTH_MODAL_WIDTH) / 2);
        assert_eq!(modal.y, (40 - AUTH_MODAL_HEIGHT) / 2);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 6);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 6);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
    }
}
