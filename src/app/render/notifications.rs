//! Notification rendering: the toast stack and the blocking alert overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::wrap_text;
use crate::app::App;
use crate::app::layout::TOAST_WIDTH;
use crate::app::notifications::{Notification, NotificationPhase};

impl App {
    /// Renders toasts and the active alert above everything else.
    pub(crate) fn render_notifications(&self, frame: &mut Frame) {
        self.render_toasts(frame);
        if let Some(alert) = self.notifications.active_alert() {
            self.render_alert(frame, alert);
        }
    }

    /// Renders the toast stack in the top-right corner, oldest at the top.
    fn render_toasts(&self, frame: &mut Frame) {
        let area = frame.area();
        let width = TOAST_WIDTH.min(area.width);
        let mut y = area.y;

        for toast in self.notifications.toasts() {
            let body_width = width.saturating_sub(2) as usize;
            let lines = wrap_text(&toast.body, body_width);
            #[allow(clippy::cast_possible_truncation)] // Toast bodies are short
            let height = (lines.len() as u16 + 2).min(area.bottom().saturating_sub(y));
            if height < 3 {
                break;
            }

            let rect = Rect {
                x: area.right().saturating_sub(width),
                y,
                width,
                height,
            };
            y += height;

            let style = self.toast_style(toast.phase);
            frame.render_widget(Clear, rect);
            let body: Vec<Line> = lines
                .into_iter()
                .map(|line| Line::from(Span::styled(line, style)))
                .collect();
            frame.render_widget(
                Paragraph::new(body).block(Block::bordered().border_style(style)),
                rect,
            );
        }
    }

    fn toast_style(&self, phase: NotificationPhase) -> Style {
        match phase {
            NotificationPhase::Entering | NotificationPhase::Exiting => self.theme.muted_style(),
            NotificationPhase::Visible => self.theme.success_style(),
        }
    }

    /// Renders the centered alert box. The alert blocks input until the
    /// dismiss key is pressed or the box is clicked.
    fn render_alert(&self, frame: &mut Frame, alert: &Notification) {
        let area = self.layout.alert;
        frame.render_widget(Clear, area);

        let title = alert.title.as_deref().unwrap_or("Notice");
        let block = Block::bordered()
            .title(format!(" {title} "))
            .title_style(self.theme.header_style())
            .border_style(self.theme.highlight_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = wrap_text(&alert.body, inner.width as usize)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, self.theme.normal_style())).centered())
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled("[Enter] ", self.theme.highlight_style()),
                Span::styled("Got it!", self.theme.muted_style()),
            ])
            .centered(),
        );
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
