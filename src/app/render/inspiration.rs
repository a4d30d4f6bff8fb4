//! Inspiration card rendering.
//!
//! Cards are projected straight from the static quote catalog; the section
//! scrolls as one column of cards.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::wrap_text;
use crate::app::App;
use crate::content::{INSPIRATIONAL_QUOTES, QuoteRecord};

impl App {
    pub(crate) fn render_inspiration(&self, frame: &mut Frame) {
        let area = self.layout.home.inspiration;
        let block = Block::bordered()
            .title(" Daily Inspiration ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = self.inspiration_lines(inner.width as usize);
        #[allow(clippy::cast_possible_truncation)] // Scroll offset fits in u16
        let offset = self.inspiration_scroll.offset.min(u16::MAX as usize) as u16;
        let cards = Paragraph::new(lines).scroll((offset, 0));
        frame.render_widget(cards, inner);
    }

    /// Builds the card lines at the given content width.
    fn inspiration_lines(&self, width: usize) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for quote in INSPIRATIONAL_QUOTES {
            self.push_card_lines(&mut lines, quote, width);
        }
        lines
    }

    fn push_card_lines<'a>(&self, lines: &mut Vec<Line<'a>>, quote: &QuoteRecord, width: usize) {
        lines.push(Line::from(vec![
            Span::styled(format!("⭐ {}", quote.category), self.theme.highlight_style()),
            Span::styled(format!("  {:.1}", quote.score), self.theme.success_style()),
        ]));
        for wrapped in wrap_text(&format!("\"{}\"", quote.text), width) {
            lines.push(Line::from(Span::styled(wrapped, self.theme.normal_style())));
        }
        lines.push(Line::from(Span::styled(
            format!("— {}", quote.author),
            self.theme.muted_style(),
        )));
        lines.push(Line::default());
    }

    /// Number of lines the inspiration section occupies at the current
    /// layout width; used to clamp scrolling.
    pub(crate) fn inspiration_line_count(&self) -> usize {
        let width = self.layout.home.inspiration.width.saturating_sub(2) as usize;
        self.inspiration_lines(width).len()
    }
}
