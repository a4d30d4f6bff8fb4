//! Chat widget and launcher rendering.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::wrap_text;
use crate::app::App;
use crate::app::state::ChatSender;

impl App {
    /// Renders the floating chat widget over the home view.
    pub(crate) fn render_chat(&self, frame: &mut Frame) {
        let layout = self.layout.chat;

        frame.render_widget(Clear, layout.panel);
        let block = Block::bordered()
            .title(" 💬 MindEase Support ")
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" [Esc] ", self.theme.highlight_style()),
                Span::styled("Close ", self.theme.muted_style()),
            ]))
            .border_style(self.theme.highlight_style());
        frame.render_widget(block, layout.panel);

        // Transcript, pinned to the bottom while auto-scroll is on.
        let lines = self.transcript_lines(layout.transcript.width as usize);
        #[allow(clippy::cast_possible_truncation)] // Scroll offset fits in u16
        let offset = self.chat.scroll.offset.min(u16::MAX as usize) as u16;
        let transcript = Paragraph::new(lines).scroll((offset, 0));
        frame.render_widget(transcript, layout.transcript);

        // Composer.
        let mut input = self.chat.input.clone();
        input.set_block(
            Block::bordered()
                .title(" Message ")
                .border_style(self.theme.border_style()),
        );
        input.set_style(self.theme.normal_style());
        input.set_placeholder_style(self.theme.placeholder_style());
        frame.render_widget(&input, layout.input);
    }

    /// Renders the chat launcher shown while the widget is closed.
    pub(crate) fn render_launcher(&self, frame: &mut Frame) {
        let area = self.layout.launcher;
        frame.render_widget(Clear, area);
        let button = Paragraph::new(Line::from(Span::styled("💬 Chat", self.theme.highlight_style())).centered())
            .block(Block::bordered().border_style(self.theme.highlight_style()));
        frame.render_widget(button, area);
    }

    /// Builds the transcript lines at the given width, including the typing
    /// indicator while requests are in flight.
    fn transcript_lines(&self, width: usize) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for message in &self.chat.transcript {
            let (prefix, style) = match message.sender {
                ChatSender::User => ("You: ", self.theme.chat_user_style()),
                ChatSender::Bot => ("MindEase: ", self.theme.chat_bot_style()),
            };
            for wrapped in wrap_text(&format!("{prefix}{}", message.text), width) {
                lines.push(Line::from(Span::styled(wrapped, style)));
            }
        }
        if self.chat.in_flight > 0 {
            lines.push(Line::from(Span::styled(
                "MindEase is typing...",
                self.theme.muted_style(),
            )));
        }
        lines
    }

    /// Number of visual lines the transcript occupies at the given width;
    /// used for scroll clamping and bottom-following.
    pub(crate) fn transcript_visual_line_count(&self, width: usize) -> usize {
        self.transcript_lines(width).len()
    }
}
