//! Auth modal rendering: tab selectors and the login/signup form.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};
use crate::app::App;
use crate::app::state::{AuthField, AuthTab};

impl App {
    /// Renders the centered auth modal. Everything outside this rect is the
    /// backdrop; a click there closes the modal.
    pub(crate) fn render_auth_modal(&self, frame: &mut Frame) {
        let area = self.layout.auth_modal;
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .title(" MindEase Account ")
            .title_style(self.theme.header_style())
            .title_bottom(Line::from(vec![
                Span::styled(" [Esc] ", self.theme.highlight_style()),
                Span::styled("Close ", self.theme.muted_style()),
            ]))
            .border_style(self.theme.highlight_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Tab selectors
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Min(1),    // Hint
        ])
        .split(inner);

        self.render_auth_tabs(frame, chunks[0]);
        self.render_auth_field(frame, chunks[2], AuthField::Username);
        self.render_auth_field(frame, chunks[3], AuthField::Password);

        let hint = Line::from(vec![
            Span::styled("[Enter] ", self.theme.highlight_style()),
            Span::styled(self.panels.auth_tab().label(), self.theme.muted_style()),
            Span::styled("  [Tab] ", self.theme.highlight_style()),
            Span::styled("Next field", self.theme.muted_style()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(hint), chunks[4]);
    }

    /// Renders the mutually exclusive tab highlight.
    fn render_auth_tabs(&self, frame: &mut Frame, area: Rect) {
        let active = self.panels.auth_tab();
        let tab_span = |tab: AuthTab| {
            if tab == active {
                Span::styled(format!("[ {} ]", tab.label()), self.theme.highlight_style())
            } else {
                Span::styled(format!("  {}  ", tab.label()), self.theme.muted_style())
            }
        };
        let tabs = Line::from(vec![
            tab_span(AuthTab::Login),
            Span::raw("   "),
            tab_span(AuthTab::Signup),
        ])
        .centered();
        frame.render_widget(Paragraph::new(tabs), area);
    }

    fn render_auth_field(&self, frame: &mut Frame, area: Rect, field: AuthField) {
        let (textarea, title) = match field {
            AuthField::Username => (&self.auth_form.username, " Username "),
            AuthField::Password => (&self.auth_form.password, " Password "),
        };
        let focused = self.auth_form.focus == field;
        let border_style = if focused {
            self.theme.highlight_style()
        } else {
            self.theme.border_style()
        };

        let mut widget = textarea.clone();
        widget.set_block(
            Block::bordered()
                .title(title)
                .border_style(border_style),
        );
        widget.set_style(self.theme.normal_style());
        widget.set_placeholder_style(self.theme.placeholder_style());
        if !focused {
            // Hide the cursor line highlight on the unfocused field.
            widget.set_cursor_style(self.theme.normal_style());
        }
        frame.render_widget(&widget, area);
    }
}
