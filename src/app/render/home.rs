//! Home view rendering: header, mood selector, dashboard charts and footer.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Chart, Dataset, GraphType, LineGauge, Paragraph},
};

use crate::app::App;
use crate::app::state::MoodOption;
use crate::content::{ACTIVITY_PROGRESS, WEEKLY_MOOD_TREND};

impl App {
    pub(crate) fn render_home(&self, frame: &mut Frame) {
        let layout = self.layout.home;
        self.render_header(frame, layout.header);
        self.render_mood_selector(frame);
        self.render_dashboard(frame, layout.dashboard);
        self.render_footer(frame, layout.footer);
    }

    /// Renders the title bar (single line).
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(" 🧠 MindEase ", self.theme.header_style()),
            Span::styled("Your mind matters", self.theme.muted_style()),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    /// Renders the five mood cards; the selected one is highlighted.
    fn render_mood_selector(&self, frame: &mut Frame) {
        for (index, (&area, &option)) in self
            .layout
            .home
            .mood_options
            .iter()
            .zip(MoodOption::all())
            .enumerate()
        {
            let selected = self.selected_mood() == Some(option);
            let (border_style, label_style) = if selected {
                (self.theme.highlight_style(), self.theme.highlight_style())
            } else {
                (self.theme.border_style(), self.theme.normal_style())
            };

            let block = Block::bordered()
                .border_style(border_style)
                .title(format!(" {} ", index + 1))
                .title_style(self.theme.muted_style());
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let marker = if selected { "● " } else { "" };
            let card = Paragraph::new(vec![
                Line::from(Span::raw(option.emoji())).centered(),
                Line::from(Span::styled(
                    format!("{marker}{}", option.label()),
                    label_style,
                ))
                .centered(),
            ]);
            frame.render_widget(card, inner);
        }
    }

    /// Renders the dashboard row: weekly mood trend chart and activity
    /// progress gauges, both from static sample data.
    fn render_dashboard(&self, frame: &mut Frame, area: Rect) {
        let halves =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
        self.render_mood_trend(frame, halves[0]);
        self.render_activities(frame, halves[1]);
    }

    #[allow(clippy::cast_precision_loss)] // Seven sample points
    fn render_mood_trend(&self, frame: &mut Frame, area: Rect) {
        let points: Vec<(f64, f64)> = WEEKLY_MOOD_TREND
            .iter()
            .enumerate()
            .map(|(i, &(_, level))| (i as f64, level))
            .collect();

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(self.theme.success_style())
            .data(&points);

        let x_labels: Vec<Span> = WEEKLY_MOOD_TREND
            .iter()
            .map(|&(day, _)| Span::styled(day, self.theme.muted_style()))
            .collect();

        let chart = Chart::new(vec![dataset])
            .block(
                Block::bordered()
                    .title(" Mood Trend ")
                    .title_style(self.theme.header_style())
                    .border_style(self.theme.border_style()),
            )
            .x_axis(
                Axis::default()
                    .bounds([0.0, (WEEKLY_MOOD_TREND.len() - 1) as f64])
                    .labels(x_labels),
            )
            .y_axis(Axis::default().bounds([0.0, 5.0]).labels([
                Span::styled("0", self.theme.muted_style()),
                Span::styled("5", self.theme.muted_style()),
            ]));

        frame.render_widget(chart, area);
    }

    fn render_activities(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Activities ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(2); 3]).split(inner);
        for (&activity, row) in ACTIVITY_PROGRESS.iter().zip(rows.iter()) {
            if row.height == 0 {
                continue;
            }
            let chunks =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(*row);
            frame.render_widget(
                Paragraph::new(Span::styled(activity.name, self.theme.normal_style())),
                chunks[0],
            );
            let gauge = LineGauge::default()
                .ratio(f64::from(activity.percent) / 100.0)
                .label(format!("{}%", activity.percent))
                .filled_style(self.theme.success_style())
                .unfilled_style(self.theme.muted_style());
            frame.render_widget(gauge, chunks[1]);
        }
    }

    /// Renders the footer key hints (single line).
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.panels.auth_open() {
            vec![
                Span::styled(" [←/→] ", self.theme.highlight_style()),
                Span::styled("Tab  ", self.theme.muted_style()),
                Span::styled("[Enter] ", self.theme.highlight_style()),
                Span::styled("Submit  ", self.theme.muted_style()),
                Span::styled("[Esc] ", self.theme.highlight_style()),
                Span::styled("Close", self.theme.muted_style()),
            ]
        } else if self.panels.chat_open() {
            vec![
                Span::styled(" [Enter] ", self.theme.highlight_style()),
                Span::styled("Send  ", self.theme.muted_style()),
                Span::styled("[Esc] ", self.theme.highlight_style()),
                Span::styled("Close chat", self.theme.muted_style()),
            ]
        } else {
            vec![
                Span::styled(" [1-5] ", self.theme.highlight_style()),
                Span::styled("Mood  ", self.theme.muted_style()),
                Span::styled("[c] ", self.theme.highlight_style()),
                Span::styled("Chat  ", self.theme.muted_style()),
                Span::styled("[l] ", self.theme.highlight_style()),
                Span::styled("Login  ", self.theme.muted_style()),
                Span::styled("[f] ", self.theme.highlight_style()),
                Span::styled("Friend  ", self.theme.muted_style()),
                Span::styled("[b] ", self.theme.highlight_style()),
                Span::styled("Counselor  ", self.theme.muted_style()),
                Span::styled("[q] ", self.theme.highlight_style()),
                Span::styled("Quit", self.theme.muted_style()),
            ]
        };
        frame.render_widget(Paragraph::new(Line::from(hints)), area);
    }
}
