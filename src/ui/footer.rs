use std::time::Duration;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::tabs::Mode;
use super::theme;
use crate::util::format_interval;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_mode: Mode,
    date_field: Option<&'static str>,
    entry_buffer: &str,
    refresh_rate: Duration,
) {
    let hints = if let Some(field) = date_field {
        let display = if entry_buffer.is_empty() {
            "YYYY-MM-DD".to_string()
        } else {
            entry_buffer.to_string()
        };
        vec![
            Span::styled(format!(" {field}: "), theme::key_hint_style()),
            Span::styled(format!("{display}_ "), theme::value_style()),
            Span::styled(" Enter", theme::key_hint_style()),
            Span::styled(" apply  ", theme::label_style()),
            Span::styled("Esc", theme::key_hint_style()),
            Span::styled(" cancel", theme::label_style()),
        ]
    } else {
        let mut h = vec![
            Span::styled(" q", theme::key_hint_style()),
            Span::styled(" quit  ", theme::label_style()),
            Span::styled("?", theme::key_hint_style()),
            Span::styled(" help  ", theme::label_style()),
            Span::styled("Tab", theme::key_hint_style()),
            Span::styled(" mode  ", theme::label_style()),
            Span::styled("j/k", theme::key_hint_style()),
            Span::styled(" sensor  ", theme::label_style()),
            Span::styled("c", theme::key_hint_style()),
            Span::styled(" chart  ", theme::label_style()),
        ];

        match current_mode {
            Mode::Realtime => {
                h.extend([
                    Span::styled("+/-", theme::key_hint_style()),
                    Span::styled(" rate", theme::label_style()),
                ]);
            }
            Mode::History => {
                h.extend([
                    Span::styled("e/E", theme::key_hint_style()),
                    Span::styled(" dates  ", theme::label_style()),
                    Span::styled("[/]", theme::key_hint_style()),
                    Span::styled(" start  ", theme::label_style()),
                    Span::styled("{/}", theme::key_hint_style()),
                    Span::styled(" end  ", theme::label_style()),
                    Span::styled("r", theme::key_hint_style()),
                    Span::styled(" resample  ", theme::label_style()),
                    Span::styled("d", theme::key_hint_style()),
                    Span::styled(" report  ", theme::label_style()),
                    Span::styled("f", theme::key_hint_style()),
                    Span::styled(" format", theme::label_style()),
                ]);
            }
        }
        h
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(area);

    let line = Line::from(hints);
    frame.render_widget(Paragraph::new(line).style(theme::footer_style()), chunks[0]);

    let rate_line = Line::from(vec![
        Span::styled("refresh ", theme::label_style()),
        Span::styled(format!("{} ", format_interval(refresh_rate)), theme::value_style()),
    ]);
    frame.render_widget(
        Paragraph::new(rate_line)
            .alignment(Alignment::Right)
            .style(theme::footer_style()),
        chunks[1],
    );
}
