use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 26, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        header_line("Modes"),
        key_line("1 / 2", "Switch to Live / History"),
        key_line("Tab / Shift+Tab", "Cycle through modes"),
        key_line("F1 / F2", "Switch to mode by function key"),
        Line::raw(""),
        header_line("Display"),
        key_line("j / k", "Select next / previous sensor"),
        key_line("c", "Cycle chart style"),
        key_line("l / b / a", "Line / bar / area chart"),
        Line::raw(""),
        header_line("Live Mode"),
        key_line("+/-", "Increase / decrease sample rate"),
        Line::raw(""),
        header_line("History Mode"),
        key_line("e / E", "Type a new start / end date"),
        key_line("[ / ]", "Shift start date by a day"),
        key_line("{ / }", "Shift end date by a day"),
        key_line("r", "Resample the range"),
        key_line("d", "Download a report"),
        key_line("f", "Toggle report format"),
        Line::raw(""),
        header_line("General"),
        key_line("?", "Toggle this help"),
        key_line("q / Ctrl+C", "Quit"),
    ];

    let block = Block::default()
        .title(Line::styled(" Help ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(ratatui::style::Style::default().bg(theme::BASE));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

fn header_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(format!("  {text}"), theme::title_style()))
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<20}"), theme::key_hint_style()),
        Span::styled(desc, theme::label_style()),
    ])
}

fn centered_rect(width_pct: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
