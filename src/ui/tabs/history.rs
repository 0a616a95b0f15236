use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::report::ReportState;
use crate::ui::theme;
use crate::ui::widgets::{chart_panel, metric_cards};
use crate::util::spinner_glyph;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);

    render_range_panel(frame, top[0], app);
    render_report_panel(frame, top[1], app);

    let title = format!("{} · {}", app.sensor.label(), app.chart.label());
    let annotation = format!("{} hourly samples", app.history.len());
    chart_panel::render(
        frame,
        chunks[1],
        &title,
        &annotation,
        &app.history,
        app.sensor,
        app.chart,
    );
    metric_cards::render(frame, chunks[2], app.history.last(), app.sensor);
}

fn render_range_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Line::styled(" Range ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(Style::default().bg(theme::BASE));

    let line = Line::from(vec![Span::styled(
        format!(" {} ", app.range),
        theme::value_style(),
    )]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_report_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Line::styled(" Report ", theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(Style::default().bg(theme::BASE));

    let status = match app.report.state() {
        ReportState::Idle => " idle".to_string(),
        ReportState::Running { since } => {
            format!(" {} generating…", spinner_glyph(since.elapsed()))
        }
        ReportState::Done { path } => format!(" saved {}", path.display()),
        ReportState::Failed { message } => format!(" failed: {message}"),
    };

    let line = Line::from(vec![
        Span::styled(status, theme::report_style(app.report.state())),
        Span::styled(
            format!("  [{}]", app.report_format.label()),
            theme::label_style(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
