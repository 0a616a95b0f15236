use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::{chart_panel, metric_cards};
use crate::util::format_measure;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(area);

    let samples = app.live.snapshot();
    let title = format!("{} · {}", app.sensor.label(), app.chart.label());
    let annotation = match app.live.latest() {
        Some(sample) => format!(
            "{} · {}/{} samples",
            format_measure(app.sensor.value_of(sample), app.sensor.unit()),
            app.live.len(),
            app.live.capacity()
        ),
        None => "waiting for samples".to_string(),
    };

    chart_panel::render(
        frame,
        chunks[0],
        &title,
        &annotation,
        &samples,
        app.sensor,
        app.chart,
    );
    metric_cards::render(frame, chunks[1], samples.last(), app.sensor);
}
