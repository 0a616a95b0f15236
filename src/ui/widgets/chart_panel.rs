use std::fmt;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Sparkline};
use ratatui::Frame;

use crate::sensors::{SensorKind, SensorSample};
use crate::ui::theme;

/// How the selected sensor's series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    Line,
    Bar,
    Area,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Area];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Area => "area",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ChartKind::Line => 0,
            ChartKind::Bar => 1,
            ChartKind::Area => 2,
        }
    }

    pub fn next(&self) -> ChartKind {
        let idx = (self.index() + 1) % Self::ALL.len();
        Self::ALL[idx]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Draws `samples` for one sensor in the requested style. The annotation
/// lands in the bottom-left corner of the border.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    annotation: &str,
    samples: &[SensorSample],
    sensor: SensorKind,
    chart: ChartKind,
) {
    let color = theme::sensor_color(sensor);
    let block = Block::default()
        .title(Line::styled(format!(" {title} "), theme::title_style()))
        .title_bottom(Line::styled(
            format!(" {annotation} "),
            Style::default().fg(color),
        ))
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .style(Style::default().bg(theme::BASE));

    match chart {
        ChartKind::Line => render_line(frame, area, block, samples, sensor, color),
        ChartKind::Bar => render_bar(frame, area, block, samples, sensor, color),
        ChartKind::Area => render_area(frame, area, block, samples, sensor, color),
    }
}

fn render_line(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    samples: &[SensorSample],
    sensor: SensorKind,
    color: Color,
) {
    let series: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64, sensor.value_of(sample)))
        .collect();
    let (lo, hi) = axis_bounds(samples, sensor);
    let x_max = samples.len().saturating_sub(1).max(1) as f64;

    let x_labels = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) if samples.len() > 1 => vec![
            Span::styled(first.time_label().to_string(), theme::label_style()),
            Span::styled(last.time_label().to_string(), theme::label_style()),
        ],
        _ => Vec::new(),
    };
    let mid = (lo + hi) / 2.0;
    let y_labels = vec![
        Span::styled(format!("{lo:.1}"), theme::label_style()),
        Span::styled(format!("{mid:.1}"), theme::label_style()),
        Span::styled(format!("{hi:.1}"), theme::label_style()),
    ];

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&series);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme::label_style())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::label_style())
                .bounds([lo, hi])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_bar(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    samples: &[SensorSample],
    sensor: SensorKind,
    color: Color,
) {
    const BAR_WIDTH: u16 = 8;

    // Only the most recent samples that fit across the panel.
    let slots = (area.width.saturating_sub(2) / (BAR_WIDTH + 1)).max(1) as usize;
    let skip = samples.len().saturating_sub(slots);
    let bars: Vec<(&str, u64)> = samples[skip..]
        .iter()
        .map(|sample| (sample.time_label(), sensor.value_of(sample).round() as u64))
        .collect();
    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);

    let barchart = BarChart::default()
        .block(block)
        .data(&bars)
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(theme::TEXT))
        .label_style(theme::label_style())
        .max(max);

    frame.render_widget(barchart, area);
}

fn render_area(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    samples: &[SensorSample],
    sensor: SensorKind,
    color: Color,
) {
    let (lo, hi) = axis_bounds(samples, sensor);

    // Tenth-of-unit resolution above the padded floor, trimmed to the
    // most recent points that fit across the panel.
    let window = area.width.saturating_sub(2) as usize;
    let skip = samples.len().saturating_sub(window);
    let data: Vec<u64> = samples[skip..]
        .iter()
        .map(|sample| ((sensor.value_of(sample) - lo) * 10.0).round().max(0.0) as u64)
        .collect();
    let max = (((hi - lo) * 10.0).round() as u64).max(1);

    let block = block.title_bottom(
        Line::styled(format!(" {lo:.1}..{hi:.1} "), theme::label_style()).right_aligned(),
    );

    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .max(max)
        .style(Style::default().fg(color));

    frame.render_widget(sparkline, area);
}

/// Vertical bounds for the series, padded so the trace never hugs the
/// border. Falls back to the sensor's nominal range when there is no data.
fn axis_bounds(samples: &[SensorSample], sensor: SensorKind) -> (f64, f64) {
    let (mut lo, mut hi) = if samples.is_empty() {
        sensor.range()
    } else {
        samples.iter().map(|s| sensor.value_of(s)).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), v| (lo.min(v), hi.max(v)),
        )
    };

    let pad = (hi - lo).max(1.0) * 0.1;
    lo -= pad;
    hi += pad;
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn samples(n: usize) -> Vec<SensorSample> {
        (0..n)
            .map(|i| SensorSample {
                timestamp: format!("00:00:{i:02}"),
                temperature: 22.0 + i as f64 * 0.3,
                humidity: 60.0 + i as f64,
                pressure: 1012.0,
            })
            .collect()
    }

    #[test]
    fn chart_kind_cycles_through_all_styles() {
        let mut kind = ChartKind::Line;
        for expected in [ChartKind::Bar, ChartKind::Area, ChartKind::Line] {
            kind = kind.next();
            assert_eq!(kind, expected);
        }
    }

    #[test]
    fn every_chart_kind_renders_every_sample_count() {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        for kind in ChartKind::ALL {
            for count in [0, 1, 5, 40] {
                let data = samples(count);
                terminal
                    .draw(|frame| {
                        render(
                            frame,
                            frame.area(),
                            "Temperature",
                            "test",
                            &data,
                            SensorKind::Temperature,
                            kind,
                        );
                    })
                    .unwrap();
            }
        }
    }

    #[test]
    fn axis_bounds_pad_the_observed_span() {
        let data = samples(5);
        let (lo, hi) = axis_bounds(&data, SensorKind::Temperature);
        assert!(lo < 22.0);
        assert!(hi > 23.2);
    }

    #[test]
    fn axis_bounds_fall_back_to_the_nominal_range() {
        let (lo, hi) = axis_bounds(&[], SensorKind::Pressure);
        assert!(lo < 1010.0);
        assert!(hi > 1020.0);
    }
}
