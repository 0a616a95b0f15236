use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::sensors::{SensorKind, SensorSample};
use crate::ui::theme;
use crate::util::format_value;

/// One card per sensor showing the latest reading, `--` until a sample
/// exists. The selected sensor's card gets an accented border.
pub fn render(frame: &mut Frame, area: Rect, latest: Option<&SensorSample>, selected: SensorKind) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (kind, chunk) in SensorKind::ALL.into_iter().zip(chunks.iter()) {
        render_card(frame, *chunk, kind, latest, kind == selected);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    kind: SensorKind,
    latest: Option<&SensorSample>,
    selected: bool,
) {
    let border = if selected {
        Style::default().fg(theme::sensor_color(kind))
    } else {
        theme::border_style()
    };
    let block = Block::default()
        .title(Line::styled(format!(" {} ", kind.label()), theme::title_style()))
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(theme::BASE));

    let value = match latest {
        Some(sample) => format_value(kind.value_of(sample)),
        None => "--".to_string(),
    };

    let lines = vec![
        Line::styled(value, theme::sensor_value_style(kind)),
        Line::styled(kind.unit().to_string(), theme::label_style()),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn renders_dashes_before_the_first_sample() {
        let mut terminal = Terminal::new(TestBackend::new(72, 4)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), None, SensorKind::Temperature))
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("--"));
    }

    #[test]
    fn renders_each_latest_reading() {
        let sample = SensorSample {
            timestamp: "12:00:00".to_string(),
            temperature: 24.5,
            humidity: 61.7,
            pressure: 1013.5,
        };

        let mut terminal = Terminal::new(TestBackend::new(72, 4)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), Some(&sample), SensorKind::Humidity))
            .unwrap();

        let rendered = format!("{:?}", terminal.backend().buffer());
        assert!(rendered.contains("24.5"));
        assert!(rendered.contains("61.7"));
        assert!(rendered.contains("1013.5"));
    }
}
