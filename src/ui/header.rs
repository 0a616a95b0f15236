use std::time::Duration;

use chrono::Local;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::tabs::Mode;
use super::theme;
use crate::util::format_uptime;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_mode: Mode,
    hostname: &str,
    uptime: Duration,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(chunks[0]);

    // Top line: app name + hostname + uptime, wall clock on the right
    let uptime_str = format_uptime(uptime);
    let mut info_spans = vec![
        Span::styled(" envmon ", theme::title_style()),
        Span::styled(format!("  {hostname}"), theme::value_style()),
        Span::styled(format!("  up {uptime_str}"), theme::label_style()),
    ];
    if current_mode == Mode::Realtime {
        let dot = if uptime.as_millis() / 600 % 2 == 0 {
            "●"
        } else {
            "○"
        };
        info_spans.push(Span::styled(format!("  {dot} live"), theme::live_dot_style()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(info_spans)).style(theme::header_style()),
        top[0],
    );

    let clock = Local::now().format("%H:%M:%S").to_string();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{clock} "),
            theme::label_style(),
        )))
        .alignment(Alignment::Right)
        .style(theme::header_style()),
        top[1],
    );

    // Mode bar
    let mut mode_spans = vec![Span::raw(" ")];
    for mode in &Mode::ALL {
        let label = format!(" {}:{} ", mode.index() + 1, mode.label());
        if *mode == current_mode {
            mode_spans.push(Span::styled(label, theme::active_tab_style()));
        } else {
            mode_spans.push(Span::styled(label, theme::inactive_tab_style()));
        }
        mode_spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(mode_spans)).style(theme::header_style()),
        chunks[1],
    );
}

/// Which mode label sits under `col` in the mode bar. Mirrors the span
/// layout in [`render`]: an initial space, then ` N:Label ` entries with
/// one gap column between them.
pub fn mode_at_column(col: u16) -> Option<Mode> {
    let mut x: u16 = 1;
    for mode in Mode::ALL {
        let label = format!(" {}:{} ", mode.index() + 1, mode.label());
        let width = label.len() as u16;
        if col >= x && col < x + width {
            return Some(mode);
        }
        x += width + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_bar_click_targets() {
        // " " + " 1:Live " + " " + " 2:History "
        assert_eq!(mode_at_column(0), None);
        assert_eq!(mode_at_column(1), Some(Mode::Realtime));
        assert_eq!(mode_at_column(8), Some(Mode::Realtime));
        assert_eq!(mode_at_column(9), None);
        assert_eq!(mode_at_column(10), Some(Mode::History));
        assert_eq!(mode_at_column(20), Some(Mode::History));
        assert_eq!(mode_at_column(21), None);
        assert_eq!(mode_at_column(200), None);
    }
}
