use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed chrome around the active screen: a two-line header (identity line
/// plus mode bar) and a one-line footer of key hints.
pub struct Chrome {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> Chrome {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    Chrome {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}
