pub mod footer;
pub mod header;
pub mod help;
pub mod layout;
pub mod tabs;
pub mod theme;
pub mod widgets;

use ratatui::Frame;

use crate::app::{App, DateInput};
use tabs::Mode;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chrome = layout::split(area);

    header::render(
        frame,
        chrome.header,
        app.mode,
        app.hostname.as_str(),
        app.started.elapsed(),
    );

    match app.mode {
        Mode::Realtime => tabs::live::render(frame, chrome.body, app),
        Mode::History => tabs::history::render(frame, chrome.body, app),
    }

    let date_field = match app.date_input {
        DateInput::None => None,
        DateInput::Start => Some("start"),
        DateInput::End => Some("end"),
    };
    footer::render(
        frame,
        chrome.footer,
        app.mode,
        date_field,
        &app.input_buffer,
        app.refresh_rate,
    );

    if app.show_help {
        help::render(frame, area);
    }
}
