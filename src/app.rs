use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::event::{self, AppEvent};
use crate::report::{ReportFormat, ReportJob, ReportRequest, REPORT_DELAY};
use crate::sensors::buffer::SampleBuffer;
use crate::sensors::generator::SampleGenerator;
use crate::sensors::history::{build_history, DateRange};
use crate::sensors::{SensorKind, SensorSample};
use crate::ui::tabs::Mode;
use crate::ui::widgets::chart_panel::ChartKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput {
    None,
    Start,
    End,
}

pub struct App {
    pub running: bool,
    pub mode: Mode,
    pub sensor: SensorKind,
    pub chart: ChartKind,
    pub live: SampleBuffer,
    pub history: Vec<SensorSample>,
    pub range: DateRange,
    pub generator: SampleGenerator,
    pub report: ReportJob,
    pub report_format: ReportFormat,
    pub report_dir: PathBuf,
    pub report_delay: Duration,
    pub hostname: String,
    pub refresh_rate: Duration,
    pub show_help: bool,
    pub date_input: DateInput,
    pub input_buffer: String,
    pub started: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let hostname = hostname::get()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let mut generator = SampleGenerator::new(config.seed);
        let range = config.date_range();
        let history = build_history(&mut generator, &range);

        Self {
            running: true,
            mode: Mode::Realtime,
            sensor: config.sensor,
            chart: config.chart,
            live: SampleBuffer::default(),
            history,
            range,
            generator,
            report: ReportJob::default(),
            report_format: config.report_format,
            report_dir: config.report_dir.clone(),
            report_delay: REPORT_DELAY,
            hostname,
            refresh_rate: Duration::from_millis(config.refresh_rate),
            show_help: false,
            date_input: DateInput::None,
            input_buffer: String::new(),
            started: Instant::now(),
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> color_eyre::Result<()> {
        let mut last_sample = Instant::now();
        let poll_timeout = Duration::from_millis(250);

        while self.running {
            terminal.draw(|frame| crate::ui::render(frame, self))?;

            match event::poll_event(poll_timeout)? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Mouse(mouse) => self.handle_mouse(mouse),
                AppEvent::Resize => {}
                AppEvent::Tick => {}
            }

            self.report.poll();

            // Sampling pauses in history mode; an interval that came due
            // there fires as soon as the live view is back.
            if self.mode == Mode::Realtime && last_sample.elapsed() >= self.refresh_rate {
                self.record_live_sample();
                last_sample = Instant::now();
            }
        }

        Ok(())
    }

    fn record_live_sample(&mut self) {
        let sample = self.generator.live_sample();
        self.live.push(sample);
    }

    fn rebuild_history(&mut self) {
        self.history = build_history(&mut self.generator, &self.range);
    }

    fn switch_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        // Entering history always re-queries the mocked backend.
        if mode == Mode::History {
            self.rebuild_history();
        }
        self.mode = mode;
        self.date_input = DateInput::None;
        self.input_buffer.clear();
    }

    fn set_range(&mut self, range: DateRange) {
        if range == self.range {
            return;
        }
        self.range = range;
        self.rebuild_history();
    }

    fn start_report(&mut self) {
        if self.report.is_running() {
            return;
        }
        let request = ReportRequest {
            sensor: self.sensor,
            range: self.range,
            format: self.report_format,
            samples: self.history.clone(),
            dir: self.report_dir.clone(),
        };
        self.report.start(request, self.report_delay);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Date entry mode
        if self.date_input != DateInput::None {
            match key.code {
                KeyCode::Esc => {
                    self.date_input = DateInput::None;
                    self.input_buffer.clear();
                }
                KeyCode::Enter => {
                    let entry = self.input_buffer.trim().to_string();
                    if let Ok(date) = entry.parse::<chrono::NaiveDate>() {
                        let mut range = self.range;
                        match self.date_input {
                            DateInput::Start => range.start = date,
                            DateInput::End => range.end = date,
                            DateInput::None => {}
                        }
                        self.set_range(range);
                    }
                    self.date_input = DateInput::None;
                    self.input_buffer.clear();
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                _ => {}
            }
            return;
        }

        // Help overlay
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => {
                self.running = false;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        match key.code {
            // Mode selection by number
            KeyCode::Char('1') => self.switch_mode(Mode::Realtime),
            KeyCode::Char('2') => self.switch_mode(Mode::History),

            // Mode cycling
            KeyCode::Tab => self.switch_mode(self.mode.next()),
            KeyCode::BackTab => self.switch_mode(self.mode.prev()),

            // Function keys
            KeyCode::F(n) if (1..=2).contains(&n) => {
                if let Some(mode) = Mode::from_index(n as usize - 1) {
                    self.switch_mode(mode);
                }
            }

            // Sampling rate
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let ms = self.refresh_rate.as_millis() as u64;
                let new_ms = ms.saturating_sub(250).max(250);
                self.refresh_rate = Duration::from_millis(new_ms);
            }
            KeyCode::Char('-') => {
                let ms = self.refresh_rate.as_millis() as u64;
                let new_ms = (ms + 250).min(10000);
                self.refresh_rate = Duration::from_millis(new_ms);
            }

            // Sensor selection
            KeyCode::Char('j') | KeyCode::Down => self.sensor = self.sensor.next(),
            KeyCode::Char('k') | KeyCode::Up => self.sensor = self.sensor.prev(),

            // Chart style
            KeyCode::Char('c') => self.chart = self.chart.next(),
            KeyCode::Char('l') => self.chart = ChartKind::Line,
            KeyCode::Char('b') => self.chart = ChartKind::Bar,
            KeyCode::Char('a') => self.chart = ChartKind::Area,

            // History range editing
            KeyCode::Char('e') if self.mode == Mode::History => {
                self.date_input = DateInput::Start;
                self.input_buffer.clear();
            }
            KeyCode::Char('E') if self.mode == Mode::History => {
                self.date_input = DateInput::End;
                self.input_buffer.clear();
            }
            KeyCode::Char('[') if self.mode == Mode::History => {
                let mut range = self.range;
                range.shift_start(-1);
                self.set_range(range);
            }
            KeyCode::Char(']') if self.mode == Mode::History => {
                let mut range = self.range;
                range.shift_start(1);
                self.set_range(range);
            }
            KeyCode::Char('{') if self.mode == Mode::History => {
                let mut range = self.range;
                range.shift_end(-1);
                self.set_range(range);
            }
            KeyCode::Char('}') if self.mode == Mode::History => {
                let mut range = self.range;
                range.shift_end(1);
                self.set_range(range);
            }
            KeyCode::Char('r') if self.mode == Mode::History => self.rebuild_history(),

            // Report
            KeyCode::Char('d') if self.mode == Mode::History => self.start_report(),
            KeyCode::Char('f') if self.mode == Mode::History => {
                self.report_format = self.report_format.toggle();
            }

            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Dismiss overlays on any click
        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.show_help = false;
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.sensor = self.sensor.prev(),
            MouseEventKind::ScrollDown => self.sensor = self.sensor.next(),
            MouseEventKind::Down(crossterm::event::MouseButton::Left) => {
                // Mode bar is on row 1 (second row of header)
                if mouse.row == 1 {
                    if let Some(mode) = crate::ui::header::mode_at_column(mouse.column) {
                        self.switch_mode(mode);
                    }
                }
            }
            _ => {}
        }
    }
}
