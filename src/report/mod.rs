pub mod writer;

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::sensors::history::DateRange;
use crate::sensors::{SensorKind, SensorSample};

/// Simulated backend latency before the report file is written.
pub const REPORT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "CSV",
            ReportFormat::Json => "JSON",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    pub fn toggle(&self) -> ReportFormat {
        match self {
            ReportFormat::Csv => ReportFormat::Json,
            ReportFormat::Json => ReportFormat::Csv,
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything the worker needs, captured at request time so later UI changes
/// cannot affect a report already in flight.
pub struct ReportRequest {
    pub sensor: SensorKind,
    pub range: DateRange,
    pub format: ReportFormat,
    pub samples: Vec<SensorSample>,
    pub dir: PathBuf,
}

enum ReportOutcome {
    Done(PathBuf),
    Failed(String),
}

#[derive(Debug)]
pub enum ReportState {
    Idle,
    Running { since: Instant },
    Done { path: PathBuf },
    Failed { message: String },
}

/// One-at-a-time background report generation. The worker thread sleeps for
/// the simulated delay, writes the file, and reports back over a channel
/// drained by `poll()` from the run loop.
pub struct ReportJob {
    state: ReportState,
    receiver: Option<Receiver<ReportOutcome>>,
}

impl ReportJob {
    pub fn new() -> Self {
        Self {
            state: ReportState::Idle,
            receiver: None,
        }
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ReportState::Running { .. })
    }

    /// Kick off a report. Ignored while one is already running.
    pub fn start(&mut self, request: ReportRequest, delay: Duration) {
        if self.is_running() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            thread::sleep(delay);
            let outcome = match writer::write_report(&request) {
                Ok(path) => ReportOutcome::Done(path),
                Err(err) => ReportOutcome::Failed(err.to_string()),
            };
            let _ = tx.send(outcome);
        });

        self.state = ReportState::Running {
            since: Instant::now(),
        };
        self.receiver = Some(rx);
    }

    /// Absorb a finished worker, if any.
    pub fn poll(&mut self) {
        let Some(receiver) = &self.receiver else {
            return;
        };

        match receiver.try_recv() {
            Ok(ReportOutcome::Done(path)) => {
                self.state = ReportState::Done { path };
                self.receiver = None;
            }
            Ok(ReportOutcome::Failed(message)) => {
                self.state = ReportState::Failed { message };
                self.receiver = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.state = ReportState::Failed {
                    message: "report worker exited".to_string(),
                };
                self.receiver = None;
            }
        }
    }
}

impl Default for ReportJob {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(dir: PathBuf, format: ReportFormat) -> ReportRequest {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
        );
        let samples = vec![SensorSample {
            timestamp: "2025-05-01 00:00".to_string(),
            temperature: 24.0,
            humidity: 60.0,
            pressure: 1012.0,
        }];
        ReportRequest {
            sensor: SensorKind::Temperature,
            range,
            format,
            samples,
            dir,
        }
    }

    fn poll_until_settled(job: &mut ReportJob) {
        for _ in 0..200 {
            job.poll();
            if !job.is_running() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("report job never settled");
    }

    #[test]
    fn job_runs_to_done_and_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = ReportJob::new();
        assert!(matches!(job.state(), ReportState::Idle));

        job.start(request(dir.path().to_path_buf(), ReportFormat::Csv), Duration::ZERO);
        poll_until_settled(&mut job);

        match job.state() {
            ReportState::Done { path } => {
                assert!(path.exists());
                assert_eq!(path.extension().unwrap(), "csv");
            }
            _ => panic!("expected Done"),
        }
    }

    #[test]
    fn second_start_is_ignored_while_running() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = ReportJob::new();

        job.start(
            request(dir.path().to_path_buf(), ReportFormat::Csv),
            Duration::from_millis(200),
        );
        assert!(job.is_running());

        // Would be instant if it were accepted.
        job.start(request(dir.path().to_path_buf(), ReportFormat::Json), Duration::ZERO);
        poll_until_settled(&mut job);

        match job.state() {
            ReportState::Done { path } => assert_eq!(path.extension().unwrap(), "csv"),
            _ => panic!("expected Done"),
        }
        let json = writer::report_path(
            dir.path(),
            SensorKind::Temperature,
            &request(dir.path().to_path_buf(), ReportFormat::Json).range,
            ReportFormat::Json,
        );
        assert!(!json.exists());
    }

    #[test]
    fn unwritable_destination_surfaces_as_failed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let mut job = ReportJob::new();
        job.start(request(blocker, ReportFormat::Csv), Duration::ZERO);
        poll_until_settled(&mut job);

        assert!(matches!(job.state(), ReportState::Failed { .. }));
    }
}
