use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};
use clap::Parser;

use crate::report::ReportFormat;
use crate::sensors::history::DateRange;
use crate::sensors::SensorKind;
use crate::ui::widgets::chart_panel::ChartKind;

#[derive(Parser, Debug)]
#[command(
    name = "envmon",
    version,
    about = "A terminal dashboard for simulated environmental sensor readings"
)]
pub struct Config {
    /// Live sampling interval in milliseconds
    #[arg(short, long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(250..=10000))]
    pub refresh_rate: u64,

    /// Seed for the mock generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sensor selected at startup
    #[arg(long, value_enum, default_value_t = SensorKind::Temperature)]
    pub sensor: SensorKind,

    /// Chart style selected at startup
    #[arg(long, value_enum, default_value_t = ChartKind::Line)]
    pub chart: ChartKind,

    /// History range start (YYYY-MM-DD); defaults to six days before the end
    #[arg(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// History range end (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Directory report files are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub report_dir: PathBuf,

    /// Report file format
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub report_format: ReportFormat,
}

impl Config {
    /// Initial history window: explicit flags, otherwise the week ending today.
    pub fn date_range(&self) -> DateRange {
        let end = self.end.unwrap_or_else(|| Local::now().date_naive());
        let start = self
            .start
            .unwrap_or_else(|| end.checked_sub_days(Days::new(6)).unwrap_or(end));
        DateRange::new(start, end)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|err| err.to_string())
}
