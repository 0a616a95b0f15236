use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::sensors::history::DateRange;
use crate::sensors::{SensorKind, SensorSample};

use super::{ReportFormat, ReportRequest};

#[derive(Serialize)]
struct ReportRow<'a> {
    timestamp: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    sensor: &'static str,
    unit: &'static str,
    start: String,
    end: String,
    samples: Vec<ReportRow<'a>>,
}

/// Destination file for a report, e.g. "temperature_2025-05-01_2025-05-07.csv".
pub fn report_path(
    dir: &Path,
    sensor: SensorKind,
    range: &DateRange,
    format: ReportFormat,
) -> PathBuf {
    dir.join(format!(
        "{}_{}.{}",
        sensor.key(),
        range.slug(),
        format.extension()
    ))
}

/// Write the requested report and return the path it landed at.
pub fn write_report(request: &ReportRequest) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(&request.dir)?;
    let path = report_path(&request.dir, request.sensor, &request.range, request.format);

    match request.format {
        ReportFormat::Csv => write_csv(&path, request.sensor, &request.samples)?,
        ReportFormat::Json => write_json(&path, request)?,
    }

    Ok(path)
}

fn write_csv(path: &Path, sensor: SensorKind, samples: &[SensorSample]) -> color_eyre::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["timestamp", sensor.key()])?;
    for sample in samples {
        let value = format!("{:.1}", sensor.value_of(sample));
        writer.write_record([sample.timestamp.as_str(), value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &Path, request: &ReportRequest) -> color_eyre::Result<()> {
    let samples = request
        .samples
        .iter()
        .map(|sample| ReportRow {
            timestamp: &sample.timestamp,
            value: rounded(request.sensor.value_of(sample)),
        })
        .collect();

    let document = ReportDocument {
        sensor: request.sensor.key(),
        unit: request.sensor.unit(),
        start: request.range.start.to_string(),
        end: request.range.end.to_string(),
        samples,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &document)?;
    Ok(())
}

fn rounded(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
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
        let samples = (0..24)
            .map(|hour| SensorSample {
                timestamp: format!("2025-05-01 {hour:02}:00"),
                temperature: 20.0 + hour as f64 * 0.25,
                humidity: 55.5,
                pressure: 1011.0,
            })
            .collect();
        ReportRequest {
            sensor: SensorKind::Temperature,
            range,
            format,
            samples,
            dir,
        }
    }

    #[test]
    fn csv_report_has_a_header_and_one_row_per_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&request(dir.path().to_path_buf(), ReportFormat::Csv)).unwrap();

        assert_eq!(
            path.file_name().unwrap(),
            "temperature_2025-05-01_2025-05-07.csv"
        );
        let body = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "timestamp,temperature");
        assert_eq!(lines[1], "2025-05-01 00:00,20.0");
        assert_eq!(lines[5], "2025-05-01 04:00,21.0");
    }

    #[test]
    fn json_report_carries_sensor_metadata_and_all_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&request(dir.path().to_path_buf(), ReportFormat::Json)).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["sensor"], "temperature");
        assert_eq!(doc["unit"], "°C");
        assert_eq!(doc["start"], "2025-05-01");
        assert_eq!(doc["end"], "2025-05-07");
        assert_eq!(doc["samples"].as_array().unwrap().len(), 24);
        assert_eq!(doc["samples"][0]["timestamp"], "2025-05-01 00:00");
        assert_eq!(doc["samples"][0]["value"], 20.0);
    }

    #[test]
    fn report_dir_is_created_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("reports");
        let path = write_report(&request(nested.clone(), ReportFormat::Csv)).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
