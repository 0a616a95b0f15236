pub mod buffer;
pub mod generator;
pub mod history;

use std::fmt;

/// One simulated reading across all three sensors, stamped with a display
/// timestamp ("HH:MM:SS" live, "YYYY-MM-DD HH:00" historical).
#[derive(Clone, Debug, PartialEq)]
pub struct SensorSample {
    pub timestamp: String,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl SensorSample {
    /// Clock part of the timestamp, for narrow chart labels.
    pub fn time_label(&self) -> &str {
        self.timestamp
            .rsplit(' ')
            .next()
            .unwrap_or(&self.timestamp)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum SensorKind {
    Temperature,
    Humidity,
    Pressure,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Temperature,
        SensorKind::Humidity,
        SensorKind::Pressure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::Pressure => "Pressure",
        }
    }

    /// Lowercase identifier used in report files and the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Humidity => "humidity",
            SensorKind::Pressure => "pressure",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::Pressure => "hPa",
        }
    }

    /// Nominal range the generator draws from, also the axis fallback when
    /// there is no data to fit against.
    pub fn range(&self) -> (f64, f64) {
        match self {
            SensorKind::Temperature => (20.0, 30.0),
            SensorKind::Humidity => (50.0, 80.0),
            SensorKind::Pressure => (1010.0, 1020.0),
        }
    }

    pub fn value_of(&self, sample: &SensorSample) -> f64 {
        match self {
            SensorKind::Temperature => sample.temperature,
            SensorKind::Humidity => sample.humidity,
            SensorKind::Pressure => sample.pressure,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SensorKind::Temperature => 0,
            SensorKind::Humidity => 1,
            SensorKind::Pressure => 2,
        }
    }

    pub fn next(&self) -> SensorKind {
        let idx = (self.index() + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    pub fn prev(&self) -> SensorKind {
        let idx = if self.index() == 0 {
            Self::ALL.len() - 1
        } else {
            self.index() - 1
        };
        Self::ALL[idx]
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
