use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{SensorKind, SensorSample};

/// Source of simulated readings. Every draw is uniform over the sensor's
/// nominal range; a fixed seed makes a whole run reproducible.
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// A live sample stamped with the current wall-clock time.
    pub fn live_sample(&mut self) -> SensorSample {
        let stamp = Local::now().format("%H:%M:%S").to_string();
        self.sample_with_stamp(stamp)
    }

    /// A historical sample stamped on the hour of the given date.
    pub fn hourly_sample(&mut self, date: NaiveDate, hour: u32) -> SensorSample {
        self.sample_with_stamp(format!("{date} {hour:02}:00"))
    }

    fn sample_with_stamp(&mut self, timestamp: String) -> SensorSample {
        SensorSample {
            timestamp,
            temperature: self.reading(SensorKind::Temperature),
            humidity: self.reading(SensorKind::Humidity),
            pressure: self.reading(SensorKind::Pressure),
        }
    }

    fn reading(&mut self, kind: SensorKind) -> f64 {
        let (lo, hi) = kind.range();
        self.rng.gen_range(lo..hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_inside_the_nominal_ranges() {
        let mut generator = SampleGenerator::new(Some(7));
        for _ in 0..200 {
            let s = generator.live_sample();
            assert!((20.0..30.0).contains(&s.temperature));
            assert!((50.0..80.0).contains(&s.humidity));
            assert!((1010.0..1020.0).contains(&s.pressure));
        }
    }

    #[test]
    fn same_seed_yields_the_same_run() {
        let mut a = SampleGenerator::new(Some(42));
        let mut b = SampleGenerator::new(Some(42));
        for _ in 0..10 {
            let (x, y) = (a.live_sample(), b.live_sample());
            assert_eq!(x.temperature, y.temperature);
            assert_eq!(x.humidity, y.humidity);
            assert_eq!(x.pressure, y.pressure);
        }
    }

    #[test]
    fn hourly_stamp_is_date_plus_padded_hour() {
        let mut generator = SampleGenerator::new(Some(1));
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(
            generator.hourly_sample(date, 7).timestamp,
            "2025-05-01 07:00"
        );
        assert_eq!(
            generator.hourly_sample(date, 23).timestamp,
            "2025-05-01 23:00"
        );
    }

    #[test]
    fn live_stamp_is_a_wall_clock_time() {
        let mut generator = SampleGenerator::new(Some(1));
        let stamp = generator.live_sample().timestamp;
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.as_bytes()[2], b':');
        assert_eq!(stamp.as_bytes()[5], b':');
    }
}
