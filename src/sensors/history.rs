use std::fmt;

use chrono::{Days, NaiveDate};

use super::generator::SampleGenerator;
use super::SensorSample;

/// History view is one mocked sample per hour of the start date.
pub const HISTORY_SAMPLES: usize = 24;

/// Report window selected in history mode. The start date keys the generated
/// series; the end date only shows up in report names and metadata. There is
/// no ordering constraint between the two.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn shift_start(&mut self, days: i64) {
        self.start = shift(self.start, days);
    }

    pub fn shift_end(&mut self, days: i64) {
        self.end = shift(self.end, days);
    }

    /// Filename-safe form, e.g. "2025-05-01_2025-05-07".
    pub fn slug(&self) -> String {
        format!("{}_{}", self.start, self.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Build the historical series for a range: 24 hourly samples stamped on the
/// start date. Always a fresh Vec; callers replace their buffer wholesale.
pub fn build_history(generator: &mut SampleGenerator, range: &DateRange) -> Vec<SensorSample> {
    (0..HISTORY_SAMPLES as u32)
        .map(|hour| generator.hourly_sample(range.start, hour))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 7).unwrap(),
        )
    }

    #[test]
    fn history_is_one_sample_per_hour_of_the_start_date() {
        let mut generator = SampleGenerator::new(Some(3));
        let history = build_history(&mut generator, &range());

        assert_eq!(history.len(), HISTORY_SAMPLES);
        assert_eq!(history[0].timestamp, "2025-05-01 00:00");
        assert_eq!(history[13].timestamp, "2025-05-01 13:00");
        assert_eq!(history[23].timestamp, "2025-05-01 23:00");
    }

    #[test]
    fn rebuilding_replaces_the_series_wholesale() {
        let mut generator = SampleGenerator::new(Some(3));
        let first = build_history(&mut generator, &range());
        let second = build_history(&mut generator, &range());

        assert_eq!(second.len(), HISTORY_SAMPLES);
        // Same stamps, fresh draws.
        assert_eq!(first[0].timestamp, second[0].timestamp);
        assert!(first
            .iter()
            .zip(&second)
            .any(|(a, b)| a.temperature != b.temperature));
    }

    #[test]
    fn end_date_does_not_affect_the_series_stamps() {
        let mut generator = SampleGenerator::new(Some(3));
        let mut shifted = range();
        shifted.shift_end(30);

        let history = build_history(&mut generator, &shifted);
        assert!(history.iter().all(|s| s.timestamp.starts_with("2025-05-01")));
    }

    #[test]
    fn shifting_moves_each_bound_independently() {
        let mut r = range();
        r.shift_start(1);
        r.shift_end(-2);

        assert_eq!(r.start, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
        assert_eq!(r.end, NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
        assert_eq!(r.to_string(), "2025-05-02 → 2025-05-05");
        assert_eq!(r.slug(), "2025-05-02_2025-05-05");
    }

    #[test]
    fn inverted_ranges_are_representable() {
        let mut r = range();
        r.shift_start(30);

        assert!(r.start > r.end);
        assert_eq!(r.slug(), "2025-05-31_2025-05-07");
    }
}
