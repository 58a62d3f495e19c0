//! Trip date range value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Inclusive trip date range, immutable once constructed.
///
/// Invariant: `end_date >= start_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TripDates {
    /// Creates a date range, rejecting an end date before the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ValidationError> {
        if end_date < start_date {
            return Err(ValidationError::invalid_date_range(
                start_date.to_string(),
                end_date.to_string(),
            ));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Trip length as a whole number of days between the two dates.
    ///
    /// A same-day trip yields 0.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Trip length as shown on the dashboard ("1 day", "5 days").
    ///
    /// A same-day trip reads "1 day".
    pub fn duration_label(&self) -> String {
        let days = self.duration_days().max(1);
        if days == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", days)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_ordered_dates() {
        let dates = TripDates::new(date(2025, 6, 1), date(2025, 6, 8)).unwrap();
        assert_eq!(dates.duration_days(), 7);
    }

    #[test]
    fn accepts_equal_dates() {
        let dates = TripDates::new(date(2025, 6, 1), date(2025, 6, 1)).unwrap();
        assert_eq!(dates.duration_days(), 0);
    }

    #[test]
    fn rejects_end_before_start() {
        let result = TripDates::new(date(2025, 6, 8), date(2025, 6, 1));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn duration_label_is_singular_for_one_day() {
        let dates = TripDates::new(date(2025, 6, 1), date(2025, 6, 2)).unwrap();
        assert_eq!(dates.duration_label(), "1 day");
    }

    #[test]
    fn duration_label_is_plural_for_longer_trips() {
        let dates = TripDates::new(date(2025, 6, 1), date(2025, 6, 6)).unwrap();
        assert_eq!(dates.duration_label(), "5 days");
    }

    #[test]
    fn same_day_trip_reads_one_day() {
        let dates = TripDates::new(date(2025, 6, 1), date(2025, 6, 1)).unwrap();
        assert_eq!(dates.duration_label(), "1 day");
    }

    #[test]
    fn serializes_both_dates() {
        let dates = TripDates::new(date(2025, 6, 1), date(2025, 6, 8)).unwrap();
        let json = serde_json::to_string(&dates).unwrap();
        assert!(json.contains("\"start_date\":\"2025-06-01\""));
        assert!(json.contains("\"end_date\":\"2025-06-08\""));
    }
}
