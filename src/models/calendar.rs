//! Cohort calendar model.
//!
//! A scheduling run covers a bounded range of calendar months starting at
//! the cohort start date. Internally months are addressed by zero-based
//! index from that start; `YYYY-MM` labels exist only at the reporting
//! boundary.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Zero-based month offset from cohort start.
pub type MonthIndex = usize;

/// The bounded month range of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortCalendar {
    /// Cohort start date. Only year and month are significant.
    pub start: NaiveDate,
    /// Number of calendar months covered.
    pub horizon_months: usize,
}

impl CohortCalendar {
    /// Creates a calendar starting at `start` and spanning `horizon_months`.
    pub fn new(start: NaiveDate, horizon_months: usize) -> Self {
        Self {
            start,
            horizon_months,
        }
    }

    /// Number of months in the range.
    pub fn horizon(&self) -> usize {
        self.horizon_months
    }

    /// Iterates month indices in order.
    pub fn indices(&self) -> std::ops::Range<MonthIndex> {
        0..self.horizon_months
    }

    /// `YYYY-MM` label for a month index.
    ///
    /// Indices past the horizon are still labelled; the horizon bounds
    /// assignment, not labelling.
    pub fn month_label(&self, index: MonthIndex) -> String {
        let date = self.start + Months::new(index as u32);
        format!("{:04}-{:02}", date.year(), date.month())
    }

    /// Labels for the whole range, in order.
    pub fn labels(&self) -> Vec<String> {
        self.indices().map(|i| self.month_label(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }

    #[test]
    fn test_month_labels() {
        let cal = CohortCalendar::new(start(), 8);
        assert_eq!(cal.month_label(0), "2024-07");
        assert_eq!(cal.month_label(5), "2024-12");
        assert_eq!(cal.month_label(6), "2025-01");
    }

    #[test]
    fn test_labels_cover_horizon() {
        let cal = CohortCalendar::new(start(), 3);
        assert_eq!(cal.labels(), vec!["2024-07", "2024-08", "2024-09"]);
        assert_eq!(cal.indices().len(), 3);
    }

    #[test]
    fn test_year_rollover() {
        let cal = CohortCalendar::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 14);
        assert_eq!(cal.month_label(12), "2025-01");
        assert_eq!(cal.month_label(13), "2025-02");
    }
}
