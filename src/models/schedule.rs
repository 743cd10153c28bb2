//! Schedule (solution) models.
//!
//! The engine's only output: per-trainee, per-month department placements.
//! A month normally holds one department; a half-month merge puts two in
//! the same month, rendered as a `"A/B"` label. Unassigned months are
//! simply absent — a gap, not an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CohortCalendar, HalfMonths, MonthIndex};

/// The placement(s) of one trainee in one calendar month.
///
/// Holds one department name, or two for a merged half-month pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAssignment {
    /// Department names occupying this month (one, or two when merged).
    pub departments: Vec<String>,
}

impl MonthAssignment {
    /// A whole-month placement in a single department.
    pub fn single(department: impl Into<String>) -> Self {
        Self {
            departments: vec![department.into()],
        }
    }

    /// A merged half-month pairing. The primary (selected) department
    /// comes first in the label.
    pub fn merged(primary: impl Into<String>, partner: impl Into<String>) -> Self {
        Self {
            departments: vec![primary.into(), partner.into()],
        }
    }

    /// Whether this month pairs two half-month placements.
    pub fn is_merged(&self) -> bool {
        self.departments.len() == 2
    }

    /// Display label: the department name, or `"A/B"` for a merge.
    pub fn label(&self) -> String {
        self.departments.join("/")
    }

    /// Months this assignment contributes to the given department.
    ///
    /// A merged month contributes half a month to each participant.
    pub fn contribution(&self, department: &str) -> HalfMonths {
        if !self.departments.iter().any(|d| d == department) {
            HalfMonths::ZERO
        } else if self.is_merged() {
            HalfMonths::HALF
        } else {
            HalfMonths::from_whole(1)
        }
    }
}

/// One trainee's month-by-month schedule.
///
/// Keyed by month index; absent indices are scheduling gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraineeSchedule {
    entries: BTreeMap<MonthIndex, MonthAssignment>,
}

impl TraineeSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the assignment for a month.
    pub fn insert(&mut self, month: MonthIndex, assignment: MonthAssignment) {
        self.entries.insert(month, assignment);
    }

    /// Assignment for a month, if any.
    pub fn assignment(&self, month: MonthIndex) -> Option<&MonthAssignment> {
        self.entries.get(&month)
    }

    /// Iterates `(month, assignment)` in month order.
    pub fn months(&self) -> impl Iterator<Item = (MonthIndex, &MonthAssignment)> {
        self.entries.iter().map(|(&m, a)| (m, a))
    }

    /// Number of assigned months.
    pub fn assigned_month_count(&self) -> usize {
        self.entries.len()
    }

    /// Total months this schedule contributes to one department.
    pub fn months_for_department(&self, department: &str) -> HalfMonths {
        self.entries
            .values()
            .map(|a| a.contribution(department))
            .sum()
    }

    /// Latest assigned month index, if any month is assigned.
    pub fn last_assigned_month(&self) -> Option<MonthIndex> {
        self.entries.keys().next_back().copied()
    }
}

/// Accumulated schedules for one cohort run — the query surface exposed
/// to export and display collaborators.
///
/// Read-only from the outside; mutated only by the assignment engine
/// during generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortSchedule {
    calendar: CohortCalendar,
    cohort: String,
    /// `(trainee name, schedule)` in processing order.
    trainees: Vec<(String, TraineeSchedule)>,
}

impl CohortSchedule {
    /// Creates an empty cohort schedule.
    pub fn new(calendar: CohortCalendar, cohort: impl Into<String>) -> Self {
        Self {
            calendar,
            cohort: cohort.into(),
            trainees: Vec::new(),
        }
    }

    /// Appends a trainee's finished schedule. Processing order is
    /// preserved; it is part of the output contract.
    pub fn push(&mut self, trainee: impl Into<String>, schedule: TraineeSchedule) {
        self.trainees.push((trainee.into(), schedule));
    }

    /// The month range this schedule covers.
    pub fn calendar(&self) -> &CohortCalendar {
        &self.calendar
    }

    /// The cohort key this schedule was generated for.
    pub fn cohort(&self) -> &str {
        &self.cohort
    }

    /// Trainee names in processing order.
    pub fn trainees(&self) -> impl Iterator<Item = &str> {
        self.trainees.iter().map(|(name, _)| name.as_str())
    }

    /// Trainee names scheduled for the given cohort.
    ///
    /// A schedule holds exactly one cohort; a non-matching key yields an
    /// empty list rather than an error.
    pub fn trainees_in_cohort(&self, cohort: &str) -> Vec<&str> {
        if cohort == self.cohort {
            self.trainees().collect()
        } else {
            Vec::new()
        }
    }

    /// A trainee's schedule, if present.
    pub fn schedule_for(&self, trainee: &str) -> Option<&TraineeSchedule> {
        self.trainees
            .iter()
            .find(|(name, _)| name == trainee)
            .map(|(_, s)| s)
    }

    /// Ordered `(month label, assignment)` pairs for a trainee.
    pub fn months_for(&self, trainee: &str) -> Vec<(String, &MonthAssignment)> {
        self.schedule_for(trainee)
            .map(|s| {
                s.months()
                    .map(|(m, a)| (self.calendar.month_label(m), a))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of trainees scheduled.
    pub fn trainee_count(&self) -> usize {
        self.trainees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_schedule() -> TraineeSchedule {
        let mut s = TraineeSchedule::new();
        s.insert(0, MonthAssignment::single("Cardiology I"));
        s.insert(1, MonthAssignment::single("Cardiology I"));
        s.insert(4, MonthAssignment::merged("Cardiology I", "EKG Lab"));
        s
    }

    #[test]
    fn test_label_and_merge() {
        let single = MonthAssignment::single("ER");
        assert_eq!(single.label(), "ER");
        assert!(!single.is_merged());

        let merged = MonthAssignment::merged("Cardiology I", "EKG Lab");
        assert_eq!(merged.label(), "Cardiology I/EKG Lab");
        assert!(merged.is_merged());
    }

    #[test]
    fn test_contribution() {
        let merged = MonthAssignment::merged("A", "B");
        assert_eq!(merged.contribution("A"), HalfMonths::HALF);
        assert_eq!(merged.contribution("B"), HalfMonths::HALF);
        assert_eq!(merged.contribution("C"), HalfMonths::ZERO);
        assert_eq!(
            MonthAssignment::single("A").contribution("A"),
            HalfMonths::from_whole(1)
        );
    }

    #[test]
    fn test_trainee_schedule_queries() {
        let s = sample_schedule();
        assert_eq!(s.assigned_month_count(), 3);
        assert!(s.assignment(2).is_none()); // gap
        assert_eq!(s.last_assigned_month(), Some(4));
        // 2 whole months + half of the merged month
        assert_eq!(s.months_for_department("Cardiology I").as_months(), 2.5);
        assert_eq!(s.months_for_department("EKG Lab").as_months(), 0.5);
    }

    #[test]
    fn test_month_iteration_is_ordered() {
        let s = sample_schedule();
        let months: Vec<MonthIndex> = s.months().map(|(m, _)| m).collect();
        assert_eq!(months, vec![0, 1, 4]);
    }

    #[test]
    fn test_cohort_schedule_query_surface() {
        let cal = CohortCalendar::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 8);
        let mut cohort = CohortSchedule::new(cal, "2024");
        cohort.push("T1", sample_schedule());
        cohort.push("T2", TraineeSchedule::new());

        assert_eq!(cohort.trainee_count(), 2);
        assert_eq!(cohort.trainees().collect::<Vec<_>>(), vec!["T1", "T2"]);
        assert_eq!(cohort.cohort(), "2024");

        let months = cohort.months_for("T1");
        assert_eq!(months[0].0, "2024-07");
        assert_eq!(months[2].0, "2024-11");
        assert_eq!(months[2].1.label(), "Cardiology I/EKG Lab");
        assert!(cohort.months_for("T9").is_empty());
    }

    #[test]
    fn test_trainees_in_cohort() {
        let cal = CohortCalendar::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 8);
        let mut cohort = CohortSchedule::new(cal, "2024");
        cohort.push("T1", sample_schedule());
        cohort.push("T2", TraineeSchedule::new());

        assert_eq!(cohort.trainees_in_cohort("2024"), vec!["T1", "T2"]);
        assert!(cohort.trainees_in_cohort("2023").is_empty());
    }
}
