//! Schedule quality metrics and reporting projections.
//!
//! Read-only views over a finished run for export and display
//! collaborators: summary KPIs, the department × month headcount matrix,
//! and the tabular row projection. No I/O happens here.

use std::collections::HashMap;

use crate::models::{CohortSchedule, MonthIndex, Trainee};
use crate::scheduler::CohortRun;

/// Summary indicators of one generation run.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Total assigned trainee-months.
    pub assigned_month_count: usize,
    /// Unassigned months before each trainee's last assignment
    /// (interior scheduling gaps; trailing free months are not gaps).
    pub gap_count: usize,
    /// Months holding a half-month pairing.
    pub merged_month_count: usize,
    /// Trainees who finished the horizon with pending requirements.
    pub incomplete_trainee_count: usize,
    /// Fraction of trainees whose requirements all finished (0.0..1.0).
    pub completion_rate: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(run: &CohortRun) -> Self {
        let mut assigned = 0;
        let mut gaps = 0;
        let mut merged = 0;

        for trainee in run.schedule.trainees() {
            if let Some(sched) = run.schedule.schedule_for(trainee) {
                assigned += sched.assigned_month_count();
                merged += sched.months().filter(|(_, a)| a.is_merged()).count();
                if let Some(last) = sched.last_assigned_month() {
                    gaps += (0..=last).filter(|&m| sched.assignment(m).is_none()).count();
                }
            }
        }

        let trainee_count = run.schedule.trainee_count();
        let completion_rate = if trainee_count == 0 {
            1.0
        } else {
            (trainee_count - run.incomplete.len()) as f64 / trainee_count as f64
        };

        Self {
            assigned_month_count: assigned,
            gap_count: gaps,
            merged_month_count: merged,
            incomplete_trainee_count: run.incomplete.len(),
            completion_rate,
        }
    }
}

/// Department × month headcount, recomputed from schedule entries.
///
/// Matches the load tracker's monthly counts for the run that produced
/// the schedule; recomputing keeps the projection usable on a schedule
/// loaded without its tracker.
pub fn headcount_matrix(schedule: &CohortSchedule) -> HashMap<(String, MonthIndex), u32> {
    let mut counts: HashMap<(String, MonthIndex), u32> = HashMap::new();
    for trainee in schedule.trainees() {
        if let Some(sched) = schedule.schedule_for(trainee) {
            for (month, assignment) in sched.months() {
                for dept in &assignment.departments {
                    *counts.entry((dept.clone(), month)).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}

/// One row of the tabular projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Trainee name.
    pub name: String,
    /// Trainee home specialty.
    pub specialty: String,
    /// Cohort key.
    pub cohort: String,
    /// Role description.
    pub role: String,
    /// One cell per calendar month label; empty string for a gap.
    pub cells: Vec<String>,
}

/// Projects a schedule into rows of `name, specialty, cohort, role`
/// followed by one cell per month — the shape export and display
/// collaborators consume. Trainees without metadata get empty columns.
pub fn schedule_rows(schedule: &CohortSchedule, trainees: &[Trainee]) -> Vec<ScheduleRow> {
    let calendar = schedule.calendar();
    schedule
        .trainees()
        .map(|name| {
            let meta = trainees.iter().find(|t| t.name == name);
            let cells = calendar
                .indices()
                .map(|m| {
                    schedule
                        .schedule_for(name)
                        .and_then(|s| s.assignment(m))
                        .map(|a| a.label())
                        .unwrap_or_default()
                })
                .collect();
            ScheduleRow {
                name: name.to_string(),
                specialty: meta.map(|t| t.specialty.clone()).unwrap_or_default(),
                cohort: meta.map(|t| t.cohort.clone()).unwrap_or_default(),
                role: meta.map(|t| t.role.clone()).unwrap_or_default(),
                cells,
            }
        })
        .collect()
}
