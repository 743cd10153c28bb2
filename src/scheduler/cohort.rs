//! Cohort-level schedule generation.
//!
//! Orchestrates one generation run: validate inputs, then process the
//! cohort's trainees strictly in input order against one shared
//! [`LoadTracker`] — requirement derivation followed by month assignment
//! per trainee. Processing order is part of the output contract, not an
//! implementation detail: the tracker is read-modify-write state across
//! trainees, so reordering changes the result.
//!
//! The run never fails on an unsatisfiable schedule; trainees whose
//! horizon ran out carry their pending requirements in the run's
//! incompleteness report.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::SchedulerConfig;
use crate::models::{Catalog, CohortCalendar, CohortSchedule, RotationRequirement, Trainee};
use crate::scheduler::{AssignmentEngine, LoadTracker, RequirementBuilder};
use crate::validation::{validate_input, ValidationError};

/// A trainee who finished the horizon with unfinished requirements.
#[derive(Debug, Clone)]
pub struct IncompleteTrainee {
    /// Trainee name.
    pub trainee: String,
    /// Requirements still pending or in progress at horizon end.
    pub pending: Vec<RotationRequirement>,
}

/// The outcome of one generation run.
#[derive(Debug, Clone)]
pub struct CohortRun {
    /// The accumulated per-trainee schedules.
    pub schedule: CohortSchedule,
    /// Per-trainee incompleteness, empty when every requirement finished.
    pub incomplete: Vec<IncompleteTrainee>,
}

impl CohortRun {
    /// Whether every trainee finished every requirement.
    pub fn is_complete(&self) -> bool {
        self.incomplete.is_empty()
    }

    /// Unfinished requirements for one trainee, if any.
    pub fn incomplete_for(&self, trainee: &str) -> Option<&IncompleteTrainee> {
        self.incomplete.iter().find(|i| i.trainee == trainee)
    }
}

/// Batch scheduler for one catalog and policy.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rotaplan::config::SchedulerConfig;
/// use rotaplan::models::{Catalog, Department, Trainee};
/// use rotaplan::scheduler::RotationScheduler;
///
/// let catalog = Catalog::new(vec![
///     Department::new("ER", "Emergency").with_occurrence_months(3.0),
/// ]);
/// let trainees = vec![Trainee::new("T1", "Emergency").with_cohort("2024")];
///
/// let scheduler = RotationScheduler::new(catalog, SchedulerConfig::default());
/// let start = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let run = scheduler.generate(&trainees, "2024", start, 16).unwrap();
/// assert!(run.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct RotationScheduler {
    catalog: Catalog,
    config: SchedulerConfig,
}

impl RotationScheduler {
    /// Creates a scheduler over a catalog with the given policy.
    pub fn new(catalog: Catalog, config: SchedulerConfig) -> Self {
        Self { catalog, config }
    }

    /// The catalog this scheduler works against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generates the schedule for one cohort.
    ///
    /// Trainees outside `cohort` are ignored; the rest are processed in
    /// input order against a fresh load tracker. Same inputs, same output.
    ///
    /// # Errors
    /// Returns all catalog/trainee integrity errors found before any
    /// assignment starts. An unsatisfiable schedule is not an error.
    pub fn generate(
        &self,
        trainees: &[Trainee],
        cohort: &str,
        start: NaiveDate,
        horizon_months: usize,
    ) -> Result<CohortRun, Vec<ValidationError>> {
        validate_input(&self.catalog, trainees, &self.config)?;

        let calendar = CohortCalendar::new(start, horizon_months);
        let builder = RequirementBuilder::new(self.config.clone());
        let engine = AssignmentEngine::new(self.config.clone());
        let mut tracker = LoadTracker::new();

        let mut schedule = CohortSchedule::new(calendar.clone(), cohort);
        let mut incomplete = Vec::new();

        for trainee in trainees.iter().filter(|t| t.cohort == cohort) {
            let requirements = builder.build_for(trainee, &self.catalog, &mut tracker);
            let (months, leftover) =
                engine.assign(&trainee.name, requirements, &calendar, &mut tracker);
            schedule.push(&trainee.name, months);
            if !leftover.is_empty() {
                incomplete.push(IncompleteTrainee {
                    trainee: trainee.name.clone(),
                    pending: leftover,
                });
            }
        }

        debug!(
            cohort,
            trainees = schedule.trainee_count(),
            incomplete = incomplete.len(),
            "generation run finished"
        );
        Ok(CohortRun {
            schedule,
            incomplete,
        })
    }

    /// Horizon length sufficient for one trainee's full requirement list.
    ///
    /// Covers the curriculum total (one department per specialty), the
    /// trainee's bonuses, the configured slack, and — when deferred
    /// requirements exist — the deferral offset plus the deferred total.
    pub fn suggested_horizon(&self, trainee: &Trainee) -> usize {
        let mut total = self.catalog.base_curriculum_duration();
        let mut deferred_total = crate::models::HalfMonths::ZERO;

        let mut seen: Vec<&str> = Vec::new();
        for dept in self.catalog.departments() {
            if !seen.contains(&dept.specialty.as_str()) {
                seen.push(&dept.specialty);
                if dept.deferred {
                    deferred_total = deferred_total.saturating_add(dept.total_duration());
                }
            }
        }

        if self.catalog.contains_specialty(&trainee.specialty) {
            total = total.saturating_add(self.config.home_bonus);
            deferred_total = deferred_total.saturating_add(self.config.home_bonus);
        }
        if trainee.is_external() {
            for specialty in trainee.distinct_self_selected() {
                if self.catalog.contains_specialty(specialty) {
                    total = total.saturating_add(self.config.self_selected_bonus);
                }
            }
        }

        let base = total.ceil_months() + self.config.horizon_slack_months;
        if deferred_total.is_zero() {
            base
        } else {
            let deferred_floor = self.config.deferral_delay_months
                + deferred_total.ceil_months()
                + self.config.horizon_slack_months;
            base.max(deferred_floor)
        }
    }
}
