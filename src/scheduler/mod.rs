//! Scheduling engine: load tracking, requirement derivation, greedy
//! month assignment, and cohort orchestration.
//!
//! # Algorithm
//!
//! The engine is a greedy, load-balancing heuristic — not a constraint
//! solver. Trainees are processed sequentially against shared load state;
//! per trainee, months are filled in calendar order by continuation
//! priority, deferral gating, a continuity cap, and a least-loaded
//! tie-break. Unsatisfiable requirements surface as a per-trainee
//! incompleteness report, never an error.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a run (assigned months, gaps, merges,
//! completion rate); `headcount_matrix` and `schedule_rows` are the
//! projections export and display collaborators consume.

mod cohort;
mod engine;
mod kpi;
mod load;
mod requirements;

pub use cohort::{CohortRun, IncompleteTrainee, RotationScheduler};
pub use engine::AssignmentEngine;
pub use kpi::{headcount_matrix, schedule_rows, ScheduleKpi, ScheduleRow};
pub use load::LoadTracker;
pub use requirements::RequirementBuilder;
