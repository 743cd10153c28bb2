//! Rotation scheduling domain models.
//!
//! Core data types for deriving and solving a cohort's rotation plan:
//! the department catalog feeding the requirement builder, per-trainee
//! requirements consumed by the assignment engine, and the month-keyed
//! schedules the engine emits.
//!
//! # Time Representation
//!
//! Durations are half-month quantities ([`HalfMonths`]); calendar months
//! are zero-based indices from the cohort start ([`MonthIndex`]), rendered
//! as `YYYY-MM` labels only at the reporting boundary.

mod calendar;
mod catalog;
mod department;
mod duration;
mod requirement;
mod schedule;
mod trainee;

pub use calendar::{CohortCalendar, MonthIndex};
pub use catalog::Catalog;
pub use department::Department;
pub use duration::{DurationError, HalfMonths};
pub use requirement::{MandatoryReason, RequirementState, RotationRequirement};
pub use schedule::{CohortSchedule, MonthAssignment, TraineeSchedule};
pub use trainee::{Track, Trainee};
