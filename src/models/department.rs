//! Department model.
//!
//! A department is the unit a trainee rotates through. Several departments
//! may share a specialty (two alternative clinics covering one curriculum
//! slot); the requirement builder picks one per specialty per trainee.

use serde::{Deserialize, Serialize};

use super::HalfMonths;

/// A department a trainee can be placed in.
///
/// The curriculum may require multiple passes ("occurrences") through the
/// same department, each with its own duration. A deferred department may
/// not be entered before a fixed offset from cohort start (conventionally
/// the second training year).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Unique department name.
    pub name: String,
    /// Grouping key; several departments may share a specialty.
    pub specialty: String,
    /// Ordered per-occurrence durations. Length = number of required passes.
    pub occurrence_durations: Vec<HalfMonths>,
    /// Whether rotations here may only start after the deferral offset.
    #[serde(default)]
    pub deferred: bool,
}

impl Department {
    /// Creates a department with no occurrences.
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            occurrence_durations: Vec::new(),
            deferred: false,
        }
    }

    /// Adds one required occurrence of the given duration.
    pub fn with_occurrence(mut self, duration: HalfMonths) -> Self {
        self.occurrence_durations.push(duration);
        self
    }

    /// Adds one required occurrence, duration given in fractional months.
    ///
    /// # Panics
    /// Panics if `months` is not a non-negative multiple of 0.5. Intended
    /// for literals in construction code; parsed input should go through
    /// `HalfMonths::from_months`.
    pub fn with_occurrence_months(self, months: f64) -> Self {
        self.with_occurrence(
            HalfMonths::from_months(months).expect("occurrence duration literal"),
        )
    }

    /// Marks this department as deferred.
    pub fn with_deferral(mut self) -> Self {
        self.deferred = true;
        self
    }

    /// Total required duration across all occurrences.
    pub fn total_duration(&self) -> HalfMonths {
        self.occurrence_durations.iter().copied().sum()
    }

    /// Number of required occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.occurrence_durations.len()
    }
}
