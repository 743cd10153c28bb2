//! Input validation for scheduling runs.
//!
//! Checks structural integrity of the department catalog and trainee list
//! before the engine runs. Detects:
//! - Departments with no occurrences or zero-length occurrences
//! - Duplicate department or trainee names
//! - External-track trainees with too few self-selected specialties
//! - Standard-track trainees carrying self-selections
//!
//! The engine assumes a validated catalog. Unknown specialty references
//! (a trainee's home or self-selected specialty with no backing
//! department) are deliberately *not* errors: they are configuration
//! gaps the requirement builder skips with a warning.

use thiserror::Error;

use crate::config::SchedulerConfig;
use crate::models::{Catalog, Trainee};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A catalog or trainee integrity error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A department requires no occurrences at all.
    #[error("department '{department}' has an empty occurrence list")]
    EmptyOccurrenceList {
        /// Offending department name.
        department: String,
    },
    /// An occurrence with zero duration.
    #[error("department '{department}' occurrence #{occurrence_index} has zero duration")]
    ZeroDuration {
        /// Offending department name.
        department: String,
        /// 1-based occurrence position.
        occurrence_index: usize,
    },
    /// Two departments share a name.
    #[error("duplicate department name: '{name}'")]
    DuplicateDepartment {
        /// The duplicated name.
        name: String,
    },
    /// Two trainees share a name.
    #[error("duplicate trainee name: '{name}'")]
    DuplicateTrainee {
        /// The duplicated name.
        name: String,
    },
    /// External-track trainee with too few distinct self-selections.
    #[error("trainee '{trainee}' is external-track with {found} distinct self-selected specialties ({required} required)")]
    MissingSelfSelection {
        /// Offending trainee name.
        trainee: String,
        /// Distinct selections found (home specialty excluded).
        found: usize,
        /// Configured minimum.
        required: usize,
    },
    /// Standard-track trainee carrying self-selections.
    #[error("trainee '{trainee}' is standard-track but has self-selected specialties")]
    UnexpectedSelfSelection {
        /// Offending trainee name.
        trainee: String,
    },
}

/// Validates a catalog and trainee list against the configured policy.
///
/// All problems are collected, not just the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_input(
    catalog: &Catalog,
    trainees: &[Trainee],
    config: &SchedulerConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut dept_names = HashSet::new();
    for dept in catalog.departments() {
        if !dept_names.insert(dept.name.as_str()) {
            errors.push(ValidationError::DuplicateDepartment {
                name: dept.name.clone(),
            });
        }

        if dept.occurrence_durations.is_empty() {
            errors.push(ValidationError::EmptyOccurrenceList {
                department: dept.name.clone(),
            });
        }

        for (i, duration) in dept.occurrence_durations.iter().enumerate() {
            if duration.is_zero() {
                errors.push(ValidationError::ZeroDuration {
                    department: dept.name.clone(),
                    occurrence_index: i + 1,
                });
            }
        }
    }

    let mut trainee_names = HashSet::new();
    for trainee in trainees {
        if !trainee_names.insert(trainee.name.as_str()) {
            errors.push(ValidationError::DuplicateTrainee {
                name: trainee.name.clone(),
            });
        }

        if trainee.is_external() {
            let found = trainee.distinct_self_selected().len();
            if found < config.min_self_selected {
                errors.push(ValidationError::MissingSelfSelection {
                    trainee: trainee.name.clone(),
                    found,
                    required: config.min_self_selected,
                });
            }
        } else if !trainee.self_selected_specialties.is_empty() {
            errors.push(ValidationError::UnexpectedSelfSelection {
                trainee: trainee.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Department, Track};

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Department::new("Cardiology I", "Cardiology").with_occurrence_months(2.0),
            Department::new("EKG Lab", "EKG").with_occurrence_months(0.5),
        ])
    }

    fn sample_trainees() -> Vec<Trainee> {
        vec![
            Trainee::new("T1", "Cardiology").with_cohort("2024"),
            Trainee::new("T2", "EKG")
                .with_cohort("2024")
                .with_track(Track::External)
                .with_self_selected("Cardiology")
                .with_self_selected("Nephrology"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let config = SchedulerConfig::default();
        assert!(validate_input(&sample_catalog(), &sample_trainees(), &config).is_ok());
    }

    #[test]
    fn test_empty_occurrence_list() {
        let catalog = Catalog::new(vec![Department::new("Empty", "X")]);
        let errors =
            validate_input(&catalog, &[], &SchedulerConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::EmptyOccurrenceList { department } if department == "Empty")));
    }

    #[test]
    fn test_zero_duration() {
        let catalog = Catalog::new(vec![Department::new("D", "X")
            .with_occurrence_months(1.0)
            .with_occurrence_months(0.0)]);
        let errors =
            validate_input(&catalog, &[], &SchedulerConfig::default()).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::ZeroDuration {
                occurrence_index: 2,
                ..
            }
        )));
    }

    #[test]
    fn test_duplicate_department() {
        let catalog = Catalog::new(vec![
            Department::new("D", "X").with_occurrence_months(1.0),
            Department::new("D", "Y").with_occurrence_months(1.0),
        ]);
        let errors =
            validate_input(&catalog, &[], &SchedulerConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateDepartment { .. })));
    }

    #[test]
    fn test_duplicate_trainee() {
        let trainees = vec![Trainee::new("T1", "X"), Trainee::new("T1", "Y")];
        let errors = validate_input(&sample_catalog(), &trainees, &SchedulerConfig::default())
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateTrainee { .. })));
    }

    #[test]
    fn test_external_track_needs_two_selections() {
        let trainees = vec![Trainee::new("T1", "Cardiology")
            .with_track(Track::External)
            .with_self_selected("EKG")];
        let errors = validate_input(&sample_catalog(), &trainees, &SchedulerConfig::default())
            .unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingSelfSelection {
                found: 1,
                required: 2,
                ..
            }
        )));
    }

    #[test]
    fn test_home_specialty_does_not_count_toward_minimum() {
        // Two selections, but one duplicates the home specialty.
        let trainees = vec![Trainee::new("T1", "Cardiology")
            .with_track(Track::External)
            .with_self_selected("Cardiology")
            .with_self_selected("EKG")];
        let errors = validate_input(&sample_catalog(), &trainees, &SchedulerConfig::default())
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingSelfSelection { found: 1, .. })));
    }

    #[test]
    fn test_standard_track_rejects_selections() {
        let trainees = vec![Trainee::new("T1", "Cardiology").with_self_selected("EKG")];
        let errors = validate_input(&sample_catalog(), &trainees, &SchedulerConfig::default())
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnexpectedSelfSelection { .. })));
    }

    #[test]
    fn test_unknown_specialty_is_not_an_error() {
        // Home specialty with no backing department: a configuration gap,
        // handled by the requirement builder, not validation.
        let trainees = vec![Trainee::new("T1", "Radiology")];
        assert!(validate_input(&sample_catalog(), &trainees, &SchedulerConfig::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let catalog = Catalog::new(vec![Department::new("Empty", "X")]);
        let trainees = vec![Trainee::new("T1", "X"), Trainee::new("T1", "X")];
        let errors = validate_input(&catalog, &trainees, &SchedulerConfig::default()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
