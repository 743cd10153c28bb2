//! Rotation requirement model.
//!
//! A requirement is one department-occurrence a specific trainee still has
//! to complete. The requirement builder derives the full list per trainee;
//! the assignment engine consumes `remaining` month by month until the
//! requirement is done.

use serde::{Deserialize, Serialize};

use super::HalfMonths;

/// Why a requirement exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandatoryReason {
    /// Regular curriculum occurrence.
    Curriculum,
    /// Extra rotation in the trainee's home specialty.
    HomeSpecialtyBonus,
    /// Extra rotation in an external-track self-selected specialty.
    SelfSelectedBonus,
}

/// Lifecycle state of a requirement, derived from its remaining duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementState {
    /// Not yet started.
    Pending,
    /// Partially consumed.
    InProgress,
    /// Fully assigned.
    Done,
}

/// One department-occurrence a trainee must complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationRequirement {
    /// Target department name.
    pub department: String,
    /// Department's specialty (continuity cap key).
    pub specialty: String,
    /// Required duration.
    pub total: HalfMonths,
    /// Unassigned duration; starts equal to `total`.
    pub remaining: HalfMonths,
    /// 1-based position within the department's occurrence list.
    pub occurrence_index: usize,
    /// Whether this occurrence may only start after the deferral offset.
    pub deferred: bool,
    /// Why this requirement exists.
    pub reason: MandatoryReason,
}

impl RotationRequirement {
    /// Creates a pending requirement.
    pub fn new(
        department: impl Into<String>,
        specialty: impl Into<String>,
        total: HalfMonths,
        occurrence_index: usize,
        reason: MandatoryReason,
    ) -> Self {
        Self {
            department: department.into(),
            specialty: specialty.into(),
            total,
            remaining: total,
            occurrence_index,
            deferred: false,
            reason,
        }
    }

    /// Marks the requirement as deferred.
    pub fn with_deferral(mut self, deferred: bool) -> Self {
        self.deferred = deferred;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RequirementState {
        if self.remaining.is_zero() {
            RequirementState::Done
        } else if self.remaining == self.total {
            RequirementState::Pending
        } else {
            RequirementState::InProgress
        }
    }

    /// Whether this requirement has started but not finished.
    pub fn is_in_progress(&self) -> bool {
        self.state() == RequirementState::InProgress
    }

    /// Whether this requirement is fully assigned.
    pub fn is_done(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Consumes part of the remaining duration (clamped at zero).
    pub fn consume(&mut self, amount: HalfMonths) {
        self.remaining = self.remaining.saturating_sub(amount);
    }

    /// Months already assigned to this requirement.
    pub fn assigned(&self) -> HalfMonths {
        self.total.saturating_sub(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_month_req() -> RotationRequirement {
        RotationRequirement::new(
            "Cardiology I",
            "Cardiology",
            HalfMonths::from_whole(2),
            1,
            MandatoryReason::Curriculum,
        )
    }

    #[test]
    fn test_lifecycle_states() {
        let mut req = two_month_req();
        assert_eq!(req.state(), RequirementState::Pending);

        req.consume(HalfMonths::from_whole(1));
        assert_eq!(req.state(), RequirementState::InProgress);
        assert_eq!(req.assigned().as_months(), 1.0);

        req.consume(HalfMonths::from_whole(1));
        assert_eq!(req.state(), RequirementState::Done);
        assert!(req.is_done());
    }

    #[test]
    fn test_consume_clamps_at_zero() {
        let mut req = two_month_req();
        req.consume(HalfMonths::from_whole(5));
        assert_eq!(req.remaining, HalfMonths::ZERO);
        assert_eq!(req.assigned(), req.total);
    }

    #[test]
    fn test_half_month_consumption() {
        let mut req = RotationRequirement::new(
            "EKG Lab",
            "EKG",
            HalfMonths::HALF,
            1,
            MandatoryReason::Curriculum,
        );
        assert!(req.remaining.is_half());
        req.consume(HalfMonths::HALF);
        assert!(req.is_done());
    }

    #[test]
    fn test_deferral_flag() {
        let req = two_month_req().with_deferral(true);
        assert!(req.deferred);
    }
}
