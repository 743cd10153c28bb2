//! Greedy month-by-month assignment engine.
//!
//! Consumes one trainee's requirement list and produces their month →
//! department schedule, sharing a [`LoadTracker`] with the rest of the
//! cohort for load balancing.
//!
//! # Algorithm
//!
//! For each calendar month in order:
//! 1. Filter to eligible requirements (unfinished, deferral gate passed).
//! 2. Apply the continuity cap: an in-progress rotation may not extend a
//!    same-specialty run past the cap, and a new one may not start right
//!    after its specialty just ran. The cap is waived when it would leave
//!    no candidate at all.
//! 3. Order candidates: in-progress first (insertion order, load is not
//!    re-evaluated), then pending by current-month headcount with
//!    insertion order as the tie-break. Deterministic throughout.
//! 4. Commit the first feasible candidate. A candidate down to exactly
//!    half a month is only feasible merged with another fractional
//!    requirement; with no partner it waits for a later month.
//!
//! A month with no feasible candidate stays unassigned — a gap, reported
//! through the leftover requirement list, never an error.
//!
//! # Complexity
//! O(h * r^2) for h horizon months and r requirements per trainee.

use tracing::debug;

use crate::config::SchedulerConfig;
use crate::models::{
    CohortCalendar, HalfMonths, MonthAssignment, MonthIndex, RotationRequirement, TraineeSchedule,
};
use crate::scheduler::LoadTracker;

/// Greedy per-trainee assignment engine.
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    config: SchedulerConfig,
}

/// What the engine decided to place in one month.
enum Placement {
    /// A whole month in one requirement.
    Whole(usize),
    /// Two half-months: primary requirement and its merge partner.
    Merged(usize, usize),
}

impl AssignmentEngine {
    /// Creates an engine with the given policy.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Assigns one trainee's requirements across the calendar's months.
    ///
    /// Mutates the shared tracker as months are committed. Returns the
    /// finished schedule and the requirements still unfinished at the end
    /// of the horizon — the caller's incompleteness report.
    pub fn assign(
        &self,
        trainee: &str,
        mut requirements: Vec<RotationRequirement>,
        calendar: &CohortCalendar,
        tracker: &mut LoadTracker,
    ) -> (TraineeSchedule, Vec<RotationRequirement>) {
        let mut schedule = TraineeSchedule::new();
        // Specialties assigned per month, for the continuity window.
        // A merged month contributes both specialties.
        let mut recent: Vec<Vec<String>> = vec![Vec::new(); calendar.horizon()];

        for month in calendar.indices() {
            let placement = self.select(&requirements, month, &recent, tracker);
            match placement {
                Some(Placement::Whole(idx)) => {
                    let department = requirements[idx].department.clone();
                    let specialty = requirements[idx].specialty.clone();
                    requirements[idx].consume(HalfMonths::from_whole(1));
                    tracker.record_assignment(&department, month);
                    schedule.insert(month, MonthAssignment::single(department));
                    recent[month].push(specialty);
                }
                Some(Placement::Merged(primary, partner)) => {
                    let primary_dept = requirements[primary].department.clone();
                    let partner_dept = requirements[partner].department.clone();
                    requirements[primary].consume(HalfMonths::HALF);
                    requirements[partner].consume(HalfMonths::HALF);
                    tracker.record_assignment(&primary_dept, month);
                    tracker.record_assignment(&partner_dept, month);
                    recent[month].push(requirements[primary].specialty.clone());
                    recent[month].push(requirements[partner].specialty.clone());
                    schedule.insert(month, MonthAssignment::merged(primary_dept, partner_dept));
                }
                None => {} // scheduling gap
            }
        }

        let leftover: Vec<RotationRequirement> = requirements
            .into_iter()
            .filter(|r| !r.is_done())
            .collect();

        debug!(
            trainee,
            assigned_months = schedule.assigned_month_count(),
            unfinished = leftover.len(),
            "trainee assignment finished"
        );
        (schedule, leftover)
    }

    /// Select-then-commit: picks this month's placement without mutating
    /// anything.
    fn select(
        &self,
        requirements: &[RotationRequirement],
        month: MonthIndex,
        recent: &[Vec<String>],
        tracker: &LoadTracker,
    ) -> Option<Placement> {
        let eligible: Vec<usize> = (0..requirements.len())
            .filter(|&i| self.is_eligible(&requirements[i], month))
            .collect();
        if eligible.is_empty() {
            return None;
        }

        // Cap-filtered candidate set, insertion order.
        let mut candidates: Vec<usize> = eligible
            .iter()
            .copied()
            .filter(|&i| !self.cap_blocked(&requirements[i], month, recent))
            .collect();
        if candidates.is_empty() {
            // Waive the cap rather than force a gap: a single-specialty
            // requirement list may legitimately exceed the run length.
            candidates = eligible;
        }

        // In-progress continuation first, then pending by monthly load.
        let mut ordered: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| requirements[i].is_in_progress())
            .collect();
        let mut pending: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&i| !requirements[i].is_in_progress())
            .collect();
        pending.sort_by_key(|&i| (tracker.count_in_month(&requirements[i].department, month), i));
        ordered.extend(pending);

        for idx in ordered {
            if requirements[idx].remaining.is_half() {
                // Never assigned alone; needs a fractional partner.
                let partner = candidates
                    .iter()
                    .copied()
                    .find(|&j| j != idx && requirements[j].remaining.is_fractional());
                if let Some(partner) = partner {
                    return Some(Placement::Merged(idx, partner));
                }
                // No partner this month; retried next month.
                continue;
            }
            return Some(Placement::Whole(idx));
        }
        None
    }

    /// Deferral gate plus the unfinished check.
    fn is_eligible(&self, req: &RotationRequirement, month: MonthIndex) -> bool {
        !req.is_done() && (!req.deferred || month >= self.config.deferral_delay_months)
    }

    /// Continuity cap check for one candidate.
    fn cap_blocked(
        &self,
        req: &RotationRequirement,
        month: MonthIndex,
        recent: &[Vec<String>],
    ) -> bool {
        let cap = self.config.max_consecutive_specialty_months;
        if cap == 0 {
            return false;
        }
        let occupied = |m: MonthIndex| recent[m].iter().any(|s| s == &req.specialty);

        if req.is_in_progress() {
            // Continuing must not extend a run past the cap: blocked only
            // when the preceding `cap` months all held this specialty.
            month >= cap && (month - cap..month).all(occupied)
        } else {
            // Starting fresh right after the same specialty would chain
            // requirements into an over-long run.
            let window_start = month.saturating_sub(cap - 1);
            (window_start..month).any(occupied)
        }
    }
}
