//! Scheduling policy configuration.
//!
//! All tunable knobs of the requirement builder and assignment engine.
//! Defaults match the conventional residency curriculum: a 12-month
//! deferral for second-year rotations, a 2-month home-specialty bonus,
//! 1-month self-selected bonuses, and a 3-month continuity cap.

use serde::{Deserialize, Serialize};

use crate::models::HalfMonths;

/// Policy knobs for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Months from cohort start before a deferred rotation may begin.
    pub deferral_delay_months: usize,
    /// Longest run of consecutive months one specialty may occupy.
    ///
    /// A new requirement may not start while its specialty appeared in any
    /// of the preceding `max_consecutive_specialty_months - 1` months; an
    /// in-progress one may not extend a run past the cap. Both give way
    /// when no other candidate exists.
    pub max_consecutive_specialty_months: usize,
    /// Duration of the home-specialty bonus rotation (deferred).
    pub home_bonus: HalfMonths,
    /// Duration of each self-selected bonus rotation (not deferred).
    pub self_selected_bonus: HalfMonths,
    /// Minimum distinct self-selected specialties on the external track.
    pub min_self_selected: usize,
    /// Extra months `suggested_horizon` adds past the required total.
    pub horizon_slack_months: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            deferral_delay_months: 12,
            max_consecutive_specialty_months: 3,
            home_bonus: HalfMonths::from_whole(2),
            self_selected_bonus: HalfMonths::from_whole(1),
            min_self_selected: 2,
            horizon_slack_months: 2,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deferral offset.
    pub fn with_deferral_delay(mut self, months: usize) -> Self {
        self.deferral_delay_months = months;
        self
    }

    /// Sets the continuity cap.
    pub fn with_max_consecutive(mut self, months: usize) -> Self {
        self.max_consecutive_specialty_months = months;
        self
    }

    /// Sets the home-specialty bonus duration.
    pub fn with_home_bonus(mut self, duration: HalfMonths) -> Self {
        self.home_bonus = duration;
        self
    }

    /// Sets the self-selected bonus duration.
    pub fn with_self_selected_bonus(mut self, duration: HalfMonths) -> Self {
        self.self_selected_bonus = duration;
        self
    }

    /// Sets the external-track self-selection minimum.
    pub fn with_min_self_selected(mut self, count: usize) -> Self {
        self.min_self_selected = count;
        self
    }

    /// Sets the horizon slack.
    pub fn with_horizon_slack(mut self, months: usize) -> Self {
        self.horizon_slack_months = months;
        self
    }
}
