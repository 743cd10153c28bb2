//! Cohort-wide load tracking.
//!
//! Shared mutable state across one generation run: how many trainees each
//! department hosts per calendar month, and how many it has been handed in
//! total. The requirement builder reads lifetime counts to pick the
//! least-loaded sibling department per specialty; the assignment engine
//! reads monthly counts to pick the least-loaded month candidate.
//!
//! Counts only grow during a run. One tracker instance belongs to exactly
//! one (cohort, start date) run; trainees of that run are processed
//! strictly sequentially against it.

use std::collections::HashMap;

use crate::models::MonthIndex;

/// Per-department headcount bookkeeping for one scheduling run.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    /// (department, month index) → assigned headcount.
    monthly: HashMap<(String, MonthIndex), u32>,
    /// department → lifetime assigned count (reservations + months).
    lifetime: HashMap<String, u32>,
}

impl LoadTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one trainee-month in a department.
    pub fn record_assignment(&mut self, department: &str, month: MonthIndex) {
        *self
            .monthly
            .entry((department.to_string(), month))
            .or_insert(0) += 1;
        *self.lifetime.entry(department.to_string()).or_insert(0) += 1;
    }

    /// Reserves a lifetime slot without touching monthly counts.
    ///
    /// The requirement builder reserves one slot per retained requirement
    /// so the next trainee's specialty deduplication sees updated load.
    pub fn reserve(&mut self, department: &str) {
        *self.lifetime.entry(department.to_string()).or_insert(0) += 1;
    }

    /// Headcount of a department in a given month.
    pub fn count_in_month(&self, department: &str, month: MonthIndex) -> u32 {
        self.monthly
            .get(&(department.to_string(), month))
            .copied()
            .unwrap_or(0)
    }

    /// Lifetime assigned count of a department.
    pub fn lifetime_count(&self, department: &str) -> u32 {
        self.lifetime.get(department).copied().unwrap_or(0)
    }

    /// Clears all counts. Invoked once per generation run, never mid-run.
    pub fn reset(&mut self) {
        self.monthly.clear();
        self.lifetime.clear();
    }
}
