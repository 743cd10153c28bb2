//! Residency rotation scheduling engine.
//!
//! Assigns each trainee in a cohort a sequence of monthly department
//! placements satisfying curriculum requirements while balancing
//! department headcount over time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Department`, `Catalog`, `Trainee`,
//!   `RotationRequirement`, `CohortCalendar`, `TraineeSchedule`,
//!   `CohortSchedule`, `HalfMonths`
//! - **`validation`**: Input integrity checks (durations, duplicate names,
//!   track constraints)
//! - **`config`**: Policy knobs (deferral offset, continuity cap, bonuses)
//! - **`scheduler`**: The engine — requirement derivation, load tracking,
//!   greedy month assignment, KPIs and reporting projections
//!
//! # Algorithm
//!
//! Per trainee: derive the ordered requirement list from the catalog
//! (one department per specialty, picked by lifetime load), then fill
//! calendar months greedily — in-progress rotations continue first,
//! deferred ones wait out their offset, a continuity cap keeps one
//! specialty from running too long, and ties fall to the least-loaded
//! department of the month. Two half-month requirements share a month as
//! a merged `"A/B"` placement. The heuristic gives no optimality
//! guarantee; months it cannot fill stay as reported gaps.

pub mod config;
pub mod models;
pub mod scheduler;
pub mod validation;
