//! Rotation duration model.
//!
//! Rotation lengths are quantized to half-month units: the curriculum
//! expresses durations like 0.5, 1.5, or 2.0 months, and the engine's
//! half-month merge rule needs exact fractional comparison. Storing
//! durations as an integer count of half-months makes that arithmetic
//! exact — no float equality anywhere in the engine.
//!
//! # Serialization
//! Serialized as fractional months (`f64`), the unit the curriculum is
//! written in. Deserialization rejects values that are not non-negative
//! multiples of 0.5.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A duration in half-month units (1 unit = 0.5 months).
///
/// Supports the full range the engine needs: whole months, half months,
/// and exact detection of fractional remainders for merge pairing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct HalfMonths(i32);

/// Error converting fractional months into half-month units.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationError {
    /// The value is not an exact multiple of 0.5 months.
    #[error("duration {0} months is not a multiple of 0.5")]
    NotHalfMonthAligned(f64),
    /// The value is negative or not finite.
    #[error("duration {0} months is negative or not finite")]
    OutOfRange(f64),
}

impl HalfMonths {
    /// Zero duration.
    pub const ZERO: HalfMonths = HalfMonths(0);
    /// Half a month (the merge granularity).
    pub const HALF: HalfMonths = HalfMonths(1);

    /// Creates a duration from a count of half-month units.
    pub const fn from_units(units: i32) -> Self {
        Self(units)
    }

    /// Creates a duration from a count of whole months.
    pub const fn from_whole(months: i32) -> Self {
        Self(months * 2)
    }

    /// Creates a duration from fractional months.
    ///
    /// Accepts non-negative, finite multiples of 0.5.
    pub fn from_months(months: f64) -> Result<Self, DurationError> {
        if !months.is_finite() || months < 0.0 {
            return Err(DurationError::OutOfRange(months));
        }
        let units = months * 2.0;
        if units.fract() != 0.0 || units > i32::MAX as f64 {
            return Err(DurationError::NotHalfMonthAligned(months));
        }
        Ok(Self(units as i32))
    }

    /// Duration in half-month units.
    #[inline]
    pub fn units(self) -> i32 {
        self.0
    }

    /// Duration in fractional months.
    #[inline]
    pub fn as_months(self) -> f64 {
        self.0 as f64 / 2.0
    }

    /// Whether this duration is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether this duration has a 0.5-month remainder.
    ///
    /// Fractional remainders are what the half-month merge pairs up.
    #[inline]
    pub fn is_fractional(self) -> bool {
        self.0 % 2 != 0
    }

    /// Whether this is exactly half a month.
    #[inline]
    pub fn is_half(self) -> bool {
        self.0 == 1
    }

    /// Sum of two durations.
    pub fn saturating_add(self, other: HalfMonths) -> HalfMonths {
        HalfMonths(self.0.saturating_add(other.0))
    }

    /// Difference, clamped at zero.
    pub fn saturating_sub(self, other: HalfMonths) -> HalfMonths {
        HalfMonths((self.0 - other.0).max(0))
    }

    /// Number of whole calendar months needed to contain this duration.
    ///
    /// 1.5 months occupy 2 calendar months; 2.0 months occupy 2.
    pub fn ceil_months(self) -> usize {
        ((self.0 + 1) / 2).max(0) as usize
    }
}

impl TryFrom<f64> for HalfMonths {
    type Error = DurationError;

    fn try_from(months: f64) -> Result<Self, Self::Error> {
        Self::from_months(months)
    }
}

impl From<HalfMonths> for f64 {
    fn from(d: HalfMonths) -> f64 {
        d.as_months()
    }
}

impl fmt::Display for HalfMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_months())
    }
}

impl std::iter::Sum for HalfMonths {
    fn sum<I: Iterator<Item = HalfMonths>>(iter: I) -> Self {
        iter.fold(HalfMonths::ZERO, |acc, d| acc.saturating_add(d))
    }
}
