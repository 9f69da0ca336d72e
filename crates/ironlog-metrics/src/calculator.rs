// ABOUTME: Estimated one-rep-max (Brzycki) and training volume for a single strength set
// ABOUTME: Validates reps and weight with the exact messages surfaced to API clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Strength set metrics
//!
//! Both formulas only make sense for strength sets. Callers route cardio sets
//! elsewhere; nothing here looks at exercise type or workout state.
//!
//! # Scientific References
//!
//! - Brzycki, M. (1993). "Strength testing: Predicting a one-rep max from
//!   reps-to-fatigue." *JOPERD*, 64(1), 88-90.

use ironlog_core::constants::one_rep_max::{BRZYCKI_INTERCEPT, BRZYCKI_SLOPE};
use ironlog_core::errors::InvalidInputError;
use ironlog_core::models::LoggedSet;
use serde::{Deserialize, Serialize};

/// Round to two decimal places
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_load(weight: f64, reps: i32) -> Result<(), InvalidInputError> {
    if reps <= 0 {
        return Err(InvalidInputError::RepsNotPositive);
    }
    if weight < 0.0 || !weight.is_finite() {
        return Err(InvalidInputError::NegativeWeight);
    }
    Ok(())
}

/// `value` unchanged, or `ResultNotFinite` if it overflowed
pub(crate) fn ensure_finite(value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::ResultNotFinite)
    }
}

/// Estimate the one-rep-max for `reps` repetitions at `weight`
///
/// A single rep is an actual max and is returned unchanged. Otherwise the
/// Brzycki estimate `weight / (1.0278 - 0.0278 x reps)` is rounded to two
/// decimals.
///
/// The estimate is only physically meaningful up to about 36 reps. Past
/// that the denominator goes negative and the result is a large negative
/// number; it is returned as computed, not clamped.
///
/// # Errors
///
/// Returns `InvalidInputError::RepsNotPositive` when `reps <= 0`,
/// `InvalidInputError::NegativeWeight` when `weight` is negative or not
/// finite, and `InvalidInputError::ResultNotFinite` when the estimate
/// overflows.
///
/// # Example
///
/// ```rust
/// use ironlog_metrics::calculate_one_rep_max;
///
/// assert_eq!(calculate_one_rep_max(100.0, 1).unwrap(), 100.0);
/// assert_eq!(calculate_one_rep_max(100.0, 8).unwrap(), 124.16);
/// ```
pub fn calculate_one_rep_max(weight: f64, reps: i32) -> Result<f64, InvalidInputError> {
    validate_load(weight, reps)?;

    if reps == 1 {
        return Ok(weight);
    }

    let denominator = BRZYCKI_SLOPE.mul_add(-f64::from(reps), BRZYCKI_INTERCEPT);
    ensure_finite(round_to_cents(weight / denominator))
}

/// Training volume of a set: `weight x reps`, rounded to two decimals
///
/// # Errors
///
/// Same validation and messages as [`calculate_one_rep_max`], including
/// `ResultNotFinite` when `weight x reps` overflows.
///
/// # Example
///
/// ```rust
/// use ironlog_metrics::calculate_volume;
///
/// assert_eq!(calculate_volume(22.5, 12).unwrap(), 270.0);
/// ```
pub fn calculate_volume(weight: f64, reps: i32) -> Result<f64, InvalidInputError> {
    validate_load(weight, reps)?;
    ensure_finite(round_to_cents(weight * f64::from(reps)))
}

/// Derived numbers for one complete strength set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetMetrics {
    /// `weight x reps`
    pub volume: f64,
    /// Brzycki estimate
    pub estimated_one_rep_max: f64,
}

impl SetMetrics {
    /// Metrics for `set`, or `None` for cardio and incomplete sets
    ///
    /// # Errors
    ///
    /// Propagates calculator validation failures.
    pub fn for_set(set: &LoggedSet) -> Result<Option<Self>, InvalidInputError> {
        let Some((weight, reps)) = set.strength_load() else {
            return Ok(None);
        };
        Ok(Some(Self {
            volume: calculate_volume(weight, reps)?,
            estimated_one_rep_max: calculate_one_rep_max(weight, reps)?,
        }))
    }
}

/// Volume contributed by a set: zero for cardio and incomplete sets
///
/// # Errors
///
/// Propagates calculator validation failures.
pub fn set_volume(set: &LoggedSet) -> Result<f64, InvalidInputError> {
    set.strength_load()
        .map_or(Ok(0.0), |(weight, reps)| calculate_volume(weight, reps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironlog_core::constants::one_rep_max::BRZYCKI_RELIABLE_MAX_REPS;
    use ironlog_core::models::SetPerformance;

    #[test]
    fn test_one_rep_max_brzycki() {
        let estimate = calculate_one_rep_max(100.0, 8).unwrap();
        assert!((estimate - 124.16).abs() < 0.01);
    }

    #[test]
    fn test_single_rep_passes_weight_through() {
        assert_eq!(calculate_one_rep_max(100.0, 1).unwrap(), 100.0);
        // no rounding on the passthrough
        assert_eq!(calculate_one_rep_max(102.345, 1).unwrap(), 102.345);
    }

    #[test]
    fn test_zero_weight() {
        assert_eq!(calculate_one_rep_max(0.0, 10).unwrap(), 0.0);
        assert_eq!(calculate_volume(0.0, 10).unwrap(), 0.0);
    }

    #[test]
    fn test_estimate_never_below_weight_in_reliable_range() {
        for weight in [20.0, 52.5, 100.0, 187.5, 300.0] {
            for reps in 1..=BRZYCKI_RELIABLE_MAX_REPS {
                let estimate = calculate_one_rep_max(weight, reps).unwrap();
                assert!(estimate >= weight, "{weight} x {reps} estimated {estimate}");
            }
        }
    }

    #[test]
    fn test_high_reps_are_not_corrected() {
        // 1.0278 - 0.0278 * 37 = -0.0008
        let estimate = calculate_one_rep_max(100.0, 37).unwrap();
        assert!(estimate.is_finite());
        assert!(estimate < 0.0);
    }

    #[test]
    fn test_volume() {
        assert_eq!(calculate_volume(22.5, 12).unwrap(), 270.0);
        assert_eq!(calculate_volume(100.0, 8).unwrap(), 800.0);
        assert_eq!(calculate_volume(33.333, 3).unwrap(), 100.0);
    }

    #[test]
    fn test_invalid_input_messages() {
        let error = calculate_one_rep_max(-10.0, 5).unwrap_err();
        assert_eq!(error.to_string(), "Weight must be non-negative");

        let error = calculate_volume(100.0, 0).unwrap_err();
        assert_eq!(error.to_string(), "Reps must be greater than 0");

        assert_eq!(
            calculate_volume(100.0, -3).unwrap_err(),
            InvalidInputError::RepsNotPositive
        );
        assert_eq!(
            calculate_one_rep_max(f64::NAN, 3).unwrap_err(),
            InvalidInputError::NegativeWeight
        );
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        for weight in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                calculate_one_rep_max(weight, 5).unwrap_err(),
                InvalidInputError::NegativeWeight
            );
            assert_eq!(
                calculate_volume(weight, 5).unwrap_err(),
                InvalidInputError::NegativeWeight
            );
        }
    }

    #[test]
    fn test_overflowing_results_rejected() {
        assert_eq!(
            calculate_volume(1e307, 100).unwrap_err(),
            InvalidInputError::ResultNotFinite
        );
        assert_eq!(
            calculate_one_rep_max(f64::MAX, 30).unwrap_err(),
            InvalidInputError::ResultNotFinite
        );
    }

    #[test]
    fn test_reps_checked_before_weight() {
        assert_eq!(
            calculate_volume(-1.0, 0).unwrap_err(),
            InvalidInputError::RepsNotPositive
        );
    }

    #[test]
    fn test_set_metrics_skip_cardio_and_incomplete_sets() {
        let cardio = LoggedSet::cardio("row", 2000.0, 420.0).unwrap();
        assert_eq!(SetMetrics::for_set(&cardio).unwrap(), None);
        assert_eq!(set_volume(&cardio).unwrap(), 0.0);

        let incomplete = LoggedSet::new(
            "bench",
            0,
            SetPerformance::Strength {
                weight: Some(80.0),
                reps: None,
            },
        )
        .unwrap();
        assert_eq!(SetMetrics::for_set(&incomplete).unwrap(), None);
        assert_eq!(set_volume(&incomplete).unwrap(), 0.0);

        let complete = LoggedSet::strength("bench", 100.0, 8).unwrap();
        let metrics = SetMetrics::for_set(&complete).unwrap().unwrap();
        assert_eq!(metrics.volume, 800.0);
        assert_eq!(metrics.estimated_one_rep_max, 124.16);
    }
}
