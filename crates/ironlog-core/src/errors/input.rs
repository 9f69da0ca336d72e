// ABOUTME: Input validation errors raised by the metrics calculator and set conversion
// ABOUTME: Carries the exact user-facing messages for rejected weights, reps and set shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use thiserror::Error;

/// Rejected numeric or structural input on a logged set
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// `reps` was zero or negative
    #[error("Reps must be greater than 0")]
    RepsNotPositive,

    /// `weight` was negative or not finite
    #[error("Weight must be non-negative")]
    NegativeWeight,

    /// `distance` was negative or not finite
    #[error("Distance must be non-negative")]
    NegativeDistance,

    /// `time` was negative or not finite
    #[error("Time must be non-negative")]
    NegativeTime,

    /// A computed metric overflowed to a non-finite value
    #[error("Result is too large to represent")]
    ResultNotFinite,

    /// A set carried fields that belong to the other exercise type
    #[error("{exercise_type} sets cannot include {field}")]
    FieldTypeMismatch {
        /// Declared exercise type of the set
        exercise_type: &'static str,
        /// Offending field name
        field: &'static str,
    },
}
