// ABOUTME: Core types and constants for the IronLog workout tracker
// ABOUTME: Foundation crate with error handling, workout models, filters, and pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

#![deny(unsafe_code)]

//! # IronLog Core
//!
//! Foundation crate providing shared types and constants for the IronLog
//! workout tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `InvalidInputError`
//! - **constants**: Hard limits shared by the boundary and the metrics engine
//! - **models**: Logged sets, workouts, and exercise catalog entries
//! - **filter**: Workout filter contract honored by data sources
//! - **pagination**: Offset pagination metadata and sort order

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`LoggedSet`, `Workout`, `Exercise`)
pub mod models;

/// Date-range and exercise filter for workout queries
pub mod filter;

/// Offset pagination metadata and sort order
pub mod pagination;
