// ABOUTME: Re-exports the unified error types from ironlog-core
// ABOUTME: AppError, ErrorCode and InvalidInputError share one identity across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

pub use ironlog_core::errors::*;
