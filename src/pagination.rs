// ABOUTME: Re-exports sort order and page metadata from ironlog-core
// ABOUTME: Keeps SortOrder and Pagination the same type across all workspace crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

pub use ironlog_core::pagination::*;
