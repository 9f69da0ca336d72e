// ABOUTME: Offset pagination module for workout history listings
// ABOUTME: Provides sort order parsing and page metadata with has_more computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::AppError;

/// Date ordering for history listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first (date ASC, `created_at` ASC)
    Asc,
    /// Newest first (date DESC, `created_at` DESC)
    #[default]
    Desc,
}

impl SortOrder {
    /// Get string representation for API responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::invalid_input(format!(
                "Unknown sort order: '{other}'. Valid options: asc, desc"
            ))
            .with_field("order")),
        }
    }
}

/// Page metadata returned alongside a slice of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of matching items before slicing
    pub total: usize,
    /// Requested page size
    pub limit: usize,
    /// Requested starting position
    pub offset: usize,
    /// Whether items remain after this page
    pub has_more: bool,
}

impl Pagination {
    /// Build metadata for the window `[offset, offset + limit)` over `total` items
    #[must_use]
    pub const fn new(total: usize, limit: usize, offset: usize) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}
