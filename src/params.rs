// ABOUTME: Query parameter parsing and bounds checks for dashboard and history requests
// ABOUTME: Turns raw string parameters into typed params or field-tagged AppErrors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors

//! Request parameters
//!
//! Query values arrive as strings so that a non-numeric `limit` can be told
//! apart from an out-of-range one. Blank values are treated as absent and
//! fall back to the configured defaults. The metrics engine assumes
//! everything checked here.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use ironlog_metrics::config::{DashboardConfig, HistoryConfig};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::{dashboard, history, DATE_FORMAT};
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutFilter;
use crate::pagination::SortOrder;

/// Raw dashboard query string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Window length in months
    pub months: Option<String>,
}

impl DashboardQuery {
    /// Query with an explicit `months` value
    #[must_use]
    pub fn with_months(months: impl Into<String>) -> Self {
        Self {
            months: Some(months.into()),
        }
    }

    /// Validate and apply defaults
    ///
    /// # Errors
    ///
    /// `InvalidFormat` when `months` is not an integer, `ValueOutOfRange`
    /// when it lies outside 1..=12.
    pub fn resolve(&self, defaults: &DashboardConfig) -> AppResult<DashboardParams> {
        let months = match non_blank(self.months.as_ref()) {
            None => defaults.default_months,
            Some(raw) => {
                let value = parse_integer("months", raw)?;
                bounded("months", value, dashboard::MIN_MONTHS..=dashboard::MAX_MONTHS)?
            }
        };
        Ok(DashboardParams { months })
    }
}

/// Validated dashboard parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardParams {
    /// Window length, within 1..=12
    pub months: u32,
}

/// Raw history list query string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Earliest workout date, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Latest workout date, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// Only workouts containing this exercise
    pub exercise_id: Option<String>,
    /// Page size
    pub limit: Option<String>,
    /// Items to skip
    pub offset: Option<String>,
    /// `asc` or `desc`
    pub order: Option<String>,
}

impl HistoryQuery {
    /// Validate, apply defaults and build the data source filter
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` for malformed dates or non-integer `limit`/`offset`
    /// - `InvalidInput` when `start_date` is after `end_date` or `order` is
    ///   neither `asc` nor `desc`
    /// - `ValueOutOfRange` for `limit` outside 1..=100 or a negative `offset`
    pub fn resolve(&self, defaults: &HistoryConfig) -> AppResult<HistoryParams> {
        let start_date = non_blank(self.start_date.as_ref())
            .map(|raw| parse_date("start_date", raw))
            .transpose()?;
        let end_date = non_blank(self.end_date.as_ref())
            .map(|raw| parse_date("end_date", raw))
            .transpose()?;

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(AppError::invalid_input(format!(
                    "start_date ({start}) must be on or before end_date ({end})"
                ))
                .with_field("start_date"));
            }
        }

        let limit = match non_blank(self.limit.as_ref()) {
            None => defaults.default_limit,
            Some(raw) => bounded(
                "limit",
                parse_integer("limit", raw)?,
                history::MIN_PAGE_LIMIT..=history::MAX_PAGE_LIMIT,
            )?,
        };

        let offset = match non_blank(self.offset.as_ref()) {
            None => 0,
            Some(raw) => {
                let value = parse_integer("offset", raw)?;
                usize::try_from(value).map_err(|_| {
                    AppError::value_out_of_range("offset must be greater than or equal to 0")
                        .with_field("offset")
                })?
            }
        };

        let order = non_blank(self.order.as_ref())
            .map(SortOrder::from_str)
            .transpose()?
            .unwrap_or(defaults.default_order);

        Ok(HistoryParams {
            filter: WorkoutFilter {
                start_date,
                end_date,
                exercise_id: non_blank(self.exercise_id.as_ref()).map(str::to_owned),
            },
            limit,
            offset,
            order,
        })
    }
}

/// Validated history parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryParams {
    /// Criteria handed to the data source
    pub filter: WorkoutFilter,
    /// Page size, within 1..=100
    pub limit: usize,
    /// Items to skip
    pub offset: usize,
    /// Sort direction
    pub order: SortOrder,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|raw| raw.trim()).filter(|raw| !raw.is_empty())
}

fn parse_integer(field: &str, raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| {
        AppError::invalid_format(format!("{field} must be an integer, got '{raw}'"))
            .with_field(field)
    })
}

/// Accepted bounds travel in the error details as `{"min", "max"}`
fn bounded<T>(field: &str, value: i64, range: RangeInclusive<T>) -> AppResult<T>
where
    T: TryFrom<i64> + PartialOrd + Display + Serialize,
{
    match T::try_from(value) {
        Ok(converted) if range.contains(&converted) => Ok(converted),
        _ => Err(AppError::value_out_of_range(format!(
            "{field} must be between {} and {}",
            range.start(),
            range.end()
        ))
        .with_field(field)
        .with_details(json!({ "min": range.start(), "max": range.end() }))),
    }
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// `InvalidFormat` tagged with `field` when `raw` is not a valid date.
pub fn parse_date(field: &str, raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|error| {
        AppError::invalid_format(format!(
            "{field} must be a valid date in YYYY-MM-DD format, got '{raw}'"
        ))
        .with_field(field)
        .with_source(error)
    })
}
