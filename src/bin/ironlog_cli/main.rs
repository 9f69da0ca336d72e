// ABOUTME: IronLog CLI - compute set metrics and query dashboards or history from a snapshot file
// ABOUTME: Prints JSON results to stdout and logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronLog Contributors
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep-max
//! ironlog-cli one-rep-max --weight 100 --reps 8
//!
//! # Volume of a set
//! ironlog-cli volume --weight 22.5 --reps 12
//!
//! # Three-month dashboard for a user
//! ironlog-cli dashboard --data workouts.json --user u1 --months 3
//!
//! # Second page of history, oldest first
//! ironlog-cli history --data workouts.json --user u1 --limit 10 --offset 10 --order asc
//!
//! # Bench press trend over the last year
//! ironlog-cli progress --data workouts.json --user u1 --exercise bench --months 12
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ironlog::config::environment::ServerConfig;
use ironlog::logging::LoggingConfig;
use ironlog::params::HistoryQuery;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "ironlog-cli",
    about = "IronLog workout metrics CLI",
    long_about = "Compute one-rep-max and volume for a set, or build dashboards, history pages and progress series from a JSON workout snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Snapshot and user selection shared by the report commands
#[derive(Args)]
struct Source {
    /// Workout snapshot file (defaults to `IRONLOG_DATA_FILE`)
    #[arg(long)]
    data: Option<PathBuf>,

    /// User whose workouts to read
    #[arg(long)]
    user: String,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate a one-rep-max with the Brzycki formula
    OneRepMax {
        /// Load lifted
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Repetitions performed
        #[arg(long, allow_negative_numbers = true)]
        reps: i32,
    },

    /// Training volume of a set (weight x reps)
    Volume {
        /// Load lifted
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Repetitions performed
        #[arg(long, allow_negative_numbers = true)]
        reps: i32,
    },

    /// Dashboard summary for a month window
    Dashboard {
        #[command(flatten)]
        source: Source,

        /// Window length in months (1-12)
        #[arg(long, allow_hyphen_values = true)]
        months: Option<String>,

        /// End of the window, YYYY-MM-DD (defaults to today, UTC)
        #[arg(long)]
        today: Option<String>,
    },

    /// One page of workout history
    History {
        #[command(flatten)]
        source: Source,

        /// Earliest workout date, YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,

        /// Latest workout date, YYYY-MM-DD
        #[arg(long)]
        end_date: Option<String>,

        /// Only workouts containing this exercise
        #[arg(long)]
        exercise: Option<String>,

        /// Page size (1-100)
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,

        /// Workouts to skip
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,

        /// asc or desc
        #[arg(long)]
        order: Option<String>,
    },

    /// Per-workout trend for one exercise
    Progress {
        #[command(flatten)]
        source: Source,

        /// Exercise to chart
        #[arg(long)]
        exercise: String,

        /// Window length in months (1-12)
        #[arg(long, allow_hyphen_values = true)]
        months: Option<String>,

        /// End of the window, YYYY-MM-DD (defaults to today, UTC)
        #[arg(long)]
        today: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = ServerConfig::from_env()?;
    debug!("{}", config.summary());

    let output = match cli.command {
        Command::OneRepMax { weight, reps } => commands::one_rep_max(weight, reps)?,
        Command::Volume { weight, reps } => commands::volume(weight, reps)?,
        Command::Dashboard {
            source,
            months,
            today,
        } => {
            let service = commands::load_service(&config, source.data).await?;
            commands::dashboard(&service, &source.user, months, today.as_deref()).await?
        }
        Command::History {
            source,
            start_date,
            end_date,
            exercise,
            limit,
            offset,
            order,
        } => {
            let service = commands::load_service(&config, source.data).await?;
            let query = HistoryQuery {
                start_date,
                end_date,
                exercise_id: exercise,
                limit,
                offset,
                order,
            };
            commands::history(&service, &source.user, &query).await?
        }
        Command::Progress {
            source,
            exercise,
            months,
            today,
        } => {
            let service = commands::load_service(&config, source.data).await?;
            commands::progress(&service, &source.user, &exercise, months, today.as_deref())
                .await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
