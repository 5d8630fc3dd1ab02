// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod output;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use ophours::{Clock, FixedClock, Schedule, SystemClock};
use ophours_domain::RecordId;
use ophours_persistence::{SeedFile, SqliteConfigStore};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{
    HolidaysResponse, ImportResponse, NextResponse, RenderText, StatusResponse, WeekResponse,
};

/// ophours - opening hours, holidays and next openings from a schedule database
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` configuration database. Created if missing.
    #[arg(short, long)]
    database: PathBuf,

    /// IANA time zone the schedules are kept in
    #[arg(short, long, env = "OPHOURS_TIMEZONE", default_value = "UTC")]
    timezone: String,

    /// Evaluate at this local instant instead of now (`YYYY-MM-DDTHH:MM[:SS]`)
    #[arg(long, value_parser = parse_instant)]
    at: Option<NaiveDateTime>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Show whether a resource is open
    Status {
        /// Record identifier
        record: i64,
    },
    /// Show the next opening of a resource
    Next {
        /// Record identifier
        record: i64,
        /// Skip openings that fall on a holiday
        #[arg(long)]
        skip_holidays: bool,
    },
    /// Show the weekly opening hours of a resource
    Week {
        /// Record identifier
        record: i64,
        /// Include an entry for days without opening hours
        #[arg(long)]
        fill: bool,
    },
    /// List the holidays of a resource
    Holidays {
        /// Record identifier
        record: i64,
    },
    /// Import records from a JSON seed file
    Import {
        /// Path to the seed file
        seed: PathBuf,
    },
}

fn parse_instant(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {e}"))
}

/// Builds the clock for this invocation.
///
/// The zone is validated even when `--at` pins the instant.
fn build_clock(args: &Args) -> Result<Box<dyn Clock>, CliError> {
    let system: SystemClock = SystemClock::from_name(&args.timezone)?;
    debug!("Using time zone {}", system.timezone());

    Ok(match args.at {
        Some(at) => Box::new(FixedClock::new(at)),
        None => Box::new(system),
    })
}

fn print<T: Serialize + RenderText>(response: &T, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        println!("{}", response.render_text());
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let clock: Box<dyn Clock> = build_clock(args)?;
    let mut store: SqliteConfigStore = SqliteConfigStore::new_with_file(&args.database)?;

    match &args.command {
        Command::Status { record } => {
            let schedule: Schedule = Schedule::load(&mut store, RecordId::new(*record), &*clock)?;
            print(&StatusResponse::new(&schedule, clock.now()), args.json)
        }
        Command::Next {
            record,
            skip_holidays,
        } => {
            let schedule: Schedule = Schedule::load(&mut store, RecordId::new(*record), &*clock)?;
            let opening = if *skip_holidays {
                schedule.next_opening_outside_holidays(clock.now())?
            } else {
                schedule.next_open_period(clock.now())?
            };
            print(
                &NextResponse::new(&schedule, &opening, *skip_holidays),
                args.json,
            )
        }
        Command::Week { record, fill } => {
            let mut schedule: Schedule =
                Schedule::load(&mut store, RecordId::new(*record), &*clock)?;
            if *fill {
                schedule.add_dummy_periods();
            }
            print(&WeekResponse::new(&schedule), args.json)
        }
        Command::Holidays { record } => {
            let schedule: Schedule = Schedule::load(&mut store, RecordId::new(*record), &*clock)?;
            print(&HolidaysResponse::new(&schedule, clock.today()), args.json)
        }
        Command::Import { seed } => {
            let json: String =
                std::fs::read_to_string(seed).map_err(|source| CliError::ReadSeed {
                    path: seed.clone(),
                    source,
                })?;
            let imported: usize = store.import_seed(&SeedFile::from_json(&json)?)?;
            print(&ImportResponse { imported }, args.json)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Opening schedule database {}", args.database.display());
    run(&args)?;

    Ok(())
}
