// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `tutor-billing`: keep a private tutor's centers, rates and sessions, and
//! turn them into earnings reports.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod render;

use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use time::{Date, OffsetDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use tutor_billing_api::BillingStore;
use tutor_billing_persistence::SqliteStore;

use crate::commands::Command;

/// Tutor Billing - session ledger and earnings reports for private tutors
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file.
    #[arg(
        short,
        long,
        env = "TUTOR_BILLING_DB",
        default_value = "tutor_billing.sqlite3",
        conflicts_with = "in_memory"
    )]
    database: PathBuf,

    /// Use a throwaway in-memory database instead of a file.
    #[arg(long)]
    in_memory: bool,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn open_store(&self) -> Result<BillingStore<SqliteStore>> {
        let store: SqliteStore = if self.in_memory {
            info!("Using in-memory database");
            SqliteStore::new_in_memory().wrap_err("failed to create in-memory database")?
        } else {
            info!(path = %self.database.display(), "Using file-based database");
            SqliteStore::new_with_file(&self.database).wrap_err_with(|| {
                format!("failed to open database at {}", self.database.display())
            })?
        };
        BillingStore::open(store).wrap_err("failed to load the billing ledger")
    }
}

/// `RUST_LOG` wins over the `-v`/`-q` flags when it is set.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    let today: Date = OffsetDateTime::now_utc().date();
    let mut store: BillingStore<SqliteStore> = args.open_store()?;
    args.command.run(&mut store, today)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_database_defaults_to_working_directory_file() {
        let args: Args = Args::try_parse_from(["tutor-billing", "dashboard"]).unwrap();

        assert!(!args.in_memory);
        assert_eq!(args.database, PathBuf::from("tutor_billing.sqlite3"));
    }

    #[test]
    fn test_in_memory_conflicts_with_database() {
        let result = Args::try_parse_from([
            "tutor-billing",
            "--in-memory",
            "--database",
            "x.sqlite3",
            "dashboard",
        ]);

        assert!(result.is_err());
    }
}
