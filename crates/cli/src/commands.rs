// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their execution against the billing store.

use std::fs;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Subcommand};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use time::Date;
use tracing::info;
use tutor_billing::Quote;
use tutor_billing_api::{
    BillingStore, DeleteResponse, QuoteRequest, RateRuleRequest, Report, ReportQuery,
    SessionRequest, SessionRow, add_catalog_entry, backup_file_name, build_dashboard, build_report,
    create_backup, csv_file_name, delete_catalog_entry, delete_rate_rule, delete_session,
    list_catalog, list_rate_rules, list_sessions, log_session, quote, render_csv,
    render_statement, restore_backup, revise_session, save_rate_rule, toggle_theme,
    update_settings,
};
use tutor_billing_domain::{
    CatalogEntry, CatalogKind, DomainError, EntityId, Session, SessionStatus, parse_iso_date,
};
use tutor_billing_persistence::SqliteStore;

use crate::render;

type Store = BillingStore<SqliteStore>;

fn parse_date(value: &str) -> Result<Date, String> {
    parse_iso_date(value).map_err(|e| e.to_string())
}

fn parse_status(value: &str) -> Result<SessionStatus, String> {
    value.parse().map_err(|e: DomainError| e.to_string())
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage tutoring centers
    Center {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Manage subjects
    Subject {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Manage standards (grade levels)
    Standard {
        #[command(subcommand)]
        action: CatalogCommand,
    },

    /// Manage hourly rate rules
    Rate {
        #[command(subcommand)]
        action: RateCommand,
    },

    /// Log and manage sessions
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Summarize completed sessions over a date range
    Report(ReportArgs),

    /// Show this month's earnings and upcoming sessions
    #[command(visible_alias = "d")]
    Dashboard,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },

    /// Export or import a JSON backup of everything
    Backup {
        #[command(subcommand)]
        action: BackupCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Add an entry
    Add {
        /// Display name
        name: String,
    },
    /// Delete an entry; rules and sessions referring to it are kept
    Delete {
        /// Entry id
        id: String,
    },
    /// List entries
    #[command(visible_alias = "ls")]
    List,
}

/// The scope and rate of a rule. An omitted dimension matches anything.
#[derive(Debug, ClapArgs)]
pub struct RuleArgs {
    /// Center id
    #[arg(long)]
    center: Option<String>,
    /// Subject id
    #[arg(long)]
    subject: Option<String>,
    /// Standard id
    #[arg(long)]
    standard: Option<String>,
    /// Hourly rate in rupees
    #[arg(long)]
    rate: String,
}

impl RuleArgs {
    fn to_request(&self) -> RateRuleRequest {
        RateRuleRequest {
            center_id: self.center.clone(),
            subject_id: self.subject.clone(),
            standard_id: self.standard.clone(),
            rate_per_hour: self.rate.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum RateCommand {
    /// Add a rule, or update the rate of the rule with the same scope
    Add(RuleArgs),
    /// Replace a rule's scope and rate
    Edit {
        /// Rule id
        id: String,
        #[command(flatten)]
        rule: RuleArgs,
    },
    /// Delete a rule
    Delete {
        /// Rule id
        id: String,
    },
    /// List rules in storage order
    #[command(visible_alias = "ls")]
    List,
    /// Preview the rate and amount for a session context
    Quote {
        /// Center id
        #[arg(long)]
        center: Option<String>,
        /// Subject id
        #[arg(long)]
        subject: Option<String>,
        /// Standard id
        #[arg(long)]
        standard: Option<String>,
        /// Duration in hours
        #[arg(long, default_value = "")]
        hours: String,
    },
}

/// Session fields. When editing, omitted fields keep their current value.
#[derive(Debug, ClapArgs)]
pub struct SessionArgs {
    /// Session date (YYYY-MM-DD); defaults to today when logging
    #[arg(long)]
    date: Option<String>,
    /// Center id
    #[arg(long)]
    center: Option<String>,
    /// Subject id
    #[arg(long)]
    subject: Option<String>,
    /// Standard id
    #[arg(long)]
    standard: Option<String>,
    /// Duration in hours; defaults to 1 when logging
    #[arg(long)]
    hours: Option<String>,
    /// completed, scheduled or cancelled
    #[arg(long)]
    status: Option<String>,
}

impl SessionArgs {
    /// Builds a request over `base`, replacing only the fields given.
    fn over(&self, base: SessionRequest) -> SessionRequest {
        SessionRequest {
            date: self.date.clone().unwrap_or(base.date),
            center_id: self.center.clone().unwrap_or(base.center_id),
            subject_id: self.subject.clone().unwrap_or(base.subject_id),
            standard_id: self.standard.clone().unwrap_or(base.standard_id),
            duration: self.hours.clone().unwrap_or(base.duration),
            status: self.status.clone().or(base.status),
        }
    }
}

/// Starting point for a new session: today, one hour, completed unless told otherwise.
fn log_defaults(today: Date) -> SessionRequest {
    SessionRequest {
        date: today.to_string(),
        duration: String::from("1"),
        ..SessionRequest::default()
    }
}

fn request_from_session(session: &Session) -> SessionRequest {
    SessionRequest {
        date: session.date.to_string(),
        center_id: session.center_id.to_string(),
        subject_id: session.subject_id.to_string(),
        standard_id: session.standard_id.to_string(),
        duration: session.duration.to_string(),
        status: Some(session.status.to_string()),
    }
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Log a session priced at the current rates
    Log(SessionArgs),
    /// Change a session and re-price it at the current rates
    Edit {
        /// Session id
        id: String,
        #[command(flatten)]
        fields: SessionArgs,
    },
    /// Delete a session
    Delete {
        /// Session id
        id: String,
    },
    /// List sessions, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Only sessions with this status
        #[arg(long, value_parser = parse_status)]
        status: Option<SessionStatus>,
    },
}

#[derive(Debug, ClapArgs)]
pub struct ReportArgs {
    /// First day included (defaults to the first of this month)
    #[arg(long, value_parser = parse_date)]
    from: Option<Date>,
    /// Last day included (defaults to today)
    #[arg(long, value_parser = parse_date)]
    to: Option<Date>,
    /// Restrict to one center id
    #[arg(long)]
    center: Option<String>,
    /// Write the report as CSV, to PATH or to billing_<from>_<to>.csv
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    csv: Option<Option<PathBuf>>,
    /// Print the full statement instead of the summary
    #[arg(long)]
    statement: bool,
}

impl ReportArgs {
    fn query(&self, today: Date) -> ReportQuery {
        let month: ReportQuery = ReportQuery::month_to_date(today);
        ReportQuery::new(
            self.from.unwrap_or(month.start),
            self.to.unwrap_or(month.end),
            self.center
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(EntityId::new),
        )
    }
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings
    Show,
    /// Change the tutor name and/or theme
    Set {
        /// Name printed on statements
        #[arg(long)]
        name: Option<String>,
        /// light or dark
        #[arg(long)]
        theme: Option<String>,
    },
    /// Switch between the light and dark theme
    ToggleTheme,
}

#[derive(Debug, Subcommand)]
pub enum BackupCommand {
    /// Write a backup of everything to a JSON file
    Export {
        /// Output path (defaults to tutor_backup_<date>.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace everything with the contents of a backup file
    Import {
        /// Backup file to read
        path: PathBuf,
    },
}

impl Command {
    pub fn run(self, store: &mut Store, today: Date) -> Result<()> {
        match self {
            Self::Center { action } => action.run(store, CatalogKind::Center),
            Self::Subject { action } => action.run(store, CatalogKind::Subject),
            Self::Standard { action } => action.run(store, CatalogKind::Standard),
            Self::Rate { action } => action.run(store),
            Self::Session { action } => action.run(store, today),
            Self::Report(args) => args.run(store, today),
            Self::Dashboard => {
                render::print_dashboard(&build_dashboard(store.state(), today));
                Ok(())
            }
            Self::Settings { action } => action.run(store),
            Self::Backup { action } => action.run(store, today),
        }
    }
}

fn print_delete(response: &DeleteResponse) {
    println!("{}", response.message);
}

impl CatalogCommand {
    fn run(self, store: &mut Store, kind: CatalogKind) -> Result<()> {
        match self {
            Self::Add { name } => {
                let entry: CatalogEntry = add_catalog_entry(store, kind, &name)?.response;
                println!("Added {kind} '{}' ({})", entry.name, entry.id);
            }
            Self::Delete { id } => print_delete(&delete_catalog_entry(store, kind, &id)?.response),
            Self::List => render::print_catalog(kind, &list_catalog(store.state(), kind)),
        }
        Ok(())
    }
}

impl RateCommand {
    fn run(self, store: &mut Store) -> Result<()> {
        match self {
            Self::Add(rule) => {
                println!(
                    "{}",
                    save_rate_rule(store, None, &rule.to_request())?
                        .response
                        .message
                );
            }
            Self::Edit { id, rule } => {
                println!(
                    "{}",
                    save_rate_rule(store, Some(id.as_str()), &rule.to_request())?
                        .response
                        .message
                );
            }
            Self::Delete { id } => print_delete(&delete_rate_rule(store, &id)?.response),
            Self::List => render::print_rate_rules(&list_rate_rules(store.state())),
            Self::Quote {
                center,
                subject,
                standard,
                hours,
            } => {
                let preview: Quote = quote(
                    store.state(),
                    &QuoteRequest {
                        center_id: center,
                        subject_id: subject,
                        standard_id: standard,
                        duration: hours,
                    },
                )?;
                render::print_quote(&preview);
            }
        }
        Ok(())
    }
}

impl SessionCommand {
    fn run(self, store: &mut Store, today: Date) -> Result<()> {
        match self {
            Self::Log(fields) => {
                let row: SessionRow =
                    log_session(store, &fields.over(log_defaults(today)))?.response;
                println!("Logged session {}", row.id);
                render::print_sessions(std::slice::from_ref(&row));
            }
            Self::Edit { id, fields } => {
                let base: SessionRequest = store
                    .state()
                    .find_session(&EntityId::new(id.trim()))
                    .map(request_from_session)
                    .ok_or_else(|| eyre!("no session with id '{}'", id.trim()))?;
                let row: SessionRow = revise_session(store, &id, &fields.over(base))?.response;
                println!("Updated session {}", row.id);
                render::print_sessions(std::slice::from_ref(&row));
            }
            Self::Delete { id } => print_delete(&delete_session(store, &id)?.response),
            Self::List { status } => render::print_sessions(&list_sessions(store.state(), status)),
        }
        Ok(())
    }
}

impl ReportArgs {
    fn run(self, store: &mut Store, today: Date) -> Result<()> {
        let query: ReportQuery = self.query(today);
        if query.start > query.end {
            return Err(eyre!(
                "report range is empty: {} is after {}",
                query.start,
                query.end
            ));
        }
        let report: Report = build_report(store.state(), &query);

        if self.statement {
            print!(
                "{}",
                render_statement(&report, &store.state().settings.tutor_name)
            );
        } else {
            render::print_report(&report);
        }

        if let Some(path) = self.csv {
            let path: PathBuf =
                path.unwrap_or_else(|| PathBuf::from(csv_file_name(query.start, query.end)));
            fs::write(&path, render_csv(&report)?)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = report.session_count(), "Exported CSV");
            println!("Wrote {}", path.display());
        }
        Ok(())
    }
}

impl SettingsCommand {
    fn run(self, store: &mut Store) -> Result<()> {
        match self {
            Self::Show => {}
            Self::Set { name, theme } => {
                update_settings(store, name.as_deref(), theme.as_deref())?;
            }
            Self::ToggleTheme => {
                toggle_theme(store)?;
            }
        }
        render::print_settings(&store.state().settings);
        Ok(())
    }
}

impl BackupCommand {
    fn run(self, store: &mut Store, today: Date) -> Result<()> {
        match self {
            Self::Export { output } => {
                let path: PathBuf = output.unwrap_or_else(|| PathBuf::from(backup_file_name(today)));
                fs::write(&path, create_backup(store.state())?)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                println!("Wrote {}", path.display());
            }
            Self::Import { path } => {
                let document: String = fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                let counts = restore_backup(store, &document)?.event.after;
                println!(
                    "Restored {} centers, {} subjects, {} standards, {} rate rules, {} sessions",
                    counts.centers,
                    counts.subjects,
                    counts.standards,
                    counts.rate_rules,
                    counts.sessions
                );
            }
        }
        Ok(())
    }
}
