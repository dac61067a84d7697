//! CLI commands for reports
//!
//! Each command loads a snapshot file, runs one engine over it and writes the
//! result in the requested format.

use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::export::{write_report, OutputFormat, Render};
use crate::models::Snapshot;
use crate::reports::{
    BalanceSummary, BudgetStatus, CategoryBreakdown, CategoryGrouping, DashboardReport,
    PeriodTrend, SpendSource, TrendBucketing,
};

/// Where and how a report is written
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Net worth and income/expense totals
    Summary {
        /// Snapshot JSON file
        snapshot: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Monthly income and expense buckets
    Trend {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Keep different years in separate buckets
        #[arg(long)]
        by_year: bool,

        /// Show the first N buckets only
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Expenses grouped by category
    #[command(alias = "spending")]
    Breakdown {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Group by category id instead of name
        #[arg(long)]
        by_id: bool,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Consumption of each monthly budget
    Budgets {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Only this budget (ID or name)
        #[arg(short, long)]
        budget: Option<String>,

        /// Recompute spent amounts from the snapshot's transactions
        #[arg(long)]
        recompute: bool,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Summary, spending and recent transactions
    Dashboard {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Number of leading transactions to consider
        #[arg(short, long)]
        window: Option<usize>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// List accounts and balances
    Accounts {
        /// Snapshot JSON file
        snapshot: PathBuf,
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Check a snapshot file without producing a report
    Validate {
        /// Snapshot JSON file
        snapshot: PathBuf,
    },
}

/// Handle report commands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Summary { snapshot, out } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let report = BalanceSummary::generate(&snapshot.accounts, &snapshot.transactions)?;
            emit(&report, &out, settings)
        }
        ReportCommands::Trend {
            snapshot,
            by_year,
            limit,
            out,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let bucketing = if by_year {
                TrendBucketing::YearMonth
            } else {
                settings.trend_bucketing
            };
            let mut report = PeriodTrend::generate(&snapshot.transactions, bucketing)?;
            if let Some(limit) = limit {
                report.truncate(limit);
            }
            emit(&report, &out, settings)
        }
        ReportCommands::Breakdown {
            snapshot,
            by_id,
            out,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let report = CategoryBreakdown::generate(&snapshot.transactions, grouping(settings, by_id))?;
            emit(&report, &out, settings)
        }
        ReportCommands::Budgets {
            snapshot,
            budget,
            recompute,
            out,
        } => handle_budgets(settings, &snapshot, budget, recompute, &out),
        ReportCommands::Dashboard {
            snapshot,
            window,
            out,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            let report = DashboardReport::generate(
                &snapshot.accounts,
                &snapshot.transactions,
                window.unwrap_or(settings.dashboard_window),
                settings.recent_transactions,
                settings.category_grouping,
            )?;
            emit(&report, &out, settings)
        }
        ReportCommands::Accounts { snapshot, out } => {
            let snapshot = Snapshot::load(&snapshot)?;
            emit(&snapshot.accounts, &out, settings)
        }
        ReportCommands::Validate { snapshot: path } => {
            let snapshot = Snapshot::load(&path)?;
            println!(
                "{} is valid: {} accounts, {} categories, {} transactions, {} budgets",
                path.display(),
                snapshot.accounts.len(),
                snapshot.categories.len(),
                snapshot.transactions.len(),
                snapshot.budgets.len()
            );
            Ok(())
        }
    }
}

fn grouping(settings: &Settings, by_id: bool) -> CategoryGrouping {
    if by_id {
        CategoryGrouping::Id
    } else {
        settings.category_grouping
    }
}

fn handle_budgets(
    settings: &Settings,
    path: &Path,
    budget: Option<String>,
    recompute: bool,
    out: &OutputArgs,
) -> FintrackResult<()> {
    let snapshot = Snapshot::load(path)?;

    let selected: Vec<_> = match &budget {
        Some(key) => {
            let found: Vec<_> = snapshot
                .budgets
                .iter()
                .filter(|b| b.matches(key))
                .cloned()
                .collect();
            if found.is_empty() {
                return Err(FintrackError::budget_not_found(key.as_str()));
            }
            found
        }
        None => snapshot.budgets.clone(),
    };

    let source = if recompute {
        SpendSource::Recomputed(&snapshot.transactions)
    } else {
        SpendSource::Supplied
    };

    let statuses = BudgetStatus::for_all(&selected, source)?;
    emit(&statuses, out, settings)
}

/// Write a report to the chosen destination
fn emit<R: Render + ?Sized>(report: &R, out: &OutputArgs, settings: &Settings) -> FintrackResult<()> {
    match &out.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            write_report(report, out.format, settings, BufWriter::new(file))?;
            println!("Report written to: {}", path.display());
            Ok(())
        }
        None => write_report(report, out.format, settings, io::stdout().lock()),
    }
}
