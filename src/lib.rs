//! fintrack - derived views over a personal-finance snapshot
//!
//! This library turns a point-in-time snapshot of accounts, transactions and
//! monthly budgets into summaries: total balances and income/expense totals,
//! a monthly trend, spending by category and budget consumption.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Snapshot entities and their validation
//! - `reports`: The aggregation engine (pure, stateless)
//! - `display`: Terminal table formatting
//! - `export`: JSON, YAML and CSV output
//! - `config`: Paths, settings and the stored session
//! - `cli`: Command handlers for the `fintrack` binary
//! - `logging`: Tracing subscriber setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::models::Snapshot;
//! use fintrack::reports::{BalanceSummary, PeriodTrend, TrendBucketing};
//!
//! let snapshot = Snapshot::load(Path::new("snapshot.json"))?;
//! let summary = BalanceSummary::generate(&snapshot.accounts, &snapshot.transactions)?;
//! let trend = PeriodTrend::generate(&snapshot.transactions, TrendBucketing::MonthLabel)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{FintrackError, FintrackResult};
