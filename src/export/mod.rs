//! Export module for fintrack
//!
//! Every report can be written in four formats:
//! - terminal: the plain-text table from `format_terminal`
//! - JSON and YAML: the serialized report structure
//! - CSV: the report's tabular rows, for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_accounts_csv;
pub use self::json::export_json;
pub use self::yaml::export_yaml;

use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_account_list;
use crate::error::FintrackResult;
use crate::models::Account;
use crate::reports::budget_status::export_csv_all;
use crate::reports::{BalanceSummary, BudgetStatus, CategoryBreakdown, DashboardReport, PeriodTrend};

/// Output format for report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
    Csv,
}

/// A report that can be written in every output format
pub trait Render: Serialize {
    /// Plain-text rendering using the user's display settings
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String>;

    /// Tabular rows as CSV
    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()>;
}

/// Write a report in the requested format
pub fn write_report<R, W>(
    report: &R,
    format: OutputFormat,
    settings: &Settings,
    mut writer: W,
) -> FintrackResult<()>
where
    R: Render + ?Sized,
    W: Write,
{
    match format {
        OutputFormat::Terminal => writer.write_all(report.render_terminal(settings)?.as_bytes())?,
        OutputFormat::Json => export_json(report, &mut writer)?,
        OutputFormat::Yaml => export_yaml(report, &mut writer)?,
        OutputFormat::Csv => report.render_csv(&mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

impl Render for BalanceSummary {
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String> {
        Ok(self.format_terminal(&settings.currency_symbol))
    }

    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()> {
        self.export_csv(writer)
    }
}

impl Render for PeriodTrend {
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String> {
        Ok(self.format_terminal(&settings.currency_symbol))
    }

    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()> {
        self.export_csv(writer)
    }
}

impl Render for CategoryBreakdown {
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String> {
        Ok(self.format_terminal(&settings.currency_symbol))
    }

    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()> {
        self.export_csv(writer)
    }
}

impl Render for DashboardReport {
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String> {
        Ok(self.format_terminal(&settings.currency_symbol, &settings.date_format))
    }

    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()> {
        self.export_csv(writer)
    }
}

impl Render for Vec<BudgetStatus> {
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String> {
        if self.is_empty() {
            return Ok("No budgets.\n".to_string());
        }
        Ok(self
            .iter()
            .map(|status| status.format_terminal(&settings.currency_symbol))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()> {
        export_csv_all(self, writer)
    }
}

impl Render for Vec<Account> {
    fn render_terminal(&self, settings: &Settings) -> FintrackResult<String> {
        let mut output = format_account_list(self, &settings.currency_symbol)?;
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }

    fn render_csv(&self, writer: &mut dyn Write) -> FintrackResult<()> {
        export_accounts_csv(self, writer)
    }
}
