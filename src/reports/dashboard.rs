//! Dashboard Report
//!
//! Balance summary, spending breakdown and a short list of recent
//! transactions, all computed over the same leading window of transactions.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use super::{BalanceSummary, CategoryBreakdown, CategoryGrouping};
use crate::display::report::{double_separator, format_date, separator, truncate};
use crate::error::FintrackResult;
use crate::models::{Account, Money, Transaction};

/// Number of leading transactions the dashboard looks at
pub const DEFAULT_WINDOW: usize = 10;

/// Number of transactions listed as recent
pub const DEFAULT_RECENT: usize = 5;

/// One line in the recent transactions list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTransaction {
    pub label: String,
    pub date: NaiveDate,
    pub sign: char,
    pub amount: Money,
}

impl From<&Transaction> for RecentTransaction {
    fn from(txn: &Transaction) -> Self {
        Self {
            label: txn.display_label().to_string(),
            date: txn.date,
            sign: txn.display_sign(),
            amount: txn.amount,
        }
    }
}

/// Dashboard Report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub summary: BalanceSummary,
    pub spending: CategoryBreakdown,
    pub recent: Vec<RecentTransaction>,
}

impl DashboardReport {
    /// Build the dashboard from the first `window` transactions
    pub fn generate(
        accounts: &[Account],
        transactions: &[Transaction],
        window: usize,
        recent: usize,
        grouping: CategoryGrouping,
    ) -> FintrackResult<Self> {
        let windowed = &transactions[..window.min(transactions.len())];

        let summary = BalanceSummary::generate(accounts, windowed)?;
        let spending = CategoryBreakdown::generate(windowed, grouping)?;
        let recent = windowed
            .iter()
            .take(recent)
            .map(RecentTransaction::from)
            .collect();

        tracing::debug!(
            window = windowed.len(),
            "generated dashboard"
        );

        Ok(Self {
            summary,
            spending,
            recent,
        })
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&self.summary.format_terminal(symbol));
        output.push('\n');
        output.push_str(&self.spending.format_terminal(symbol));
        output.push('\n');

        output.push_str("Recent Transactions\n");
        output.push_str(&double_separator(56));
        output.push('\n');

        if self.recent.is_empty() {
            output.push_str("No transactions.\n");
            return output;
        }

        for txn in &self.recent {
            output.push_str(&format!(
                "{:<12} {:<28} {}{:>14}\n",
                format_date(txn.date, date_format),
                truncate(&txn.label, 28),
                txn.sign,
                txn.amount.format_with_symbol(symbol)
            ));
        }
        output.push_str(&separator(56));
        output.push('\n');

        output
    }

    /// Export the recent transactions to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Date", "Description", "Sign", "Amount"])?;
        for txn in &self.recent {
            csv.write_record([
                txn.date.format("%Y-%m-%d").to_string().as_str(),
                txn.label.as_str(),
                txn.sign.to_string().as_str(),
                &txn.amount.to_fixed(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, TransactionType};
    use rust_decimal_macros::dec;

    fn transactions(count: u32) -> Vec<Transaction> {
        (1..=count)
            .map(|day| {
                let kind = if day % 2 == 0 {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
                Transaction::new(
                    format!("t{}", day),
                    "a1",
                    kind,
                    Money::new(dec!(10)),
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                )
                .with_category(format!("c{}", day % 3), format!("Category {}", day % 3))
            })
            .collect()
    }

    #[test]
    fn test_window_limits_every_section() {
        let accounts = vec![Account::new(
            "a1",
            "Checking",
            AccountType::Checking,
            "USD",
            Money::new(dec!(500)),
        )];
        let all = transactions(14);
        let report = DashboardReport::generate(
            &accounts,
            &all,
            DEFAULT_WINDOW,
            DEFAULT_RECENT,
            CategoryGrouping::Name,
        )
        .unwrap();

        assert_eq!(report.summary.transaction_count, 10);
        assert_eq!(report.summary.total_income, Money::new(dec!(50)));
        assert_eq!(report.summary.total_expenses, Money::new(dec!(50)));
        assert_eq!(report.summary.total_balance, Money::new(dec!(500)));
        assert_eq!(report.spending.total, Money::new(dec!(50)));
        assert_eq!(report.recent.len(), 5);
        assert_eq!(report.recent[0].sign, '-');
        assert_eq!(report.recent[1].sign, '+');
        assert_eq!(report.recent[0].label, "Category 1");
    }

    #[test]
    fn test_short_input() {
        let all = transactions(3);
        let report = DashboardReport::generate(&[], &all, 10, 5, CategoryGrouping::Name).unwrap();
        assert_eq!(report.recent.len(), 3);
        assert_eq!(report.summary.transaction_count, 3);
    }

    #[test]
    fn test_empty_input() {
        let report = DashboardReport::generate(&[], &[], 10, 5, CategoryGrouping::Name).unwrap();
        assert!(report.recent.is_empty());
        assert!(report.spending.is_empty());
        assert!(report.format_terminal("$", "%Y-%m-%d").contains("No transactions."));
    }

    #[test]
    fn test_format_terminal_uses_date_format() {
        let all = transactions(1);
        let report = DashboardReport::generate(&[], &all, 10, 5, CategoryGrouping::Name).unwrap();
        let output = report.format_terminal("$", "%d/%m/%Y");
        assert!(output.contains("01/01/2024"));
        assert!(output.contains("Recent Transactions"));
    }

    #[test]
    fn test_time_format_falls_back_to_iso_dates() {
        let all = transactions(1);
        let report = DashboardReport::generate(&[], &all, 10, 5, CategoryGrouping::Name).unwrap();
        let output = report.format_terminal("$", "%H:%M");
        assert!(output.contains("2024-01-01"));
    }

    #[test]
    fn test_csv_export() {
        let all = transactions(2);
        let report = DashboardReport::generate(&[], &all, 10, 5, CategoryGrouping::Name).unwrap();

        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        assert!(csv.contains("2024-01-02,Category 2,+,10.00"));
    }
}
