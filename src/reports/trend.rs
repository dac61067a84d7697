//! Period Trend
//!
//! Income and expense subtotals per calendar month, in the order each month
//! first appears in the input.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::error::FintrackResult;
use crate::models::snapshot::validate_transactions;
use crate::models::{Money, Transaction, TransactionType};

/// How transactions are assigned to trend buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBucketing {
    /// One bucket per month name; January 2023 and January 2024 share "Jan"
    #[default]
    MonthLabel,
    /// One bucket per calendar month, labelled "Jan 2024"
    YearMonth,
}

impl TrendBucketing {
    fn key(self, date: NaiveDate) -> (Option<i32>, u32) {
        match self {
            Self::MonthLabel => (None, date.month()),
            Self::YearMonth => (Some(date.year()), date.month()),
        }
    }

    fn label(self, date: NaiveDate) -> String {
        match self {
            Self::MonthLabel => date.format("%b").to_string(),
            Self::YearMonth => date.format("%b %Y").to_string(),
        }
    }
}

impl fmt::Display for TrendBucketing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthLabel => write!(f, "month_label"),
            Self::YearMonth => write!(f, "year_month"),
        }
    }
}

/// Subtotals for one month bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBucket {
    /// Short month label ("Jan", or "Jan 2024" when bucketing by year)
    pub label: String,
    pub income: Money,
    pub expenses: Money,
    /// Income minus expenses for the bucket
    pub net: Money,
}

impl TrendBucket {
    fn new(label: String) -> Self {
        Self {
            label,
            income: Money::zero(),
            expenses: Money::zero(),
            net: Money::zero(),
        }
    }
}

/// Period Trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodTrend {
    pub bucketing: TrendBucketing,
    pub buckets: Vec<TrendBucket>,
}

impl PeriodTrend {
    /// Bucket transactions by month
    pub fn generate(
        transactions: &[Transaction],
        bucketing: TrendBucketing,
    ) -> FintrackResult<Self> {
        validate_transactions(transactions)?;

        let mut buckets: Vec<TrendBucket> = Vec::new();
        let mut index: HashMap<(Option<i32>, u32), usize> = HashMap::new();

        for txn in transactions {
            let position = *index.entry(bucketing.key(txn.date)).or_insert_with(|| {
                buckets.push(TrendBucket::new(bucketing.label(txn.date)));
                buckets.len() - 1
            });

            let bucket = &mut buckets[position];
            match txn.transaction_type {
                TransactionType::Income => bucket.income = bucket.income.try_add(txn.amount)?,
                TransactionType::Expense => bucket.expenses = bucket.expenses.try_add(txn.amount)?,
                TransactionType::Transfer => {}
            }
        }

        for bucket in &mut buckets {
            bucket.net = bucket.income.try_sub(bucket.expenses)?;
        }

        tracing::debug!(
            transactions = transactions.len(),
            buckets = buckets.len(),
            %bucketing,
            "generated period trend"
        );

        Ok(Self { bucketing, buckets })
    }

    /// Keep only the first `limit` buckets
    pub fn truncate(&mut self, limit: usize) {
        self.buckets.truncate(limit);
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Format the trend for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Period Trend\n");
        output.push_str(&"=".repeat(62));
        output.push('\n');

        if self.buckets.is_empty() {
            output.push_str("No transactions.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:>16} {:>16} {:>16}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&"-".repeat(62));
        output.push('\n');

        for bucket in &self.buckets {
            output.push_str(&format!(
                "{:<10} {:>16} {:>16} {:>16}\n",
                bucket.label,
                bucket.income.format_with_symbol(symbol),
                bucket.expenses.format_with_symbol(symbol),
                bucket.net.format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the trend to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Month", "Income", "Expenses", "Net"])?;
        for bucket in &self.buckets {
            csv.write_record([
                bucket.label.as_str(),
                &bucket.income.to_fixed(),
                &bucket.expenses.to_fixed(),
                &bucket.net.to_fixed(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}
