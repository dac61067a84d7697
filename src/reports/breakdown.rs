//! Category Breakdown
//!
//! Expense totals grouped by category, in first-seen order.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

use crate::display::report::{format_percentage, truncate};
use crate::error::FintrackResult;
use crate::models::snapshot::validate_transactions;
use crate::models::{Money, Transaction};

/// How expense transactions are grouped into breakdown entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGrouping {
    /// Group by displayed category name; same-named categories collapse
    #[default]
    Name,
    /// Group by category id, labelled with the first name seen
    Id,
}

impl fmt::Display for CategoryGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Id => write!(f, "id"),
        }
    }
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category_name: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Color of the first transaction in the group, if it carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategoryTotal {
    /// Percentage of `total` this entry represents, rounded to one decimal
    pub fn share_of(&self, total: Money) -> Option<Decimal> {
        if total.is_zero() {
            return None;
        }
        let share = self
            .total
            .amount()
            .checked_div(total.amount())?
            .checked_mul(Decimal::ONE_HUNDRED)?;
        Some(share.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Category Breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub grouping: CategoryGrouping,
    pub entries: Vec<CategoryTotal>,
    /// Sum of every entry
    pub total: Money,
}

impl CategoryBreakdown {
    /// Group categorized expenses
    ///
    /// Income, transfers and expenses without a category name are left out.
    pub fn generate(
        transactions: &[Transaction],
        grouping: CategoryGrouping,
    ) -> FintrackResult<Self> {
        validate_transactions(transactions)?;

        let mut entries: Vec<CategoryTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut skipped = 0usize;

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let Some(name) = txn.category_label() else {
                skipped += 1;
                continue;
            };

            let key = match grouping {
                CategoryGrouping::Name => name,
                CategoryGrouping::Id => match &txn.category_id {
                    Some(id) => id.as_str(),
                    None => {
                        skipped += 1;
                        continue;
                    }
                },
            };

            let position = *index.entry(key).or_insert_with(|| {
                entries.push(CategoryTotal {
                    category_name: name.to_string(),
                    total: Money::zero(),
                    transaction_count: 0,
                    color: txn.category_color.clone(),
                });
                entries.len() - 1
            });

            let entry = &mut entries[position];
            entry.total = entry.total.try_add(txn.amount)?;
            entry.transaction_count += 1;
        }

        tracing::debug!(
            transactions = transactions.len(),
            categories = entries.len(),
            uncategorized = skipped,
            %grouping,
            "generated category breakdown"
        );

        let total = Money::try_sum(entries.iter().map(|e| e.total))?;

        Ok(Self {
            grouping,
            entries,
            total,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No categorized expenses.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>16} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        let total = self.total;
        for entry in &self.entries {
            let share = format_percentage(entry.share_of(total));
            output.push_str(&format!(
                "{:<24} {:>16} {:>6} {:>7}\n",
                truncate(&entry.category_name, 24),
                entry.total.format_with_symbol(symbol),
                entry.transaction_count,
                share
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>16}\n",
            "Total",
            total.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Category", "Amount", "Transactions", "Color"])?;
        for entry in &self.entries {
            csv.write_record([
                entry.category_name.as_str(),
                &entry.total.to_fixed(),
                &entry.transaction_count.to_string(),
                entry.color.as_deref().unwrap_or(""),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}
