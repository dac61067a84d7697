//! Budget Status
//!
//! Per-item consumption of a monthly budget, with overrun classification.

use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::display::report::{double_separator, format_bar, format_percentage, separator, truncate};
use crate::error::{FintrackError, FintrackResult};
use crate::models::snapshot::validate_budgets;
use crate::models::{Budget, BudgetId, BudgetItem, CategoryId, Money, Transaction};

/// Where an item's spent amount comes from
#[derive(Debug, Clone, Copy, Default)]
pub enum SpendSource<'a> {
    /// Use each item's `spent` as supplied
    #[default]
    Supplied,
    /// Sum EXPENSE transactions in the budget's month with the item's category
    Recomputed(&'a [Transaction]),
}

impl SpendSource<'_> {
    fn spent_for(&self, budget: &Budget, item: &BudgetItem) -> FintrackResult<Money> {
        match self {
            Self::Supplied => Ok(item.spent),
            Self::Recomputed(transactions) => Money::try_sum(
                transactions
                    .iter()
                    .filter(|t| t.is_expense() && budget.contains(t.date))
                    .filter(|t| t.category_id.as_ref() == Some(&item.category_id))
                    .map(|t| t.amount),
            ),
        }
    }

    pub fn is_recomputed(&self) -> bool {
        matches!(self, Self::Recomputed(_))
    }
}

/// Consumption of one budget item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItemStatus {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
    pub amount: Money,
    pub spent: Money,
    /// Allocation left; negative once overspent
    pub remaining: Money,
    /// `spent / amount * 100`; `None` when the allocation is zero or negative
    #[serde(with = "rust_decimal::serde::float_option")]
    pub percentage: Option<Decimal>,
    pub is_over_budget: bool,
    /// Percentage clamped to 0..=100, for progress bars
    #[serde(with = "rust_decimal::serde::float")]
    pub display_percentage: Decimal,
}

impl BudgetItemStatus {
    fn evaluate(item: &BudgetItem, spent: Money) -> FintrackResult<Self> {
        let (percentage, is_over_budget, display_percentage) = if item.amount.is_positive() {
            let pct = percentage_of(spent, item.amount)?;
            (
                Some(pct),
                pct > Decimal::ONE_HUNDRED,
                pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
            )
        } else {
            tracing::warn!(
                category = %item.category_id,
                amount = %item.amount,
                "budget item has no positive allocation"
            );
            let over = spent.is_positive();
            let display = if over {
                Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            (None, over, display)
        };

        Ok(Self {
            category_id: item.category_id.clone(),
            category_name: item.display_name().to_string(),
            category_color: item.category_color.clone(),
            amount: item.amount,
            spent,
            remaining: item.amount.try_sub(spent)?,
            percentage,
            is_over_budget,
            display_percentage,
        })
    }

    /// "spent / amount" label (e.g., "$250.00 / $200.00")
    pub fn progress_label(&self, symbol: &str) -> String {
        format!(
            "{} / {}",
            self.spent.format_with_symbol(symbol),
            self.amount.format_with_symbol(symbol)
        )
    }
}

/// `spent * 100 / amount`
fn percentage_of(spent: Money, amount: Money) -> FintrackResult<Decimal> {
    spent
        .amount()
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(amount.amount()))
        .ok_or_else(|| {
            FintrackError::Validation(format!(
                "amount overflow computing percentage of {} spent against {}",
                spent.amount(),
                amount.amount()
            ))
        })
}

/// Budget Status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_id: Option<BudgetId>,
    pub name: String,
    /// Long month and year (e.g., "January 2024")
    pub period_label: String,
    pub currency: String,
    pub total_amount: Money,
    /// Sum of item allocations
    pub total_allocated: Money,
    pub total_spent: Money,
    pub over_budget_count: usize,
    pub items: Vec<BudgetItemStatus>,
}

impl BudgetStatus {
    /// Evaluate one budget
    pub fn generate(budget: &Budget, source: SpendSource<'_>) -> FintrackResult<Self> {
        validate_budgets(std::slice::from_ref(budget))?;

        let items = budget
            .items
            .iter()
            .map(|item| BudgetItemStatus::evaluate(item, source.spent_for(budget, item)?))
            .collect::<FintrackResult<Vec<_>>>()?;

        let total_allocated = Money::try_sum(items.iter().map(|i| i.amount))?;
        let total_spent = Money::try_sum(items.iter().map(|i| i.spent))?;
        let over_budget_count = items.iter().filter(|i| i.is_over_budget).count();

        tracing::debug!(
            budget = %budget.name,
            items = items.len(),
            over = over_budget_count,
            recomputed = source.is_recomputed(),
            "generated budget status"
        );

        Ok(Self {
            budget_id: budget.id.clone(),
            name: budget.name.clone(),
            period_label: budget.period_label(),
            currency: budget.currency.clone(),
            total_amount: budget.total_amount,
            total_allocated,
            total_spent,
            over_budget_count,
            items,
        })
    }

    /// Evaluate each budget independently
    pub fn for_all(budgets: &[Budget], source: SpendSource<'_>) -> FintrackResult<Vec<Self>> {
        budgets
            .iter()
            .map(|budget| Self::generate(budget, source))
            .collect()
    }

    /// Whether any item has overrun its allocation
    pub fn has_overruns(&self) -> bool {
        self.over_budget_count > 0
    }

    /// Format the status for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} ({})\n", self.name, self.period_label));
        output.push_str(&double_separator(72));
        output.push('\n');

        if self.items.is_empty() {
            output.push_str("No budget items.\n");
        } else {
            for item in &self.items {
                let marker = if item.is_over_budget { "!" } else { " " };
                output.push_str(&format!(
                    "{}{:<20} {} {:>7}  {}\n",
                    marker,
                    truncate(&item.category_name, 20),
                    format_bar(item.display_percentage, 16),
                    format_percentage(item.percentage),
                    item.progress_label(symbol)
                ));
            }
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "Budgeted: {}   Allocated: {}   Spent: {}\n",
            self.total_amount.format_with_symbol(symbol),
            self.total_allocated.format_with_symbol(symbol),
            self.total_spent.format_with_symbol(symbol)
        ));
        if self.has_overruns() {
            output.push_str(&format!(
                "{} categories over budget\n",
                self.over_budget_count
            ));
        }

        output
    }

    /// Export the item statuses to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        export_csv_all(std::slice::from_ref(self), writer)
    }
}

/// Export several budget statuses as one CSV table
pub fn export_csv_all<W: Write>(statuses: &[BudgetStatus], writer: W) -> FintrackResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "Budget",
        "Period",
        "Category",
        "Allocated",
        "Spent",
        "Percentage",
        "Over Budget",
    ])?;

    for status in statuses {
        for item in &status.items {
            let percentage = item
                .percentage
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default();
            csv.write_record([
                status.name.as_str(),
                status.period_label.as_str(),
                item.category_name.as_str(),
                &item.amount.to_fixed(),
                &item.spent.to_fixed(),
                &percentage,
                if item.is_over_budget { "yes" } else { "no" },
            ])?;
        }
    }

    csv.flush()?;
    Ok(())
}
