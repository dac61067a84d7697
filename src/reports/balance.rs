//! Balance Summary
//!
//! Net worth across accounts plus income, expense and net-savings totals over
//! a caller-chosen window of transactions.

use serde::Serialize;
use std::io::Write;

use crate::error::FintrackResult;
use crate::models::snapshot::validate_transactions;
use crate::models::{Account, Money, Transaction, TransactionType};

/// Balance subtotal for one currency
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    /// Three-letter currency code
    pub currency: String,
    /// Sum of balances of accounts held in this currency
    pub balance: Money,
    /// Number of accounts in this currency
    pub account_count: usize,
}

/// Balance Summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    /// Sum of every account balance, whatever its currency
    pub total_balance: Money,
    /// Sum of INCOME transaction amounts
    pub total_income: Money,
    /// Sum of EXPENSE transaction amounts
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_savings: Money,
    /// Per-currency balance subtotals, in first-seen order
    pub balances_by_currency: Vec<CurrencyBalance>,
    /// Number of accounts summarized
    pub account_count: usize,
    /// Number of transactions summarized
    pub transaction_count: usize,
}

impl BalanceSummary {
    /// Summarize accounts and a window of transactions
    ///
    /// Account balances are added as-is even when currencies differ; no
    /// conversion happens here. Transfers count toward neither income nor
    /// expenses.
    pub fn generate(accounts: &[Account], transactions: &[Transaction]) -> FintrackResult<Self> {
        validate_transactions(transactions)?;

        let mut total_balance = Money::zero();
        let mut balances_by_currency: Vec<CurrencyBalance> = Vec::new();

        for account in accounts {
            total_balance = total_balance.try_add(account.balance)?;

            match balances_by_currency
                .iter_mut()
                .find(|c| c.currency == account.currency)
            {
                Some(entry) => {
                    entry.balance = entry.balance.try_add(account.balance)?;
                    entry.account_count += 1;
                }
                None => balances_by_currency.push(CurrencyBalance {
                    currency: account.currency.clone(),
                    balance: account.balance,
                    account_count: 1,
                }),
            }
        }

        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();

        for txn in transactions {
            match txn.transaction_type {
                TransactionType::Income => total_income = total_income.try_add(txn.amount)?,
                TransactionType::Expense => total_expenses = total_expenses.try_add(txn.amount)?,
                TransactionType::Transfer => {}
            }
        }

        if balances_by_currency.len() > 1 {
            tracing::debug!(
                currencies = balances_by_currency.len(),
                "total balance mixes currencies"
            );
        }

        tracing::debug!(
            accounts = accounts.len(),
            transactions = transactions.len(),
            "generated balance summary"
        );

        Ok(Self {
            total_balance,
            total_income,
            total_expenses,
            net_savings: total_income.try_sub(total_expenses)?,
            balances_by_currency,
            account_count: accounts.len(),
            transaction_count: transactions.len(),
        })
    }

    /// Whether the summarized accounts span more than one currency
    pub fn is_mixed_currency(&self) -> bool {
        self.balances_by_currency.len() > 1
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Balance Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');

        output.push_str(&format!(
            "Total Balance:   {:>20}\n",
            self.total_balance.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Income:    {:>20}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses:  {:>20}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Net Savings:     {:>20}\n",
            self.net_savings.format_with_symbol(symbol)
        ));

        if self.is_mixed_currency() {
            output.push_str("\nBy currency (not converted):\n");
            for entry in &self.balances_by_currency {
                output.push_str(&format!(
                    "  {:<6} {:>20}  ({} accounts)\n",
                    entry.currency,
                    entry.balance.format_with_symbol(""),
                    entry.account_count
                ));
            }
        }

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        csv.write_record(["Metric", "Amount"])?;
        csv.write_record(["Total Balance", &self.total_balance.to_fixed()])?;
        csv.write_record(["Total Income", &self.total_income.to_fixed()])?;
        csv.write_record(["Total Expenses", &self.total_expenses.to_fixed()])?;
        csv.write_record(["Net Savings", &self.net_savings.to_fixed()])?;

        csv.flush()?;
        Ok(())
    }
}
