//! Account display formatting
//!
//! Formats accounts as a terminal table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::error::FintrackResult;
use crate::models::{Account, Money};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[Account], symbol: &str) -> FintrackResult<String> {
    if accounts.is_empty() {
        return Ok("No accounts found.".to_string());
    }

    let rows = accounts.iter().map(|account| AccountRow {
        name: account.name.clone(),
        account_type: if account.is_liability() {
            format!("{} (liability)", account.account_type)
        } else {
            account.account_type.to_string()
        },
        currency: account.currency.clone(),
        balance: account.balance.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Columns::last(), Alignment::right());

    let total = Money::try_sum(accounts.iter().map(|a| a.balance))?;
    Ok(format!(
        "{}\nTotal: {} across {} accounts\n",
        table,
        total.format_with_symbol(symbol),
        accounts.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccountType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(&[], "$").unwrap(), "No accounts found.");
    }

    #[test]
    fn test_table_contents() {
        let accounts = vec![
            Account::new(
                "a1",
                "Checking",
                AccountType::Checking,
                "USD",
                Money::new(dec!(500)),
            ),
            Account::new(
                "a2",
                "Visa",
                AccountType::Credit,
                "USD",
                Money::new(dec!(-120)),
            ),
        ];
        let output = format_account_list(&accounts, "$").unwrap();

        assert!(output.contains("Name"));
        assert!(output.contains("Checking"));
        assert!(output.contains("(liability)"));
        assert!(output.contains("-$120.00"));
        assert!(output.contains("Total: $380.00 across 2 accounts"));
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let huge = Money::new(rust_decimal::Decimal::MAX);
        let accounts = vec![
            Account::new("a1", "One", AccountType::Savings, "USD", huge),
            Account::new("a2", "Two", AccountType::Savings, "USD", huge),
        ];
        assert!(format_account_list(&accounts, "$")
            .unwrap_err()
            .is_validation());
    }
}
