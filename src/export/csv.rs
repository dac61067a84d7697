//! CSV output for snapshot entities
//!
//! Report tables export themselves through `export_csv`; this module covers
//! the raw account list.

use std::io::Write;

use crate::error::FintrackResult;
use crate::models::Account;

/// Export accounts to CSV
pub fn export_accounts_csv<W: Write>(accounts: &[Account], writer: W) -> FintrackResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Name", "Type", "Currency", "Balance"])?;
    for account in accounts {
        csv.write_record([
            account.id.as_str(),
            account.name.as_str(),
            &account.account_type.to_string(),
            account.currency.as_str(),
            &account.balance.to_fixed(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
