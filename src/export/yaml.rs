//! YAML output

use serde::Serialize;
use std::io::Write;

use crate::error::FintrackResult;

/// Write any report as YAML
pub fn export_yaml<T, W>(value: &T, writer: W) -> FintrackResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    serde_yaml::to_writer(writer, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use crate::reports::BalanceSummary;
    use chrono::NaiveDate;

    #[test]
    fn test_export_yaml() {
        let transactions = vec![Transaction::new(
            "t1",
            "a1",
            TransactionType::Income,
            Money::from_cents(100000),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )];
        let summary = BalanceSummary::generate(&[], &transactions).unwrap();

        let mut out = Vec::new();
        export_yaml(&summary, &mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();

        assert!(yaml.contains("totalIncome: 1000"));
        assert!(yaml.contains("transactionCount: 1"));
    }
}
