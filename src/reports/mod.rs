//! Aggregation engine
//!
//! Pure, stateless views derived from a snapshot: balance summary, monthly
//! trend, category breakdown, budget status and the dashboard that combines
//! the first two with a recent-transactions list. Nothing here performs I/O
//! other than writing to a caller-supplied CSV writer.

pub mod balance;
pub mod breakdown;
pub mod budget_status;
pub mod dashboard;
pub mod trend;

pub use balance::{BalanceSummary, CurrencyBalance};
pub use breakdown::{CategoryBreakdown, CategoryGrouping, CategoryTotal};
pub use budget_status::{BudgetItemStatus, BudgetStatus, SpendSource};
pub use dashboard::{DashboardReport, RecentTransaction};
pub use trend::{PeriodTrend, TrendBucket, TrendBucketing};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_reports_can_cross_threads() {
        assert_send_sync::<BalanceSummary>();
        assert_send_sync::<PeriodTrend>();
        assert_send_sync::<CategoryBreakdown>();
        assert_send_sync::<BudgetStatus>();
        assert_send_sync::<DashboardReport>();
        assert_send_sync::<SpendSource<'static>>();
    }
}
