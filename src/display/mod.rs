//! Display formatting for terminal output
//!
//! Provides the account table and the shared helpers the report tables use.

pub mod account;
pub mod report;

pub use account::format_account_list;
