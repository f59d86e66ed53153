//! Domain model for revenue aggregation.

mod account;
mod transaction;
mod window;

pub use account::{ParseAccountError, RevenueAccount};
pub use transaction::{BalanceTransaction, RevenueSummary, TransactionPage, revenue_total};
pub use window::{REVENUE_TIMEZONE, RevenueWindow};
