//! Balance transactions and the revenue sum over them.

use serde::{Deserialize, Serialize};

/// Transaction kinds excluded from the revenue sum: money leaving the
/// account rather than coming in.
const EXCLUDED_KINDS: [&str; 2] = ["payout", "transfer"];

/// A balance transaction as the payments backend reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    /// Backend transaction identifier, also the pagination cursor.
    pub id: String,
    /// Amount in minor units (cents); negative for outgoing money.
    pub amount: i64,
    /// Backend-reported transaction kind (`charge`, `payout`, `transfer`, …).
    #[serde(rename = "type")]
    pub kind: String,
}

impl BalanceTransaction {
    /// True when the transaction counts toward revenue: a positive amount
    /// that is neither a payout nor a transfer.
    #[must_use]
    pub fn counts_toward_revenue(&self) -> bool {
        self.amount > 0 && !EXCLUDED_KINDS.contains(&self.kind.as_str())
    }
}

/// One page of a cursor-paginated transaction listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPage {
    /// Transactions on this page, newest first.
    pub transactions: Vec<BalanceTransaction>,
    /// Whether another page follows.
    pub has_more: bool,
}

impl TransactionPage {
    /// Returns the cursor for the next page: the last transaction's id.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.transactions.last().map(|tx| tx.id.as_str())
    }
}

/// Sums the revenue-counting transactions, in minor units.
#[must_use]
pub fn revenue_total<'a>(transactions: impl IntoIterator<Item = &'a BalanceTransaction>) -> i64 {
    transactions
        .into_iter()
        .filter(|tx| tx.counts_toward_revenue())
        .map(|tx| tx.amount)
        .sum()
}

/// Aggregated revenue per time window, in major units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueSummary {
    /// Revenue since local midnight.
    pub today: f64,
    /// Revenue since the first of the month.
    pub mtd: f64,
    /// Revenue since January 1.
    pub ytd: f64,
}
