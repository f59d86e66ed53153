//! In-memory balance feed for tests.
//!
//! The page size is configurable so aggregation tests can prove the sum is
//! independent of where page boundaries fall.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::revenue::{
    domain::{BalanceTransaction, RevenueAccount, TransactionPage},
    ports::{BalanceFeed, BalanceFeedError, BalanceFeedResult},
};

#[derive(Debug, Clone)]
struct SeededTransaction {
    created: i64,
    transaction: BalanceTransaction,
}

/// Thread-safe in-memory balance feed.
#[derive(Debug, Clone)]
pub struct InMemoryBalanceFeed {
    state: Arc<RwLock<HashMap<RevenueAccount, Vec<SeededTransaction>>>>,
    page_size: usize,
}

impl Default for InMemoryBalanceFeed {
    fn default() -> Self {
        Self::with_page_size(100)
    }
}

impl InMemoryBalanceFeed {
    /// Creates an empty feed with the production page size of 100.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty feed serving pages of `page_size` transactions.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            page_size: page_size.max(1),
        }
    }

    /// Seeds a transaction with its creation timestamp.
    ///
    /// # Panics
    ///
    /// Panics when the state lock is poisoned; test-only usage.
    pub fn seed(&self, account: RevenueAccount, created: i64, transaction: BalanceTransaction) {
        let mut state = self.state.write().expect("balance feed lock poisoned");
        state
            .entry(account)
            .or_default()
            .push(SeededTransaction {
                created,
                transaction,
            });
    }
}

#[async_trait]
impl BalanceFeed for InMemoryBalanceFeed {
    async fn page(
        &self,
        account: RevenueAccount,
        created_gte: i64,
        starting_after: Option<&str>,
    ) -> BalanceFeedResult<TransactionPage> {
        let state = self.state.read().map_err(|err| {
            BalanceFeedError::transport(std::io::Error::other(err.to_string()))
        })?;

        let matching: Vec<&SeededTransaction> = state
            .get(&account)
            .map(|seeded| {
                seeded
                    .iter()
                    .filter(|entry| entry.created >= created_gte)
                    .collect()
            })
            .unwrap_or_default();

        let skip = starting_after.map_or(0, |cursor| {
            matching
                .iter()
                .position(|entry| entry.transaction.id == cursor)
                .map_or(matching.len(), |index| index + 1)
        });

        let remaining = matching.len().saturating_sub(skip);
        let transactions: Vec<BalanceTransaction> = matching
            .iter()
            .skip(skip)
            .take(self.page_size)
            .map(|entry| entry.transaction.clone())
            .collect();

        Ok(TransactionPage {
            transactions,
            has_more: remaining > self.page_size,
        })
    }
}
