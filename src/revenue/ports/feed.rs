//! Feed port for cursor-paginated balance transactions.

use crate::revenue::domain::{RevenueAccount, TransactionPage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for balance feed operations.
pub type BalanceFeedResult<T> = Result<T, BalanceFeedError>;

/// Balance transaction listing contract (Stripe in production).
#[async_trait]
pub trait BalanceFeed: Send + Sync {
    /// Fetches one listing page of transactions created at or after
    /// `created_gte`, resuming after the `starting_after` cursor when one
    /// is given.
    async fn page(
        &self,
        account: RevenueAccount,
        created_gte: i64,
        starting_after: Option<&str>,
    ) -> BalanceFeedResult<TransactionPage>;
}

/// Errors returned by balance feed implementations.
#[derive(Debug, Clone, Error)]
pub enum BalanceFeedError {
    /// No API key is configured for the account.
    #[error("Missing API key for account: {0}")]
    UnconfiguredAccount(RevenueAccount),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error message.
        message: String,
    },

    /// The request could not be sent or the response not read.
    #[error("balance feed transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl BalanceFeedError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
