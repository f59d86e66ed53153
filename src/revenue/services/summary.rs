//! Service layer for windowed revenue aggregation.

use crate::revenue::{
    domain::{
        ParseAccountError, RevenueAccount, RevenueSummary, RevenueWindow, revenue_total,
    },
    ports::{BalanceFeed, BalanceFeedError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for revenue operations.
#[derive(Debug, Error)]
pub enum RevenueServiceError {
    /// The requested account name is unknown.
    #[error(transparent)]
    UnknownAccount(#[from] ParseAccountError),
    /// The balance feed failed.
    #[error(transparent)]
    Feed(#[from] BalanceFeedError),
}

/// Result type for revenue service operations.
pub type RevenueServiceResult<T> = Result<T, RevenueServiceError>;

/// Windowed revenue aggregation service.
pub struct RevenueService<F, C>
where
    F: BalanceFeed + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    feed: Arc<F>,
    clock: Arc<C>,
}

impl<F, C> RevenueService<F, C>
where
    F: BalanceFeed + ?Sized,
    C: Clock + Send + Sync + ?Sized,
{
    /// Creates a new revenue service.
    #[must_use]
    pub const fn new(feed: Arc<F>, clock: Arc<C>) -> Self {
        Self { feed, clock }
    }

    /// Sums revenue for the named account across the three dashboard
    /// windows, in major units.
    ///
    /// # Errors
    ///
    /// Returns [`RevenueServiceError::UnknownAccount`] for an unknown
    /// account name and [`RevenueServiceError::Feed`] when the backend
    /// fails.
    pub async fn summarize(&self, account: &str) -> RevenueServiceResult<RevenueSummary> {
        let account = RevenueAccount::try_from(account)?;
        let now = self.clock.utc();

        let (today, mtd, ytd) = tokio::join!(
            self.window_total(account, RevenueWindow::Today.start_unix(now)),
            self.window_total(account, RevenueWindow::MonthToDate.start_unix(now)),
            self.window_total(account, RevenueWindow::YearToDate.start_unix(now)),
        );

        Ok(RevenueSummary {
            today: minor_to_major(today?),
            mtd: minor_to_major(mtd?),
            ytd: minor_to_major(ytd?),
        })
    }

    /// Follows the listing cursor from `created_gte`, summing
    /// revenue-counting transactions in minor units.
    async fn window_total(
        &self,
        account: RevenueAccount,
        created_gte: i64,
    ) -> RevenueServiceResult<i64> {
        let mut total = 0_i64;
        let mut cursor: Option<String> = None;

        loop {
            let page = self
                .feed
                .page(account, created_gte, cursor.as_deref())
                .await?;
            total += revenue_total(&page.transactions);

            if !page.has_more {
                break;
            }
            match page.next_cursor() {
                Some(next) => cursor = Some(next.to_owned()),
                // A page that claims more data but carries no rows cannot
                // advance the cursor; stop rather than refetch forever.
                None => break,
            }
        }

        Ok(total)
    }
}

fn minor_to_major(minor: i64) -> f64 {
    minor as f64 / 100.0
}
