//! Stripe balance-transaction feed.

use crate::revenue::{
    domain::{BalanceTransaction, RevenueAccount, TransactionPage},
    ports::{BalanceFeed, BalanceFeedError, BalanceFeedResult},
};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

const BALANCE_TRANSACTIONS_URL: &str = "https://api.stripe.com/v1/balance_transactions";

/// Listing page size; the aggregation follows the cursor until the backend
/// reports no more pages.
const PAGE_LIMIT: u32 = 100;

/// Stripe-backed balance feed holding one static API key per account.
#[derive(Debug, Clone)]
pub struct StripeBalanceFeed {
    http: reqwest::Client,
    keys: HashMap<RevenueAccount, String>,
}

impl StripeBalanceFeed {
    /// Creates a feed from the configured per-account API keys.
    #[must_use]
    pub fn new(http: reqwest::Client, keys: HashMap<RevenueAccount, String>) -> Self {
        Self { http, keys }
    }
}

#[derive(Debug, Deserialize)]
struct StripeListPage {
    data: Vec<StripeTransaction>,
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct StripeTransaction {
    id: String,
    amount: i64,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: Option<StripeErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

#[async_trait]
impl BalanceFeed for StripeBalanceFeed {
    async fn page(
        &self,
        account: RevenueAccount,
        created_gte: i64,
        starting_after: Option<&str>,
    ) -> BalanceFeedResult<TransactionPage> {
        let api_key = self
            .keys
            .get(&account)
            .ok_or(BalanceFeedError::UnconfiguredAccount(account))?;

        let mut params: Vec<(&str, String)> = vec![
            ("created[gte]", created_gte.to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        if let Some(cursor) = starting_after {
            params.push(("starting_after", cursor.to_owned()));
        }

        let response = self
            .http
            .get(BALANCE_TRANSACTIONS_URL)
            .bearer_auth(api_key)
            .query(&params)
            .send()
            .await
            .map_err(BalanceFeedError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| "Failed to fetch from Stripe".to_owned());
            return Err(BalanceFeedError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let page: StripeListPage = response.json().await.map_err(BalanceFeedError::transport)?;
        Ok(TransactionPage {
            transactions: page
                .data
                .into_iter()
                .map(|tx| BalanceTransaction {
                    id: tx.id,
                    amount: tx.amount,
                    kind: tx.kind,
                })
                .collect(),
            has_more: page.has_more,
        })
    }
}
