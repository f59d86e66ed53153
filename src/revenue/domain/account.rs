//! The fixed set of Stripe accounts on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A Stripe account tracked on the revenue dashboard. Each account's API
/// key comes from its own environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueAccount {
    /// The Landmodo marketplace account.
    Landmodo,
    /// The Investor Ninjas account.
    Investorninjas,
    /// The ST account.
    St,
}

impl RevenueAccount {
    /// Every dashboard account, in display order.
    pub const ALL: [Self; 3] = [Self::Landmodo, Self::Investorninjas, Self::St];

    /// Returns the canonical request/response representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landmodo => "landmodo",
            Self::Investorninjas => "investorninjas",
            Self::St => "st",
        }
    }

    /// Returns the environment variable holding this account's API key.
    #[must_use]
    pub const fn key_var(self) -> &'static str {
        match self {
            Self::Landmodo => "STRIPE_LANDMODO_KEY",
            Self::Investorninjas => "STRIPE_INVESTORNINJAS_KEY",
            Self::St => "STRIPE_ST_KEY",
        }
    }
}

impl fmt::Display for RevenueAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RevenueAccount {
    type Error = ParseAccountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "landmodo" => Ok(Self::Landmodo),
            "investorninjas" => Ok(Self::Investorninjas),
            "st" => Ok(Self::St),
            _ => Err(ParseAccountError(value.to_owned())),
        }
    }
}

/// Error returned while parsing account names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid account: {0}")]
pub struct ParseAccountError(pub String);
