//! Port contracts for the revenue context.

mod feed;

pub use feed::{BalanceFeed, BalanceFeedError, BalanceFeedResult};
