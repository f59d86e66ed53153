//! Stripe revenue aggregation.
//!
//! For each configured account the service sums incoming balance
//! transactions across three America/New_York time windows (today,
//! month-to-date, year-to-date), following the listing cursor until the
//! backend reports no more pages. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
