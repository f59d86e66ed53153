//! Adapter implementations for the balance feed port.

pub mod memory;
pub mod stripe;

pub use memory::InMemoryBalanceFeed;
pub use stripe::StripeBalanceFeed;
