//! Orchestration services for the revenue context.

mod summary;

pub use summary::{RevenueService, RevenueServiceError, RevenueServiceResult};
