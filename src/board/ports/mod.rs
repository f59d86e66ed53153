//! Port contracts for the board context.

mod repository;

pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
