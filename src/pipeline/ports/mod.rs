//! Port contracts for the pipeline context.

mod repository;

pub use repository::{PipelineRepository, PipelineRepositoryError, PipelineRepositoryResult};
