//! Orchestration services for the pipeline context.

mod pipeline;

pub use pipeline::{
    CreateGuestRequest, PipelineService, PipelineServiceError, PipelineServiceResult,
    UpdateGuestRequest,
};
