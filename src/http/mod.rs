//! The browser-facing JSON surface under `/api/*`.
//!
//! Handlers are stateless request/response translators: they parse the
//! body, call one service, and map the outcome onto the wire. Every
//! failure becomes `{ "error": string }` with a status matching the
//! failure class — 400 for validation, 403 for a path escape, the
//! upstream status or 500 otherwise.

mod error;
mod handlers;
mod router;
mod state;

pub use error::ApiError;
pub use router::router;
pub use state::{
    AppState, DynBalanceFeed, DynBoardRepository, DynClock, DynFileStore, DynPipelineRepository,
    DynWorkflowRepository,
};
