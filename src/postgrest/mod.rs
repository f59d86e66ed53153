//! Shared client for the PostgREST-style table API.
//!
//! Every table-backed context (board, pipeline, workflow) speaks to the
//! managed backend through this module: [`PostgrestClient`] executes the
//! HTTP requests and [`Query`] assembles the query-string filter syntax
//! (`select=`, `order=`, `col=eq.v`, `or=(…)`, `limit=`).

mod client;
mod query;

pub use client::{PostgrestClient, PostgrestError, PostgrestResult};
pub use query::{Order, Query};
