//! PostgREST-backed board repository.

mod models;
mod repository;

pub use repository::PostgrestBoardRepository;
