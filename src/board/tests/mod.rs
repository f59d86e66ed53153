//! Unit tests for the board module.

mod domain_tests;
mod service_tests;
