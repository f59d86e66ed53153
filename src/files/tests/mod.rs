//! Unit tests for the files module.

mod domain_tests;
