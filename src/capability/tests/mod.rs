//! Unit tests for the capability module.

mod service_tests;
