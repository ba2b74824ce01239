//! Unit tests for the task module.

mod domain_tests;
mod gateway_timeout_tests;
mod service_tests;
