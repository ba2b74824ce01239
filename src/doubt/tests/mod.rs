//! Unit tests for the doubt module.
