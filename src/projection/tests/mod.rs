//! Unit tests for the projection views and metrics.
