//! Port contracts for doubt lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by doubt services.

pub mod repository;

pub use repository::{DoubtRepository, DoubtRepositoryError, DoubtRepositoryResult};
