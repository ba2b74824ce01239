//! Doubt lifecycle management.
//!
//! Members raise doubts, representatives answer with threaded replies, and
//! a doubt moves one way from open to resolved. Resolution is deliberately
//! not idempotent: resolving twice is a caller error and is rejected. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
