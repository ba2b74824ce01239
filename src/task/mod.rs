//! Task lifecycle management.
//!
//! Representatives assign pointed tasks to members, members hand work in,
//! and representatives verify submissions. The status machine is linear,
//! Pending → In Progress → Submitted → Completed (with submission allowed
//! straight from Pending), and Completed is terminal. The module follows
//! hexagonal architecture:
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
