//! DevCatalyst: role-based task assignment and Q&A tracking core.
//!
//! This crate provides the lifecycle engines behind a mentoring portal:
//! representatives assign pointed tasks to members, members submit work and
//! raise doubts, representatives reply and resolve, and admins read
//! aggregate analytics derived from the raw collections.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task assignment, submission, and verification lifecycle
//! - [`doubt`]: Doubt raising, reply threads, and resolution
//! - [`projection`]: Read-side views and aggregate metrics
//! - [`session`]: Explicitly owned in-process cache of both collections
//! - [`roster`]: Role-to-username mapping consumed by assignment checks

pub mod doubt;
pub mod projection;
pub mod roster;
pub mod session;
pub mod task;
