//! Adapter implementations of the doubt persistence port.

pub mod memory;
pub mod postgres;
