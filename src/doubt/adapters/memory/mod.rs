//! In-memory adapter for doubt persistence.

mod doubt;

pub use doubt::InMemoryDoubtRepository;
