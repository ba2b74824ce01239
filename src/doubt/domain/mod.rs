//! Domain model for doubt lifecycle management.
//!
//! A doubt is a member-raised question with an append-only reply thread
//! and a monotonic open-to-resolved flag.

mod doubt;
mod error;
mod ids;
mod reply;

pub use doubt::{Doubt, PersistedDoubtData};
pub use error::DoubtDomainError;
pub use ids::{DoubtId, ParseDoubtIdError};
pub use reply::Reply;
