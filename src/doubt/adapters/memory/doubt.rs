//! In-memory repository for doubt lifecycle tests and store-less sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::doubt::{
    domain::{Doubt, DoubtId, Reply},
    ports::{DoubtRepository, DoubtRepositoryError, DoubtRepositoryResult},
};

/// Thread-safe in-memory doubt repository.
///
/// Listing preserves insertion order, matching the ordering contract of the
/// durable store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDoubtRepository {
    state: Arc<RwLock<InMemoryDoubtState>>,
}

#[derive(Debug, Default)]
struct InMemoryDoubtState {
    doubts: HashMap<DoubtId, Doubt>,
    order: Vec<DoubtId>,
}

impl InMemoryDoubtRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> DoubtRepositoryError {
    DoubtRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DoubtRepository for InMemoryDoubtRepository {
    async fn insert(&self, doubt: &Doubt) -> DoubtRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.doubts.contains_key(doubt.id()) {
            return Err(DoubtRepositoryError::DuplicateDoubt(doubt.id().clone()));
        }
        state.order.push(doubt.id().clone());
        state.doubts.insert(doubt.id().clone(), doubt.clone());
        Ok(())
    }

    async fn update(&self, doubt: &Doubt) -> DoubtRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.doubts.contains_key(doubt.id()) {
            return Err(DoubtRepositoryError::NotFound(doubt.id().clone()));
        }
        state.doubts.insert(doubt.id().clone(), doubt.clone());
        Ok(())
    }

    async fn append_reply(&self, id: &DoubtId, reply: &Reply) -> DoubtRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let doubt = state
            .doubts
            .get_mut(id)
            .ok_or_else(|| DoubtRepositoryError::NotFound(id.clone()))?;
        doubt.append_reply(reply.clone());
        Ok(())
    }

    async fn list(&self) -> DoubtRepositoryResult<Vec<Doubt>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.doubts.get(id).cloned())
            .collect())
    }
}
