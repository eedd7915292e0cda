use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    ResourceId, Result, StoreError,
    store::{Entity, Repository},
};

/// In-memory repository backed by an ordered vector.
///
/// Clones share the same underlying collection, so one instance can be
/// handed to several services. Nothing survives a process restart.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    entities: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `entities`, in the given order.
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.entities.read().await.clone())
    }

    async fn find(&self, id: &ResourceId) -> Result<Option<T>> {
        let store = self.entities.read().await;
        Ok(store.iter().find(|e| e.id() == id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T> {
        let mut store = self.entities.write().await;

        if store.iter().any(|e| e.id() == entity.id()) {
            return Err(StoreError::DuplicateId {
                kind: T::KIND,
                id: entity.id().clone(),
            });
        }

        store.push(entity.clone());
        tracing::debug!(kind = T::KIND, id = %entity.id(), "entity inserted");
        Ok(entity)
    }

    async fn replace(&self, entity: T) -> Result<T> {
        let mut store = self.entities.write().await;

        let slot = store
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| StoreError::NotFound {
                kind: T::KIND,
                id: entity.id().clone(),
            })?;
        *slot = entity.clone();

        tracing::debug!(kind = T::KIND, id = %entity.id(), "entity replaced");
        Ok(entity)
    }

    async fn remove(&self, id: &ResourceId) -> Result<Option<T>> {
        let mut store = self.entities.write().await;

        let removed = store
            .iter()
            .position(|e| e.id() == id)
            .map(|index| store.remove(index));

        if removed.is_some() {
            tracing::debug!(kind = T::KIND, %id, "entity removed");
        }
        Ok(removed)
    }
}
