use async_trait::async_trait;

use crate::{ResourceId, Result};

/// A value that can be kept in a [`Repository`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable resource name, used in log fields and error text.
    const KIND: &'static str;

    /// Returns the entity's unique identifier.
    fn id(&self) -> &ResourceId;
}

/// Core trait for resource storage.
///
/// A repository owns an ordered collection of entities keyed by id.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Returns every stored entity in insertion order.
    async fn list(&self) -> Result<Vec<T>>;

    /// Finds an entity by id.
    ///
    /// Returns None if no entity has that id.
    async fn find(&self, id: &ResourceId) -> Result<Option<T>>;

    /// Appends a new entity.
    ///
    /// Fails with `DuplicateId` if an entity with the same id is stored.
    async fn insert(&self, entity: T) -> Result<T>;

    /// Overwrites the stored entity sharing `entity`'s id, keeping its position.
    ///
    /// Fails with `NotFound` if no such entity is stored.
    async fn replace(&self, entity: T) -> Result<T>;

    /// Removes an entity by id, returning it if it was present.
    async fn remove(&self, id: &ResourceId) -> Result<Option<T>>;
}
