//! Dish service running guard chains against a repository.

use common::{ResourceId, next_id};
use resource_store::Repository;

use super::{Dish, DishDraft, DishError, ensure_dish_id_matches, validate_dish};
use crate::error::DomainError;

/// Service for managing dishes.
///
/// Dishes are listed, created, read and updated. They are never deleted.
pub struct DishService<R: Repository<Dish>> {
    repo: R,
}

impl<R: Repository<Dish>> DishService<R> {
    /// Creates a new dish service over the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns every dish.
    pub async fn list(&self) -> Result<Vec<Dish>, DomainError> {
        Ok(self.repo.list().await?)
    }

    /// Validates a draft and stores it as a new dish with a fresh id.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create(&self, draft: DishDraft) -> Result<Dish, DomainError> {
        let fields = validate_dish(&draft)?;

        let dish = self.repo.insert(Dish::new(next_id(), fields)).await?;

        metrics::counter!("dishes_created_total").increment(1);
        tracing::info!(dish_id = %dish.id, "dish created");
        Ok(dish)
    }

    /// Looks up a dish, failing with `NotFound` if it does not exist.
    pub async fn read(&self, id: &ResourceId) -> Result<Dish, DomainError> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| DishError::NotFound(id.clone()).into())
    }

    /// Replaces a dish's fields.
    ///
    /// Guards run in order: the dish exists, the draft carries every field,
    /// and any body id matches the route id.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update(&self, id: &ResourceId, draft: DishDraft) -> Result<Dish, DomainError> {
        let mut dish = self.read(id).await?;
        let fields = validate_dish(&draft)?;
        ensure_dish_id_matches(&draft, id)?;

        dish.apply(fields);
        let dish = self.repo.replace(dish).await?;

        tracing::info!(dish_id = %dish.id, "dish updated");
        Ok(dish)
    }
}
