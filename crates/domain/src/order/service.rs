//! Order service running guard chains against a repository.

use common::{ResourceId, next_id};
use resource_store::Repository;

use super::{
    Order, OrderDraft, OrderError, ensure_order_id_matches, ensure_pending, initial_status,
    validate_order, validate_status_change,
};
use crate::error::DomainError;

/// Service for managing orders.
///
/// Each method applies its guards in a fixed order; the first failure is
/// returned and nothing is written.
pub struct OrderService<R: Repository<Order>> {
    repo: R,
}

impl<R: Repository<Order>> OrderService<R> {
    /// Creates a new order service over the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Returns every order.
    pub async fn list(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.repo.list().await?)
    }

    /// Validates a draft and stores it as a new order with a fresh id.
    ///
    /// After the body checks the status is resolved: a missing or empty
    /// status starts the order `pending`, a known status is kept, and an
    /// unknown or non-string status is rejected with
    /// [`OrderError::InvalidStatus`].
    #[tracing::instrument(skip(self, draft))]
    pub async fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let fields = validate_order(&draft)?;
        let status = initial_status(&draft)?;

        let order = self.repo.insert(Order::new(next_id(), fields, status)).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            order_id = %order.id,
            status = %order.status,
            portions = order.portion_count(),
            "order created"
        );
        Ok(order)
    }

    /// Looks up an order, failing with `NotFound` if it does not exist.
    pub async fn read(&self, id: &ResourceId) -> Result<Order, DomainError> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.clone()).into())
    }

    /// Replaces an order's delivery details and status. Dishes are kept.
    ///
    /// Guards run in order: the order exists, the draft is a valid order,
    /// the status change is allowed, and any body id matches.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update(&self, id: &ResourceId, draft: OrderDraft) -> Result<Order, DomainError> {
        let mut order = self.read(id).await?;
        let fields = validate_order(&draft)?;
        let status = validate_status_change(order.status, &draft)?;
        ensure_order_id_matches(&draft, &order.id)?;

        let previous = order.status;
        order.deliver_to = fields.deliver_to;
        order.mobile_number = fields.mobile_number;
        order.status = status;
        let order = self.repo.replace(order).await?;

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(order_id = %order.id, from = %previous, to = %order.status, "order updated");
        Ok(order)
    }

    /// Deletes a pending order.
    ///
    /// Guards run in order: the order exists, and it is pending.
    #[tracing::instrument(skip(self))]
    pub async fn destroy(&self, id: &ResourceId) -> Result<(), DomainError> {
        let order = self.read(id).await?;
        ensure_pending(&order)?;

        self.repo.remove(&order.id).await?;

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(order_id = %order.id, "order deleted");
        Ok(())
    }
}
