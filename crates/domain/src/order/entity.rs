use common::ResourceId;
use resource_store::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::OrderStatus;

/// A delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: ResourceId,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

impl Order {
    /// Builds an order from validated fields.
    pub fn new(id: ResourceId, fields: OrderFields, status: OrderStatus) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status,
            dishes: fields.dishes,
        }
    }

    /// Returns the total number of dish portions ordered.
    pub fn portion_count(&self) -> u64 {
        self.dishes.iter().map(|d| d.quantity).sum()
    }
}

impl Entity for Order {
    const KIND: &'static str = "Order";

    fn id(&self) -> &ResourceId {
        &self.id
    }
}

/// One line of an order: a dish reference and how many of it.
///
/// The dish reference fields are kept exactly as the client sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// An order as submitted by a client, before validation.
///
/// Every field is raw JSON so type errors are reported by the guards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

/// The client-supplied fields of an order after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}
