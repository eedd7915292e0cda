//! Order status lifecycle.

use serde::{Deserialize, Serialize};

use super::OrderError;

/// The status of an order in its lifecycle.
///
/// State transitions through the API:
/// ```text
/// pending ◄──► preparing ◄──► out-for-delivery
///    ▲                              ▲
///    └──────────────────────────────┘
///
/// delivered (terminal, never entered or left via update)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Order has been placed; the only status from which it can be deleted.
    #[default]
    Pending,

    /// The kitchen is working on the order.
    Preparing,

    /// The order has left the kitchen.
    OutForDelivery,

    /// The order reached the customer (terminal state).
    Delivered,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Returns true if this is a terminal state (no further changes possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Returns true if an order in this status may be deleted.
    pub fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Returns true if an update may move an order from this status to `next`.
    ///
    /// Non-terminal statuses move freely among themselves; nothing enters or
    /// leaves `delivered`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        !self.is_terminal() && !next.is_terminal()
    }

    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(OrderError::InvalidStatus)
    }
}
