//! Request guards for orders.

use common::ResourceId;
use serde_json::Value;

use super::{Order, OrderDish, OrderDraft, OrderError, OrderFields, OrderStatus};
use crate::fields::{non_empty_text, positive_integer, supplied_id};

/// Checks that a draft carries a delivery address, a phone number, and at
/// least one dish with a valid quantity.
///
/// Used for both create and update. The first violation is returned.
pub fn validate_order(draft: &OrderDraft) -> Result<OrderFields, OrderError> {
    let deliver_to =
        non_empty_text(draft.deliver_to.as_ref()).ok_or(OrderError::MissingField("deliverTo"))?;
    let mobile_number = non_empty_text(draft.mobile_number.as_ref())
        .ok_or(OrderError::MissingField("mobileNumber"))?;

    let entries = match &draft.dishes {
        None | Some(Value::Bool(false)) => return Err(OrderError::MissingField("dishes")),
        Some(Value::String(s)) if s.is_empty() => return Err(OrderError::MissingField("dishes")),
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        Some(_) => return Err(OrderError::NoDishes),
    };

    let dishes = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| order_dish(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderFields {
        deliver_to: deliver_to.to_string(),
        mobile_number: mobile_number.to_string(),
        dishes,
    })
}

fn order_dish(index: usize, entry: &Value) -> Result<OrderDish, OrderError> {
    let invalid = || OrderError::InvalidQuantity { index };

    let Value::Object(map) = entry else {
        return Err(invalid());
    };
    let quantity = map
        .get("quantity")
        .and_then(positive_integer)
        .ok_or_else(invalid)?;

    let mut details = map.clone();
    details.remove("quantity");
    Ok(OrderDish { quantity, details })
}

/// Resolves the status a new order starts with.
///
/// No status means `pending`; a supplied status must name a known status.
pub fn initial_status(draft: &OrderDraft) -> Result<OrderStatus, OrderError> {
    match &draft.status {
        None => Ok(OrderStatus::Pending),
        Some(Value::String(s)) if s.is_empty() => Ok(OrderStatus::Pending),
        Some(Value::String(s)) => s.parse(),
        Some(_) => Err(OrderError::InvalidStatus),
    }
}

/// Checks that an update may move an order from `current` to the status
/// requested in the draft, returning the new status.
///
/// Checks run in this order:
/// 1. a stored `delivered` order cannot be changed at all
/// 2. the draft must carry a status
/// 3. the requested status cannot be `delivered`
/// 4. the requested status must be a known status
pub fn validate_status_change(
    current: OrderStatus,
    draft: &OrderDraft,
) -> Result<OrderStatus, OrderError> {
    if current.is_terminal() {
        return Err(OrderError::DeliveredImmutable);
    }

    let requested = non_empty_text(draft.status.as_ref()).ok_or(OrderError::InvalidStatus)?;
    if requested == OrderStatus::Delivered.as_str() {
        return Err(OrderError::DeliveredImmutable);
    }

    let next: OrderStatus = requested.parse()?;
    if !current.can_transition_to(next) {
        return Err(OrderError::DeliveredImmutable);
    }
    Ok(next)
}

/// Rejects a draft whose `id` is supplied and differs from the stored order's id.
pub fn ensure_order_id_matches(draft: &OrderDraft, stored_id: &ResourceId) -> Result<(), OrderError> {
    match supplied_id(draft.id.as_ref()) {
        Some(body_id) if stored_id != body_id.as_str() => Err(OrderError::IdMismatch {
            stored_id: stored_id.clone(),
            body_id,
        }),
        _ => Ok(()),
    }
}

/// Rejects deletion of an order that is not `pending`.
pub fn ensure_pending(order: &Order) -> Result<(), OrderError> {
    if order.status.is_deletable() {
        Ok(())
    } else {
        Err(OrderError::NotPending)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn draft(value: Value) -> OrderDraft {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> Value {
        json!({
            "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
            "mobileNumber": "(505) 143-3369",
            "status": "pending",
            "dishes": [{
                "id": "d351db2b49b69679504652ea1cf38241",
                "name": "Dolcelatte and chickpea spaghetti",
                "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
                "price": 19,
                "quantity": 2
            }]
        })
    }

    fn with(field: &str, field_value: Value) -> Value {
        let mut value = valid();
        value[field] = field_value;
        value
    }

    fn stored(status: OrderStatus) -> Order {
        let fields = validate_order(&draft(valid())).unwrap();
        Order::new(ResourceId::from("f6069a542257054114138301947672ba"), fields, status)
    }

    #[test]
    fn test_valid_order_keeps_dish_details() {
        let fields = validate_order(&draft(valid())).unwrap();
        assert_eq!(fields.dishes.len(), 1);
        assert_eq!(fields.dishes[0].quantity, 2);
        assert_eq!(fields.dishes[0].details.get("price"), Some(&json!(19)));
        assert!(!fields.dishes[0].details.contains_key("quantity"));
    }

    #[test]
    fn test_quantity_beyond_u32_is_accepted() {
        let dishes = json!([{ "id": "a", "quantity": 4_294_967_296_u64 }]);
        let fields = validate_order(&draft(with("dishes", dishes))).unwrap();
        assert_eq!(fields.dishes[0].quantity, 4_294_967_296);
    }

    #[test]
    fn test_missing_fields_are_named() {
        for field in ["deliverTo", "mobileNumber", "dishes"] {
            let mut value = valid();
            value.as_object_mut().unwrap().remove(field);

            let err = validate_order(&draft(value)).unwrap_err();
            assert_eq!(err, OrderError::MissingField(field));
            assert_eq!(err.to_string(), format!("Order must include a {field}"));
        }
    }

    #[test]
    fn test_dishes_must_be_non_empty_list() {
        for dishes in [json!([]), json!("pasta"), json!({ "quantity": 1 })] {
            let err = validate_order(&draft(with("dishes", dishes))).unwrap_err();
            assert_eq!(err.to_string(), "Order must include at least one dish");
        }
    }

    #[test]
    fn test_quantity_errors_name_the_dish_index() {
        for quantity in [json!(0), json!(-3), json!(1.5), json!("2"), json!(null)] {
            let dishes = json!([{ "id": "a", "quantity": 1 }, { "id": "b", "quantity": quantity }]);
            let err = validate_order(&draft(with("dishes", dishes))).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Dish 1 must have a quantity that is an integer greater than zero."
            );
        }

        let dishes = json!([{ "id": "a" }]);
        let err = validate_order(&draft(with("dishes", dishes))).unwrap_err();
        assert_eq!(err, OrderError::InvalidQuantity { index: 0 });
    }

    #[test]
    fn test_initial_status() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("status");
        assert_eq!(initial_status(&draft(value)).unwrap(), OrderStatus::Pending);

        let value = with("status", json!("preparing"));
        assert_eq!(initial_status(&draft(value)).unwrap(), OrderStatus::Preparing);

        let value = with("status", json!("lost"));
        assert_eq!(initial_status(&draft(value)).unwrap_err(), OrderError::InvalidStatus);
    }

    #[test]
    fn test_status_change_allowed() {
        let value = with("status", json!("out-for-delivery"));
        let next = validate_status_change(OrderStatus::Preparing, &draft(value)).unwrap();
        assert_eq!(next, OrderStatus::OutForDelivery);
    }

    #[test]
    fn test_status_change_precedence() {
        // stored delivered wins over everything
        let mut value = valid();
        value.as_object_mut().unwrap().remove("status");
        let err = validate_status_change(OrderStatus::Delivered, &draft(value.clone())).unwrap_err();
        assert_eq!(err, OrderError::DeliveredImmutable);

        let err = validate_status_change(OrderStatus::Pending, &draft(value)).unwrap_err();
        assert_eq!(err, OrderError::InvalidStatus);

        let value = with("status", json!(""));
        let err = validate_status_change(OrderStatus::Pending, &draft(value)).unwrap_err();
        assert_eq!(err, OrderError::InvalidStatus);

        let value = with("status", json!("delivered"));
        let err = validate_status_change(OrderStatus::Pending, &draft(value)).unwrap_err();
        assert_eq!(err.to_string(), "A delivered order cannot be changed");

        let value = with("status", json!("invalid-status"));
        let err = validate_status_change(OrderStatus::Pending, &draft(value)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }

    #[test]
    fn test_id_match() {
        let stored_id = ResourceId::from("f6069a542257054114138301947672ba");

        assert!(ensure_order_id_matches(&draft(valid()), &stored_id).is_ok());
        assert!(ensure_order_id_matches(&draft(with("id", json!(null))), &stored_id).is_ok());

        let err = ensure_order_id_matches(&draft(with("id", json!("other"))), &stored_id)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order id does not match route id. Order: f6069a542257054114138301947672ba, Route: other"
        );
    }

    #[test]
    fn test_only_pending_orders_pass_delete_guard() {
        assert!(ensure_pending(&stored(OrderStatus::Pending)).is_ok());
        for status in [
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            assert_eq!(
                ensure_pending(&stored(status)).unwrap_err().to_string(),
                "An order cannot be deleted unless it is pending"
            );
        }
    }
}
