//! Request guards for dishes.

use common::ResourceId;

use super::{DishDraft, DishError, DishFields};
use crate::fields::{non_empty_text, positive_integer, supplied_id};

/// Checks that a draft carries every dish field.
///
/// Fields are checked in the order name, description, price, image_url and
/// the first violation is returned.
pub fn validate_dish(draft: &DishDraft) -> Result<DishFields, DishError> {
    let name = non_empty_text(draft.name.as_ref()).ok_or(DishError::MissingField("name"))?;
    let description = non_empty_text(draft.description.as_ref())
        .ok_or(DishError::MissingField("description"))?;
    let price = draft
        .price
        .as_ref()
        .ok_or(DishError::MissingField("price"))
        .and_then(|value| positive_integer(value).ok_or(DishError::InvalidPrice))?;
    let image_url =
        non_empty_text(draft.image_url.as_ref()).ok_or(DishError::MissingField("image_url"))?;

    Ok(DishFields {
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: image_url.to_string(),
    })
}

/// Rejects a draft whose `id` is supplied and differs from the route id.
pub fn ensure_dish_id_matches(draft: &DishDraft, route_id: &ResourceId) -> Result<(), DishError> {
    match supplied_id(draft.id.as_ref()) {
        Some(body_id) if route_id != body_id.as_str() => Err(DishError::IdMismatch {
            body_id,
            route_id: route_id.clone(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn draft(value: serde_json::Value) -> DishDraft {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> serde_json::Value {
        json!({
            "name": "Dolcelatte and chickpea spaghetti",
            "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            "price": 19,
            "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg"
        })
    }

    fn without(field: &str) -> serde_json::Value {
        let mut value = valid();
        value.as_object_mut().unwrap().remove(field);
        value
    }

    fn with(field: &str, field_value: serde_json::Value) -> serde_json::Value {
        let mut value = valid();
        value[field] = field_value;
        value
    }

    #[test]
    fn test_valid_draft_passes() {
        let fields = validate_dish(&draft(valid())).unwrap();
        assert_eq!(fields.name, "Dolcelatte and chickpea spaghetti");
        assert_eq!(fields.price, 19);
    }

    #[test]
    fn test_missing_text_fields_are_named() {
        for field in ["name", "description", "image_url"] {
            let err = validate_dish(&draft(without(field))).unwrap_err();
            assert_eq!(err, DishError::MissingField(field));
            assert!(err.to_string().contains(field));

            let err = validate_dish(&draft(with(field, json!("")))).unwrap_err();
            assert_eq!(err, DishError::MissingField(field));
        }
    }

    #[test]
    fn test_missing_price() {
        let err = validate_dish(&draft(without("price"))).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a price");

        let err = validate_dish(&draft(with("price", json!(null)))).unwrap_err();
        assert_eq!(err, DishError::MissingField("price"));
    }

    #[test]
    fn test_price_must_be_positive_integer() {
        for price in [json!(0), json!(-1), json!(2.5), json!("17")] {
            let err = validate_dish(&draft(with("price", price))).unwrap_err();
            assert_eq!(err, DishError::InvalidPrice);
            assert!(err.to_string().contains("price"));
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let err = validate_dish(&DishDraft::default()).unwrap_err();
        assert_eq!(err, DishError::MissingField("name"));
    }

    #[test]
    fn test_id_match() {
        let route_id = ResourceId::from("d351db2b49b69679504652ea1cf38241");

        assert!(ensure_dish_id_matches(&draft(valid()), &route_id).is_ok());
        assert!(ensure_dish_id_matches(&draft(with("id", json!(""))), &route_id).is_ok());
        assert!(
            ensure_dish_id_matches(
                &draft(with("id", json!("d351db2b49b69679504652ea1cf38241"))),
                &route_id
            )
            .is_ok()
        );

        let err = ensure_dish_id_matches(&draft(with("id", json!("other"))), &route_id).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The id of other does not match d351db2b49b69679504652ea1cf38241"
        );
    }
}
