use common::ResourceId;
use resource_store::Entity;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    /// Price in whole currency units, always greater than zero.
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Builds a dish from validated fields.
    pub fn new(id: ResourceId, fields: DishFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrites every mutable field. The id is left untouched.
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

impl Entity for Dish {
    const KIND: &'static str = "Dish";

    fn id(&self) -> &ResourceId {
        &self.id
    }
}

/// A dish as submitted by a client, before validation.
///
/// Every field is raw JSON so type errors are reported by the guards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DishDraft {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

/// The client-editable fields of a dish after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}
