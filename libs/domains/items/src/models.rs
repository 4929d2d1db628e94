use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::InvalidItemId;

/// Store-assigned item identifier.
///
/// The in-memory store hands out sequence numbers, PostgreSQL uses UUIDv7.
/// Serialized as a bare number or UUID string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(untagged)]
pub enum ItemId {
    Sequence(i64),
    Uuid(Uuid),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Sequence(n) => write!(f, "{}", n),
            ItemId::Uuid(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for ItemId {
    type Err = InvalidItemId;

    /// Integers win over UUIDs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(ItemId::Sequence(n));
        }
        Uuid::parse_str(s)
            .map(ItemId::Uuid)
            .map_err(|_| InvalidItemId(s.to_string()))
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Sequence(n)
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        ItemId::Uuid(id)
    }
}

/// Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// `null` when not set
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// DTO for creating a new item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

/// DTO for a partial update.
///
/// Absent fields are left alone. `null` is treated as absent for `name`,
/// `price` and `quantity`; for `description` it clears the value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

/// Distinguishes an explicit `null` from a missing field.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Body returned by `DELETE /items/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteItemResponse {
    pub message: String,
    pub deleted_item: Item,
}

impl DeleteItemResponse {
    pub fn new(deleted_item: Item) -> Self {
        Self {
            message: "Item deleted successfully".to_string(),
            deleted_item,
        }
    }
}

impl Item {
    pub fn new(id: ItemId, input: CreateItem) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }

    /// Apply updates from UpdateItem DTO
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Item {
        Item {
            id: ItemId::Sequence(1),
            name: "Widget".to_string(),
            description: Some("blue".to_string()),
            price: 9.99,
            quantity: 5,
        }
    }

    #[test]
    fn test_item_id_parse() {
        assert_eq!("42".parse::<ItemId>(), Ok(ItemId::Sequence(42)));
        assert_eq!("-1".parse::<ItemId>(), Ok(ItemId::Sequence(-1)));

        let uuid = Uuid::now_v7();
        assert_eq!(uuid.to_string().parse::<ItemId>(), Ok(ItemId::Uuid(uuid)));

        assert_eq!(
            "abc".parse::<ItemId>(),
            Err(InvalidItemId("abc".to_string()))
        );
    }

    #[test]
    fn test_item_id_json() {
        let uuid = Uuid::now_v7();
        assert_eq!(serde_json::to_value(ItemId::Sequence(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(ItemId::Uuid(uuid)).unwrap(),
            json!(uuid.to_string())
        );
        assert_eq!(
            serde_json::from_value::<ItemId>(json!(uuid.to_string())).unwrap(),
            ItemId::Uuid(uuid)
        );
    }

    #[test]
    fn test_missing_description_serializes_as_null() {
        let item = Item {
            description: None,
            ..widget()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Widget", "description": null, "price": 9.99, "quantity": 5})
        );
    }

    #[test]
    fn test_create_item_ignores_unknown_fields() {
        let input: CreateItem = serde_json::from_value(json!({
            "name": "Widget",
            "price": 9.99,
            "quantity": 5,
            "colour": "blue"
        }))
        .unwrap();

        assert_eq!(input.description, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_item_rejects_empty_name() {
        let input: CreateItem =
            serde_json::from_value(json!({"name": "", "price": 1.0, "quantity": 1})).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_description_absent_null_and_value() {
        let absent: UpdateItem = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.description, None);
        assert!(absent.is_empty());

        let cleared: UpdateItem = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateItem = serde_json::from_value(json!({"description": "red"})).unwrap();
        assert_eq!(set.description, Some(Some("red".to_string())));
    }

    #[test]
    fn test_update_null_on_required_fields_is_ignored() {
        let update: UpdateItem =
            serde_json::from_value(json!({"name": null, "price": null, "quantity": null}))
                .unwrap();
        assert!(update.is_empty());

        let mut item = widget();
        item.apply_update(update);
        assert_eq!(item, widget());
    }

    #[test]
    fn test_apply_update_overwrites_with_zero() {
        let mut item = widget();
        item.apply_update(UpdateItem {
            price: Some(0.0),
            quantity: Some(0),
            ..Default::default()
        });

        assert_eq!(item.price, 0.0);
        assert_eq!(item.quantity, 0);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description.as_deref(), Some("blue"));
    }

    #[test]
    fn test_apply_update_clears_description() {
        let mut item = widget();
        item.apply_update(UpdateItem {
            description: Some(None),
            ..Default::default()
        });
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let update = UpdateItem {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
