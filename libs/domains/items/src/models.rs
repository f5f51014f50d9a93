use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Identifier assigned by the store; stable for the record's lifetime
    pub id: i64,
    /// Display name, caller-supplied
    pub name: String,
    /// Free-form classification string, caller-supplied
    pub category: String,
    /// Content-addressed filename of the form `<sha256-hex>.jpg`
    #[serde(rename = "img_filename")]
    pub image_filename: String,
}

/// DTO for submitting a new item via the add form.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    /// Path or reference to the uploaded image; only its stem is retained
    pub image: String,
}

/// An item record before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub image_filename: String,
}

/// The full item collection, ordered by insertion (id ascending).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemPage {
    pub items: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_wire_field_names() {
        let item = Item {
            id: 1,
            name: "mug".to_string(),
            category: "kitchen".to_string(),
            image_filename: "abc.jpg".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["img_filename"], "abc.jpg");
        assert!(json.get("image_filename").is_none());
    }

    #[test]
    fn create_item_rejects_empty_fields() {
        let input = CreateItem {
            name: String::new(),
            category: "kitchen".to_string(),
            image: "mug.jpg".to_string(),
        };
        assert!(input.validate().is_err());

        let input = CreateItem {
            name: "mug".to_string(),
            category: String::new(),
            image: "mug.jpg".to_string(),
        };
        assert!(input.validate().is_err());
    }
}
