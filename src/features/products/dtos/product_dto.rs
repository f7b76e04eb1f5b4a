use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::products::models::{Product, ProductDraft};

/// Request body for creating or replacing a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveProductDto {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i32,

    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    /// Category to file the product under; omit or send `null` for none
    #[validate(range(min = 1, message = "Category ID must be positive"))]
    pub category_id: Option<i32>,
}

impl SaveProductDto {
    /// Trim the name so whitespace-only names fail the length rule
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self
    }

    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            price: self.price,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

/// Response DTO for product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            stock: p.stock,
            category_id: p.category_id,
            category_name: p.category_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_category_both_mean_none() {
        let missing: SaveProductDto =
            serde_json::from_value(json!({"name": "Pen", "price": 1000, "stock": 50})).unwrap();
        let null: SaveProductDto = serde_json::from_value(
            json!({"name": "Pen", "price": 1000, "stock": 50, "category_id": null}),
        )
        .unwrap();

        assert_eq!(missing.category_id, None);
        assert_eq!(null.category_id, None);
    }

    #[test]
    fn test_missing_required_field_fails_to_decode() {
        let result =
            serde_json::from_value::<SaveProductDto>(json!({"name": "Pen", "stock": 50}));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rules() {
        let dto = SaveProductDto {
            name: "   ".to_string(),
            price: -1,
            stock: -5,
            category_id: Some(0),
        }
        .normalized();

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("stock"));
        assert!(fields.contains_key("category_id"));
    }

    #[test]
    fn test_long_names_are_valid() {
        let dto = SaveProductDto {
            name: "x".repeat(1024),
            price: 1,
            stock: 1,
            category_id: None,
        }
        .normalized();

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_response_omits_absent_category() {
        let dto = ProductResponseDto::from(Product {
            id: 1,
            name: "Pen".to_string(),
            price: 1000,
            stock: 50,
            category_id: None,
            category_name: None,
        });

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            json!({"id": 1, "name": "Pen", "price": 1000, "stock": 50})
        );
    }

    #[test]
    fn test_response_keeps_category_zero_distinct_from_absent() {
        let dto = ProductResponseDto::from(Product {
            id: 2,
            name: "Ink".to_string(),
            price: 200,
            stock: 3,
            category_id: Some(0),
            category_name: Some("Misc".to_string()),
        });

        let value = serde_json::to_value(dto).unwrap();
        assert_eq!(value["category_id"], json!(0));
        assert_eq!(value["category_name"], json!("Misc"));
    }
}
