use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// JSON field names accepted by `PATCH /product/{id}`
pub mod fields {
    pub const PRODUCT_NAME: &str = "productName";
    pub const PRODUCT_IN_STOCK: &str = "productInStock";
}

/// Product with its current stock level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,

    #[serde(default)]
    pub product_name: String,

    #[serde(default)]
    pub product_in_stock: i64,

    #[serde(default)]
    pub date_created: Option<String>,

    #[serde(default)]
    pub date_updated: Option<String>,
}

impl Resource for Product {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

/// Body of `POST /product`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_name: String,
    pub product_in_stock: i64,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("Please fill in all fields correctly".into());
        }
        if self.product_in_stock < 0 {
            return Err("Stock must not be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let product: Product = serde_json::from_str(
            r#"{"id":1,"productName":"Flour","productInStock":120,"dateCreated":"2024-01-01T08:00:00Z","dateUpdated":null}"#,
        )
        .unwrap();
        assert_eq!(product.product_name, "Flour");
        assert_eq!(product.product_in_stock, 120);
        assert!(product.date_updated.is_none());
    }

    #[test]
    fn test_validate_stock() {
        let mut request = CreateProductRequest {
            product_name: "Bran".into(),
            product_in_stock: -1,
        };
        assert!(request.validate().is_err());
        request.product_in_stock = 0;
        assert!(request.validate().is_ok());
    }
}
