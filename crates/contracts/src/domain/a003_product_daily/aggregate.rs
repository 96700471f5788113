use crate::domain::a002_product::aggregate::Product;
use crate::domain::a006_shift_manager::aggregate::ShiftManager;
use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// JSON field names of a daily production entry
pub mod fields {
    pub const PRODUCT_ID: &str = "productId";
    pub const SHIFT_MANAGER_ID: &str = "shiftManagerId";
    pub const AMOUNT_DAILY: &str = "amountDaily";
}

/// Amount of one product made during one shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDaily {
    pub id: EntityId,

    #[serde(default)]
    pub amount_daily: f64,

    /// Production timestamp (ISO 8601)
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub product: Option<Product>,

    #[serde(default)]
    pub shift_manager: Option<ShiftManager>,
}

impl ProductDaily {
    pub fn product_name(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.product_name.as_str())
            .unwrap_or("")
    }

    pub fn shift_manager_name(&self) -> &str {
        self.shift_manager
            .as_ref()
            .map(|m| m.shift_manager.as_str())
            .unwrap_or("")
    }
}

impl Resource for ProductDaily {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn collection_name() -> &'static str {
        "product-daily"
    }

    fn element_name() -> &'static str {
        "Daily production entry"
    }

    fn list_name() -> &'static str {
        "Daily production"
    }
}

/// Body of `POST /product-daily`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDailyRequest {
    pub product_id: Option<EntityId>,
    pub shift_manager_id: Option<EntityId>,
    pub amount_daily: f64,
}

impl CreateProductDailyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_id.is_none() || self.shift_manager_id.is_none() || self.amount_daily <= 0.0
        {
            return Err("Please fill in all fields".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_references() {
        let entry: ProductDaily = serde_json::from_str(
            r#"{"id":5,"amountDaily":40,"date":"2024-03-15T14:02:26.123Z",
                "product":{"id":1,"productName":"Flour"},
                "shiftManager":{"id":2,"shiftManager":"Alemu"}}"#,
        )
        .unwrap();
        assert_eq!(entry.product_name(), "Flour");
        assert_eq!(entry.shift_manager_name(), "Alemu");
    }

    #[test]
    fn test_validate_requires_all_fields() {
        let mut request = CreateProductDailyRequest {
            product_id: Some(EntityId::Int(1)),
            shift_manager_id: None,
            amount_daily: 12.0,
        };
        assert!(request.validate().is_err());
        request.shift_manager_id = Some(EntityId::Int(2));
        assert!(request.validate().is_ok());
    }
}
