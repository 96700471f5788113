use crate::domain::a001_client::aggregate::Client;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// JSON field names of an invoice
pub mod fields {
    pub const CLIENT_ID: &str = "clientId";
    pub const PRODUCT_ID: &str = "productId";
    pub const AMOUNT_IN_KG: &str = "amountInKg";
    pub const PRICE_PER_ITEM: &str = "pricePerItem";
    pub const TOTAL_PRICE: &str = "totalPrice";
    pub const REMARK: &str = "remark";
}

/// Purchase invoice (raw material bought from a client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: EntityId,

    /// Invoice timestamp (ISO 8601)
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub amount_in_kg: f64,

    #[serde(default)]
    pub price_per_item: f64,

    /// amountInKg × pricePerItem, computed by the form
    #[serde(default)]
    pub total_price: f64,

    #[serde(default)]
    pub remark: Option<String>,

    #[serde(default)]
    pub client: Option<Client>,

    #[serde(default)]
    pub product: Option<Product>,
}

impl Invoice {
    pub fn client_name(&self) -> &str {
        self.client
            .as_ref()
            .map(|c| c.client_name.as_str())
            .unwrap_or("")
    }

    pub fn client_id(&self) -> Option<&EntityId> {
        self.client.as_ref().map(|c| &c.id)
    }

    pub fn product_name(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.product_name.as_str())
            .unwrap_or("")
    }
}

impl Resource for Invoice {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

/// Body of `POST /invoice`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    pub client_id: Option<EntityId>,
    pub product_id: Option<EntityId>,
    pub amount_in_kg: f64,
    pub price_per_item: f64,
    pub total_price: f64,
    pub remark: String,
}

impl Default for CreateInvoiceRequest {
    fn default() -> Self {
        Self {
            client_id: None,
            product_id: None,
            amount_in_kg: 0.0,
            price_per_item: 0.0,
            total_price: 0.0,
            remark: String::new(),
        }
    }
}

impl CreateInvoiceRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.is_none() {
            return Err("Select a client".into());
        }
        if self.product_id.is_none() {
            return Err("Select a product".into());
        }
        if self.amount_in_kg <= 0.0 || self.price_per_item < 0.0 {
            return Err("Amount and price must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_format() {
        let request = CreateInvoiceRequest {
            client_id: Some(EntityId::Int(3)),
            product_id: Some(EntityId::Int(1)),
            amount_in_kg: 50.0,
            price_per_item: 30.0,
            total_price: 1500.0,
            remark: "cash".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["clientId"], 3);
        assert_eq!(json["pricePerItem"], 30.0);
        assert_eq!(json["totalPrice"], 1500.0);
    }

    #[test]
    fn test_client_accessors_without_client() {
        let invoice: Invoice = serde_json::from_str(r#"{"id":9,"date":"2024-01-01"}"#).unwrap();
        assert_eq!(invoice.client_name(), "");
        assert!(invoice.client_id().is_none());
    }
}
