use crate::domain::a001_client::aggregate::Client;
use crate::domain::a002_product::aggregate::Product;
use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// JSON field names of an order
pub mod fields {
    pub const CLIENT_ID: &str = "clientId";
    pub const PRODUCT_ID: &str = "productId";
    pub const AMOUNT_IN_BAG: &str = "amountInBag";
    pub const AMOUNT_IN_KG: &str = "amountInKg";
    pub const PRICE_PER_BAG: &str = "pricePerBag";
    pub const PRICE_IN_TOTAL: &str = "priceInTotal";
    pub const REMARK: &str = "remark";
    pub const PAID: &str = "paid";
}

/// Sales order placed by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,

    #[serde(default)]
    pub client: Option<Client>,

    #[serde(default)]
    pub product: Option<Product>,

    #[serde(default)]
    pub amount_in_bag: f64,

    #[serde(default)]
    pub amount_in_kg: f64,

    /// Order timestamp (ISO 8601)
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub price_per_bag: f64,

    /// amountInBag × pricePerBag, computed by the form
    #[serde(default)]
    pub price_in_total: f64,

    #[serde(default)]
    pub remark: Option<String>,

    #[serde(default)]
    pub paid: bool,
}

impl Order {
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

    /// Revenue of the order as the dashboard counts it
    pub fn earnings(&self) -> f64 {
        self.price_per_bag * self.amount_in_bag
    }
}

impl Resource for Order {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

/// Body of `POST /order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub client_id: Option<EntityId>,
    pub product_id: Option<EntityId>,
    pub amount_in_bag: f64,
    pub amount_in_kg: f64,
    pub price_per_bag: f64,
    pub price_in_total: f64,
    pub remark: String,
    pub paid: bool,
}

impl Default for CreateOrderRequest {
    fn default() -> Self {
        Self {
            client_id: None,
            product_id: None,
            amount_in_bag: 100.0,
            amount_in_kg: 40.0,
            price_per_bag: 2000.0,
            price_in_total: 200000.0,
            remark: String::new(),
            paid: false,
        }
    }
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.is_none() {
            return Err("Select a client".into());
        }
        if self.product_id.is_none() {
            return Err("Select a product".into());
        }
        if self.amount_in_bag <= 0.0 || self.price_per_bag < 0.0 {
            return Err("Amount and price must be positive".into());
        }
        Ok(())
    }
}
