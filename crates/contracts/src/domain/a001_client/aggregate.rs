use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// JSON field names accepted by `PATCH /client/{id}`
pub mod fields {
    pub const CLIENT_NAME: &str = "clientName";
    pub const DEBT_AMOUNT: &str = "debtAmount";
}

/// Client (customer) with an outstanding debt balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,

    #[serde(default)]
    pub client_name: String,

    /// Outstanding debt; absent when the client is embedded in another record
    #[serde(default)]
    pub debt_amount: f64,
}

impl Resource for Client {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Client"
    }

    fn list_name() -> &'static str {
        "Clients"
    }
}

/// Body of `POST /client`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub client_name: String,
    pub debt_amount: f64,
}

impl CreateClientRequest {
    /// New clients start without debt
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            debt_amount: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("Client name must not be empty".into());
        }
        if self.debt_amount < 0.0 {
            return Err("Debt amount must not be negative".into());
        }
        Ok(())
    }
}
