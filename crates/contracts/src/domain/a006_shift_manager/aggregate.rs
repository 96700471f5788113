use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// JSON field names accepted by `PATCH /shiftmanager/{id}`
pub mod fields {
    pub const SHIFT_MANAGER: &str = "shiftManager";
}

/// Person responsible for a production shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftManager {
    pub id: EntityId,

    /// Display name of the manager
    #[serde(default)]
    pub shift_manager: String,
}

impl Resource for ShiftManager {
    fn id(&self) -> EntityId {
        self.id.clone()
    }

    fn collection_name() -> &'static str {
        "shiftmanager"
    }

    fn element_name() -> &'static str {
        "Shift manager"
    }

    fn list_name() -> &'static str {
        "Shift managers"
    }
}

/// Body of `POST /shiftmanager`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftManagerRequest {
    pub shift_manager: String,
}

impl CreateShiftManagerRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.shift_manager.trim().is_empty() {
            return Err("Shift manager name must not be empty".into());
        }
        Ok(())
    }
}
