use serde::{de::DeserializeOwned, Serialize};

use super::EntityId;

/// A record type served by one REST collection endpoint
/// (`GET /{collection}`, `PATCH /{collection}/{id}`, ...).
pub trait Resource: Clone + Serialize + DeserializeOwned + 'static {
    /// Unique identifier, stable across fetches
    fn id(&self) -> EntityId;

    /// Path segment of the collection endpoint
    fn collection_name() -> &'static str;

    /// Human readable name of one record
    fn element_name() -> &'static str;

    /// Human readable name of the collection
    fn list_name() -> &'static str;
}
