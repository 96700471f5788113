//! Common types and traits for all resources

pub mod aggregate_id;
pub mod aggregate_root;
pub mod error_body;

// Re-exports
pub use aggregate_id::EntityId;
pub use aggregate_root::Resource;
pub use error_body::{ErrorBody, ErrorMessage};
