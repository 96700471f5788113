//! Wire types shared between the dashboard frontend and the REST backend.
//!
//! Every request and response body is JSON with camelCase field names.

pub mod domain;
pub mod system;
