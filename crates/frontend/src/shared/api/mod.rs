//! REST client for the dashboard backend.
//!
//! - `transport` - raw request/response exchange (browser `fetch` via gloo-net)
//! - `collection` - typed client for one `/{resource}` collection
//! - `error` - classification of failed calls
//! - `credential` - bearer credential and its source

pub mod collection;
pub mod credential;
pub mod error;
pub mod transport;

pub use collection::RestCollection;
pub use credential::{Credential, CredentialSource};
pub use error::{ApiError, ApiResult};
pub use transport::{ApiRequest, ApiResponse, BrowserTransport, Method, Transport};
