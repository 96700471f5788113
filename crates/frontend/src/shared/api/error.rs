use contracts::domain::common::ErrorBody;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Outcome of a failed backend call, classified by what the user can do about it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No stored credential; the request was never sent
    #[error("not signed in")]
    MissingCredential,

    /// No response received
    #[error("network error: {0}")]
    Network(String),

    /// 401 / 403
    #[error("not authorized ({status})")]
    Unauthorized { status: u16, message: Option<String> },

    /// 400 / 422, one entry in `fields` per rejected field
    #[error("validation failed: {}", .fields.join("; "))]
    Validation {
        message: Option<String>,
        fields: Vec<String>,
    },

    /// Any other non-2xx status
    #[error("server error ({status})")]
    Server { status: u16, message: Option<String> },

    /// 2xx with a body that does not match the expected shape
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response by status code and JSON error body
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = ErrorBody::parse(body);
        let message = parsed.as_ref().and_then(ErrorBody::summary);

        match status {
            401 | 403 => ApiError::Unauthorized { status, message },
            400 | 422 => ApiError::Validation {
                fields: parsed.map(|b| b.messages()).unwrap_or_default(),
                message,
            },
            _ => ApiError::Server { status, message },
        }
    }

    /// Message reported by the server, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a notification: the server message, else a generic one per kind
    pub fn user_message(&self) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        match self {
            ApiError::MissingCredential => "You are not signed in. Please log in again.".into(),
            ApiError::Network(_) => "Could not reach the server. Please try again.".into(),
            ApiError::Unauthorized { .. } => "Your session has expired. Please log in again.".into(),
            ApiError::Validation { .. } => "The server rejected the submitted data.".into(),
            ApiError::Server { .. } => "An error occurred on the server.".into(),
            ApiError::Decode(_) => "Unexpected response from the server.".into(),
        }
    }

    /// The stored credential is missing or rejected; the user must log in again
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ApiError::MissingCredential | ApiError::Unauthorized { .. }
        )
    }

    /// Short tag for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "missing_credential",
            ApiError::Network(_) => "network",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Validation { .. } => "validation",
            ApiError::Server { .. } => "server",
            ApiError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_auth_statuses_require_login() {
        let err = ApiError::from_response(401, r#"{"message":"Unauthorized","statusCode":401}"#);
        assert_eq!(
            err,
            ApiError::Unauthorized {
                status: 401,
                message: Some("Unauthorized".into())
            }
        );
        assert!(err.requires_login());
        assert!(ApiError::from_response(403, "").requires_login());
    }

    #[test]
    fn test_validation_keeps_field_messages() {
        let err = ApiError::from_response(
            400,
            r#"{"message":["paid must be a boolean value"],"error":"Bad Request","statusCode":400}"#,
        );
        match &err {
            ApiError::Validation { fields, .. } => {
                assert_eq!(fields, &vec!["paid must be a boolean value".to_string()])
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.user_message(), "paid must be a boolean value");
        assert!(!err.requires_login());
    }

    #[test]
    fn test_server_error_without_body_uses_generic_message() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.user_message(), "An error occurred on the server.");
    }

    #[test]
    fn test_not_found_is_a_server_error() {
        let err = ApiError::from_response(404, r#"{"message":"Order not found"}"#);
        assert_eq!(err.kind(), "server");
        assert_eq!(err.server_message(), Some("Order not found"));
    }

    #[test]
    fn test_display_lists_fields() {
        let err = ApiError::Validation {
            message: None,
            fields: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "validation failed: a; b");
    }
}
