use serde::{Deserialize, Serialize};

/// JSON body returned by the backend on non-2xx responses.
///
/// `message` is a plain string for most failures and an array of
/// per-field messages for request validation failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    /// Parse a response body; anything that is not an error object yields `None`
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Messages joined into one line
    pub fn summary(&self) -> Option<String> {
        match &self.message {
            Some(ErrorMessage::One(message)) if !message.trim().is_empty() => {
                Some(message.clone())
            }
            Some(ErrorMessage::Many(messages)) if !messages.is_empty() => Some(messages.join("; ")),
            _ => self.error.clone().filter(|e| !e.trim().is_empty()),
        }
    }

    /// Individual messages (one per invalid field for validation failures)
    pub fn messages(&self) -> Vec<String> {
        match &self.message {
            Some(ErrorMessage::One(message)) => vec![message.clone()],
            Some(ErrorMessage::Many(messages)) => messages.clone(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_message() {
        let body = ErrorBody::parse(r#"{"message":"Invalid credentials","statusCode":401}"#).unwrap();
        assert_eq!(body.summary().as_deref(), Some("Invalid credentials"));
        assert_eq!(body.status_code, Some(401));
    }

    #[test]
    fn test_parse_field_messages() {
        let body = ErrorBody::parse(
            r#"{"message":["clientName should not be empty","debtAmount must be a number"],"error":"Bad Request"}"#,
        )
        .unwrap();
        assert_eq!(body.messages().len(), 2);
        assert_eq!(
            body.summary().as_deref(),
            Some("clientName should not be empty; debtAmount must be a number")
        );
    }

    #[test]
    fn test_falls_back_to_error_field() {
        let body = ErrorBody::parse(r#"{"error":"Internal Server Error"}"#).unwrap();
        assert_eq!(body.summary().as_deref(), Some("Internal Server Error"));
    }

    #[test]
    fn test_non_json_is_none() {
        assert!(ErrorBody::parse("<html>502</html>").is_none());
    }
}
