use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

/// Successful login; any extra fields the backend sends are ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_uses_camel_case() {
        let request = LoginRequest {
            phone_number: "0911000000".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"phoneNumber": "0911000000", "password": "secret"}));
    }

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token":"abc","user":{"id":1}}"#).unwrap();
        assert_eq!(response.access_token, "abc");
    }
}
