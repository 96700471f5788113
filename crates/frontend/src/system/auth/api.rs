use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::{ApiError, ApiRequest, ApiResult, Transport};

pub const LOGIN_PATH: &str = "/auth/login";

/// Exchange phone number and password for an access token
pub async fn login(transport: &dyn Transport, request: &LoginRequest) -> ApiResult<LoginResponse> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = transport
        .send(ApiRequest::post(LOGIN_PATH).with_body(body))
        .await?
        .into_result()?;

    let parsed: LoginResponse =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if parsed.access_token.trim().is_empty() {
        return Err(ApiError::Decode("empty access token".to_string()));
    }
    Ok(parsed)
}

/// Text shown under the login form for a failed attempt
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "An error occurred. Please try again.".to_string(),
        other => other
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| "Login failed".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::collection::tests::ScriptedTransport;
    use crate::shared::api::Method;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn request() -> LoginRequest {
        LoginRequest {
            phone_number: "0911".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn test_login_posts_credentials_without_token() {
        let transport = ScriptedTransport::default();
        transport.respond(201, r#"{"access_token":"abc"}"#);

        let response = block_on(login(&transport, &request())).unwrap();
        assert_eq!(response.access_token, "abc");

        let sent = transport.requests.borrow()[0].clone();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/auth/login");
        assert!(sent.credential.is_none());
        assert_eq!(sent.body, Some(json!({"phoneNumber": "0911", "password": "secret"})));
    }

    #[test]
    fn test_rejected_login_uses_server_message() {
        let transport = ScriptedTransport::default();
        transport.respond(401, r#"{"message":"Invalid credentials","statusCode":401}"#);

        let err = block_on(login(&transport, &request())).unwrap_err();
        assert_eq!(login_error_message(&err), "Invalid credentials");
    }

    #[test]
    fn test_login_error_fallbacks() {
        assert_eq!(
            login_error_message(&ApiError::Server { status: 500, message: None }),
            "Login failed"
        );
        assert_eq!(
            login_error_message(&ApiError::Network("offline".into())),
            "An error occurred. Please try again."
        );
    }
}
