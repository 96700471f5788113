use contracts::domain::common::{EntityId, Resource};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::rc::Rc;

use super::{ApiError, ApiRequest, ApiResponse, ApiResult, Credential, Transport};
use crate::shared::list_view_model::PendingEdits;

/// Typed client for one REST collection (`/client`, `/order`, ...).
///
/// Every call carries the bearer credential, DELETE included.
pub struct RestCollection<T> {
    transport: Rc<dyn Transport>,
    _item: PhantomData<T>,
}

impl<T> Clone for RestCollection<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            _item: PhantomData,
        }
    }
}

impl<T: Resource> RestCollection<T> {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self {
            transport,
            _item: PhantomData,
        }
    }

    pub fn collection_path() -> String {
        format!("/{}", T::collection_name())
    }

    pub fn item_path(id: &EntityId) -> String {
        format!(
            "/{}/{}",
            T::collection_name(),
            urlencoding::encode(&id.as_string())
        )
    }

    /// `GET /{resource}`; an empty body means an empty collection
    pub async fn list(&self, credential: &Credential) -> ApiResult<Vec<T>> {
        let request = ApiRequest::get(Self::collection_path()).with_credential(credential);
        let response = self.transport.send(request).await?.into_result()?;
        if is_empty_body(&response) {
            return Ok(Vec::new());
        }
        decode(&response)
    }

    /// `GET /{resource}/{id}`
    pub async fn get(&self, credential: &Credential, id: &EntityId) -> ApiResult<T> {
        let request = ApiRequest::get(Self::item_path(id)).with_credential(credential);
        let response = self.transport.send(request).await?.into_result()?;
        decode(&response)
    }

    /// `POST /{resource}`
    pub async fn create<B: Serialize>(&self, credential: &Credential, body: &B) -> ApiResult<()> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::post(Self::collection_path())
            .with_credential(credential)
            .with_body(body);
        self.transport.send(request).await?.into_result()?;
        Ok(())
    }

    /// `PATCH /{resource}/{id}` with only the edited fields
    pub async fn update(
        &self,
        credential: &Credential,
        id: &EntityId,
        changes: &PendingEdits,
    ) -> ApiResult<()> {
        let request = ApiRequest::patch(Self::item_path(id))
            .with_credential(credential)
            .with_body(changes.to_json());
        self.transport.send(request).await?.into_result()?;
        Ok(())
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete(&self, credential: &Credential, id: &EntityId) -> ApiResult<()> {
        let request = ApiRequest::delete(Self::item_path(id)).with_credential(credential);
        self.transport.send(request).await?.into_result()?;
        Ok(())
    }
}

fn is_empty_body(response: &ApiResponse) -> bool {
    let body = response.body.trim();
    body.is_empty() || body == "null"
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> ApiResult<T> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::api::Method;
    use async_trait::async_trait;
    use contracts::domain::a004_order::aggregate::{fields, Order};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned responses and records every request
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn respond(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
        }

        pub fn fail(&self, error: ApiError) {
            self.responses.borrow_mut().push_back(Err(error));
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
        }
    }

    fn setup() -> (Rc<ScriptedTransport>, RestCollection<Order>) {
        let transport = Rc::new(ScriptedTransport::default());
        let orders = RestCollection::<Order>::new(transport.clone());
        (transport, orders)
    }

    #[test]
    fn test_list_sends_bearer_and_decodes() {
        let (transport, orders) = setup();
        transport.respond(
            200,
            r#"[{"id":1,"date":"2024-01-02","paid":false},{"id":2,"date":"2024-01-01","paid":true}]"#,
        );

        let items = block_on(orders.list(&Credential::new("tok"))).unwrap();
        assert_eq!(items.len(), 2);

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/order");
        assert_eq!(requests[0].credential, Some(Credential::new("tok")));
    }

    #[test]
    fn test_list_treats_empty_body_as_no_data() {
        let (transport, orders) = setup();
        transport.respond(200, "");
        transport.respond(200, "null");

        assert!(block_on(orders.list(&Credential::new("tok"))).unwrap().is_empty());
        assert!(block_on(orders.list(&Credential::new("tok"))).unwrap().is_empty());
    }

    #[test]
    fn test_list_reports_malformed_body() {
        let (transport, orders) = setup();
        transport.respond(200, r#"{"unexpected":true}"#);

        let err = block_on(orders.list(&Credential::new("tok"))).unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_update_sends_only_pending_fields() {
        let (transport, orders) = setup();
        transport.respond(200, r#"{"id":7,"paid":true}"#);

        let mut changes = PendingEdits::default();
        changes.set(fields::PAID, json!(true));
        block_on(orders.update(&Credential::new("tok"), &EntityId::Int(7), &changes)).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Patch);
        assert_eq!(requests[0].path, "/order/7");
        assert_eq!(requests[0].body, Some(json!({"paid": true})));
    }

    #[test]
    fn test_delete_carries_credential_and_encodes_id() {
        let (transport, orders) = setup();
        transport.respond(200, "{}");

        block_on(orders.delete(&Credential::new("tok"), &EntityId::Text("a b".into()))).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].path, "/order/a%20b");
        assert!(requests[0].credential.is_some());
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let (transport, orders) = setup();
        transport.fail(ApiError::Network("offline".into()));

        let err = block_on(orders.delete(&Credential::new("tok"), &EntityId::Int(1))).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }

    #[test]
    fn test_create_posts_body() {
        let (transport, orders) = setup();
        transport.respond(201, r#"{"id":10}"#);

        block_on(orders.create(&Credential::new("tok"), &json!({"clientId": 1}))).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/order");
        assert_eq!(requests[0].body, Some(json!({"clientId": 1})));
    }
}
