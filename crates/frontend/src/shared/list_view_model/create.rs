use super::controller::{MutationOutcome, ScreenServices};
use super::PendingEdits;
use crate::shared::api::{ApiResult, Credential, RestCollection};
use async_trait::async_trait;
use contracts::domain::common::Resource;
use serde::{de::DeserializeOwned, Serialize};

/// POST side of a create form
#[async_trait(?Send)]
pub trait CreateApi<B> {
    async fn create(&self, credential: &Credential, body: &B) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: Resource, B: Serialize> CreateApi<B> for RestCollection<T> {
    async fn create(&self, credential: &Credential, body: &B) -> ApiResult<()> {
        RestCollection::create(self, credential, body).await
    }
}

/// Decode and validate a form draft, then POST it.
///
/// Invalid drafts are reported without a request; `element` names the record
/// in the notification ("Order created successfully").
pub async fn submit_create<B, V>(
    api: &dyn CreateApi<B>,
    services: &ScreenServices,
    element: &str,
    draft: &PendingEdits,
    validate: V,
) -> MutationOutcome
where
    B: DeserializeOwned,
    V: Fn(&B) -> Result<(), String>,
{
    let body: B = match draft.decode() {
        Ok(body) => body,
        Err(detail) => {
            log::debug!("{} draft rejected: {}", element, detail);
            let message = "Please fill in all fields correctly".to_string();
            services.notifier.error(&message);
            return MutationOutcome::Rejected(message);
        }
    };
    if let Err(message) = validate(&body) {
        services.notifier.error(&message);
        return MutationOutcome::Rejected(message);
    }

    let result = match services.require_credential() {
        Ok(credential) => api.create(&credential, &body).await,
        Err(err) => Err(err),
    };
    match result {
        Ok(()) => {
            log::info!("{} created", element);
            services
                .notifier
                .success(&format!("{} created successfully", element));
            MutationOutcome::Applied
        }
        Err(err) => {
            let context = format!("Failed to create {}", element.to_lowercase());
            services.report(&context, &err);
            MutationOutcome::Failed(err)
        }
    }
}
