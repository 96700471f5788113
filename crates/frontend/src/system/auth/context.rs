use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api::{Credential, CredentialSource, Transport};
use crate::shared::config::use_config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

/// Session state mirrored into browser storage
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    storage_key: &'static str,
}

impl AuthContext {
    /// Pick up a token left by a previous visit
    pub fn restore(storage_key: &'static str) -> Self {
        let access_token = storage::get_token(storage_key);
        Self {
            state: RwSignal::new(AuthState { access_token }),
            storage_key,
        }
    }

    /// Tracked; the shell re-renders on sign in / sign out
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .try_with_untracked(|s| s.access_token.clone())
            .flatten()
    }

    pub fn sign_in(&self, access_token: String) {
        storage::save_token(self.storage_key, &access_token);
        self.state.set(AuthState {
            access_token: Some(access_token),
        });
    }

    pub fn sign_out(&self) {
        storage::clear_token(self.storage_key);
        self.state.try_set(AuthState::default());
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = use_config();
    provide_context(AuthContext::restore(config.token_storage_key));

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// [`CredentialSource`] backed by the signed-in session
pub struct SessionCredentials {
    auth: AuthContext,
}

impl SessionCredentials {
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    pub fn from_context() -> Self {
        Self::new(use_auth())
    }
}

impl CredentialSource for SessionCredentials {
    fn credential(&self) -> Option<Credential> {
        self.auth.token().map(Credential::new)
    }

    fn invalidate(&self) {
        log::info!("session rejected, returning to login");
        self.auth.sign_out();
    }
}

/// Log in and store the token; the error is the text to show under the form
pub async fn do_login(
    transport: &dyn Transport,
    auth: AuthContext,
    phone_number: String,
    password: String,
) -> Result<(), String> {
    let request = LoginRequest {
        phone_number,
        password,
    };
    match api::login(transport, &request).await {
        Ok(response) => {
            auth.sign_in(response.access_token);
            log::info!("signed in");
            Ok(())
        }
        Err(err) => {
            log::warn!("login failed: {}", err);
            Err(api::login_error_message(&err))
        }
    }
}

/// Forget the stored token; the shell falls back to the login page
pub fn do_logout(auth: AuthContext) {
    auth.sign_out();
    log::info!("signed out");
}
