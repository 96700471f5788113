use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::{provide_config, DashboardConfig};
use crate::shared::notify::{provide_toasts, Toaster};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_env();
    log::info!("dashboard api at {}", config.api_base_url);

    provide_toasts(config.notification_ttl_ms);
    provide_config(config);
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <Toaster />
    }
}
