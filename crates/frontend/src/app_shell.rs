//! Root components: the auth gate and the main layout behind it

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Sidebar and tabs; restores the active tab from the URL (`?active=...`)
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    tabs_store.init_router_integration();

    view! { <Shell left=|| view! { <Sidebar /> }.into_any() /> }
}

/// Login page for anonymous visitors, the dashboard otherwise
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
