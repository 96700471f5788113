//! Top bar: sidebar toggle, application title and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();
    let logout = move |_| {
        ctx.close_all();
        do_logout(auth);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Production Dashboard"</span>
            </div>
            <div class="top-header__actions">
                <button class="button button--primary" on:click=logout title="Logout">
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </div>
    }
}
