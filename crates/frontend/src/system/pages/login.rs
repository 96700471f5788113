use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::list_view_model::screen::use_transport;
use crate::shared::notify::{use_toasts, Notifier};
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let auth = use_auth();
    let toasts = use_toasts();
    let transport = StoredValue::new_local(use_transport());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let phone = phone_number.get_untracked();
        let secret = password.get_untracked();
        let Some(transport) = transport.try_get_value() else {
            return;
        };

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match do_login(transport.as_ref(), auth, phone, secret).await {
                Ok(()) => toasts.success("Login successful!"),
                Err(message) => {
                    toasts.error(&message);
                    error_message.try_set(Some(message));
                }
            }
            is_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Production Dashboard"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Input
                        label="Phone Number"
                        id="phonenumber"
                        input_type="tel"
                        autocomplete="username"
                        required=true
                        value=phone_number
                        on_input=Callback::new(move |v: String| phone_number.set(v))
                    />
                    <Input
                        label="Password"
                        id="password"
                        input_type="password"
                        autocomplete="current-password"
                        required=true
                        value=password
                        on_input=Callback::new(move |v: String| password.set(v))
                    />
                    <Button button_type="submit" disabled=is_loading>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
