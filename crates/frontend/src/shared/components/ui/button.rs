use leptos::prelude::*;

/// Button with variants ("primary", "secondary", "ghost", "danger") and sizes ("md", "sm")
#[component]
pub fn Button(
    /// Visual variant, "primary" by default
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Size, "md" by default
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// "button" unless given; forms pass "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let variant = match variant.get().as_deref() {
            Some("secondary") => "button--secondary",
            Some("ghost") => "button--ghost",
            Some("danger") => "button--danger",
            _ => "button--primary",
        };
        let size = match size.get().as_deref() {
            Some("sm") => " button--small",
            _ => "",
        };
        let extra = class.get().unwrap_or_default();
        format!("button {}{} {}", variant, size, extra)
    };

    view! {
        <button
            type=move || button_type.get().unwrap_or_else(|| "button".to_string())
            class=classes
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
