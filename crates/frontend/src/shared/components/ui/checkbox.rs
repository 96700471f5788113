use leptos::prelude::*;

/// Checkbox with an optional inline label
#[component]
pub fn Checkbox(
    /// Label shown next to the box
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Receives the new state
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Highlights a value that differs from the saved one
    #[prop(optional, into)]
    modified: Signal<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = move || {
        if modified.get() {
            "form__checkbox-wrapper form__checkbox-wrapper--modified"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            {move || label.get().map(|text| view! {
                <label class="form__checkbox-label" for=checkbox_id>{text}</label>
            })}
        </div>
    }
}
