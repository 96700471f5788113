use leptos::prelude::*;

/// Labelled form input
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the raw text on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "password", "number", "tel", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Computed fields are shown but cannot be typed into
    #[prop(optional)]
    readonly: bool,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! {
                <label class="form__label" for=input_id>{text}</label>
            })}
            <input
                id=input_id
                class=move || if readonly { "form__input form__input--readonly" } else { "form__input" }
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                readonly=readonly
                required=required
                autocomplete=move || autocomplete.get().unwrap_or_default()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
