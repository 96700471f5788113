use leptos::prelude::*;

/// Native date picker; the value is "yyyy-mm-dd" and "" means no date
#[component]
pub fn DateInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|text| view! { <label class="form__label">{text}</label> })}
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=value
                on:input=move |ev| on_change(event_target_value(&ev))
            />
        </div>
    }
}
