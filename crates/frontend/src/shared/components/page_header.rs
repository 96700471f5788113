use leptos::prelude::*;

/// Title row of a screen with an action area on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    /// Secondary line under the title (counts, totals)
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Action buttons on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </div>
    }
}

/// Spinner, error text or the content, depending on the screen state
#[component]
pub fn LoadState(
    #[prop(into)]
    loading: Signal<bool>,
    /// Shown above the content when set
    #[prop(into)]
    error: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="page__loading"><thaw::Spinner /></div> }
        >
            {children()}
        </Show>
    }
}
