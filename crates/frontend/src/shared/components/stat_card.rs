use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline figure of the overview dashboard
#[component]
pub fn StatCard(
    label: &'static str,
    /// Name understood by [`icon`]
    icon_name: &'static str,
    /// Already formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional, into)]
    tone: MaybeProp<String>,
) -> impl IntoView {
    let class = move || match tone.get().as_deref() {
        Some("success") => "stat-card stat-card--success",
        Some("error") => "stat-card stat-card--error",
        _ => "stat-card",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "\u{2014}".to_string())}
                </div>
            </div>
        </div>
    }
}
