use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Keeps an opened screen mounted and hides it while another tab is active.
///
/// The screen is created once per open; closing the tab disposes it.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let key_for_active = key.clone();
    let is_active = move || tabs_store.is_active(&key_for_active);

    log::debug!("tab mounted: '{}'", key);
    let key_for_cleanup = key.clone();
    on_cleanup(move || log::debug!("tab disposed: '{}'", key_for_cleanup));

    let content = render_tab_content(&key, tabs_store);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !is_active() data-tab-key=key>
            {content}
        </div>
    }
}
