use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::ev;
use leptos::prelude::*;

/// One entry of the tab strip
#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let on_click = move |_| tabs_store.activate_tab(&key.get_value());
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div class="tab" class:active=move || key.with_value(|k| tabs_store.is_active(k)) on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>"\u{00d7}"</button>
        </div>
    }
}

/// Tab strip plus the content of every opened tab
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let opened = move || tabs_store.tabs.with(|set| set.tabs().to_vec());

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="tabs-bar">
                <For each=opened key=|tab| (tab.key.clone(), tab.serial) children=|tab| view! { <TabHandle tab=tab /> } />
            </div>
            <div class="tab-content">
                <For
                    each=opened
                    key=|tab| (tab.key.clone(), tab.serial)
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
