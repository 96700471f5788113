//! Sidebar menu, grouped by business area

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "home",
            label: "Home",
            icon: "home",
            items: vec![("d400_overview", "dashboard")],
        },
        MenuGroup {
            id: "order",
            label: "Order",
            icon: "orders",
            items: vec![("a004_order_create", "plus"), ("a004_order_list", "list")],
        },
        MenuGroup {
            id: "invoice",
            label: "Invoice",
            icon: "invoices",
            items: vec![("a005_invoice_create", "plus"), ("a005_invoice_list", "list")],
        },
        MenuGroup {
            id: "production",
            label: "Production",
            icon: "production",
            items: vec![
                ("a003_product_daily_create", "plus"),
                ("a003_product_daily_list", "list"),
                ("a002_product_create", "plus"),
                ("a002_product_list", "products"),
            ],
        },
        MenuGroup {
            id: "reference",
            label: "Reference",
            icon: "folder",
            items: vec![("a001_client_list", "clients"), ("a006_shift_manager_list", "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["home", "order", "invoice", "production", "reference"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| expanded_groups.update(|open| {
                                match open.iter().position(|g| *g == group_id) {
                                    Some(pos) => { open.remove(pos); }
                                    None => open.push(group_id),
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.is_active(key)
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
