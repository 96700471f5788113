//! Tab key to screen mapping

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_product::ui::create::ProductCreate;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_product_daily::ui::create::ProductDailyCreate;
use crate::domain::a003_product_daily::ui::list::ProductDailyList;
use crate::domain::a004_order::ui::create::OrderCreate;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_invoice::ui::create::InvoiceCreate;
use crate::domain::a005_invoice::ui::list::InvoiceList;
use crate::domain::a006_shift_manager::ui::list::ShiftManagerList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;

/// Screen for a tab key; unknown keys render a placeholder.
///
/// Create forms get a callback that shows the matching list afterwards.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let show_list = move |list_key: &'static str| {
        Callback::new(move |_: ()| {
            tabs_store.reopen_tab(list_key, tab_label_for_key(list_key));
        })
    };

    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        "a004_order_list" => view! { <OrderList /> }.into_any(),
        "a004_order_create" => {
            view! { <OrderCreate on_created=show_list("a004_order_list") /> }.into_any()
        }

        "a005_invoice_list" => view! { <InvoiceList /> }.into_any(),
        "a005_invoice_create" => {
            view! { <InvoiceCreate on_created=show_list("a005_invoice_list") /> }.into_any()
        }

        "a003_product_daily_list" => view! { <ProductDailyList /> }.into_any(),
        "a003_product_daily_create" => view! {
            <ProductDailyCreate on_created=show_list("a003_product_daily_list") />
        }
        .into_any(),

        "a002_product_list" => view! { <ProductList /> }.into_any(),
        "a002_product_create" => {
            view! { <ProductCreate on_created=show_list("a002_product_list") /> }.into_any()
        }

        "a001_client_list" => view! { <ClientList /> }.into_any(),
        "a006_shift_manager_list" => view! { <ShiftManagerList /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
