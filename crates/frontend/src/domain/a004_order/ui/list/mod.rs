pub mod state;

use self::state::{by_client, by_date, new_model, OrderSort, CLIENT_FILTER, DATE_FILTER};
use crate::domain::a001_client::ui::list::state::client_options;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::{LoadState, PageHeader};
use crate::shared::components::table::{format_money, format_quantity};
use crate::shared::components::ui::{Button, Checkbox, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_view_model::{use_list_screen, use_reference_list};
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a004_order::aggregate::fields;
use leptos::prelude::*;
use serde_json::Value;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let screen = use_list_screen(new_model());
    let client_filter = RwSignal::new(String::new());
    let date_filter = RwSignal::new(String::new());
    let sort = RwSignal::new(OrderSort::DateDesc);

    let client_list = use_reference_list::<Client>();
    let clients = Signal::derive(move || client_list.with(|list| client_options(list)));
    let sort_options = Signal::derive(|| {
        OrderSort::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_client = Callback::new(move |value: String| {
        screen.set_filter(CLIENT_FILTER, by_client(&value));
        client_filter.set(value);
    });
    let on_sort = Callback::new(move |key: String| {
        if let Some(selected) = OrderSort::from_key(&key) {
            sort.set(selected);
            screen.set_sort(Some(selected.sort_key()));
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Orders" subtitle=Signal::derive(move || format!("{} shown", screen.row_count()))>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || screen.is_loading())
                    on_click=Callback::new(move |_| screen.load())
                >
                    {icon("list")}
                    "Refresh"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Select
                    label="Client"
                    value=client_filter
                    options=clients
                    empty_label="All clients"
                    on_change=on_client
                />
                <DateInput
                    label="Date"
                    value=date_filter
                    on_change=move |value: String| {
                        screen.set_filter(DATE_FILTER, by_date(&value));
                        date_filter.set(value);
                    }
                />
                <Select
                    label="Sort by"
                    value=Signal::derive(move || sort.get().key().to_string())
                    options=sort_options
                    on_change=on_sort
                />
            </div>

            <LoadState
                loading=Signal::derive(move || screen.is_first_load())
                error=Signal::derive(move || screen.error_message())
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Date"</th>
                                <th class="table__header-cell">"Client"</th>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell table__header-cell--right">"Bags"</th>
                                <th class="table__header-cell table__header-cell--right">"Kg"</th>
                                <th class="table__header-cell table__header-cell--right">"Price per bag"</th>
                                <th class="table__header-cell table__header-cell--right">"Total"</th>
                                <th class="table__header-cell">"Remark"</th>
                                <th class="table__header-cell">"Paid"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || screen.rows().into_iter().map(|order| {
                                let id = order.id.clone();
                                let paid = {
                                    let id = id.clone();
                                    Signal::derive(move || {
                                        screen
                                            .value(&id, fields::PAID)
                                            .and_then(|v| v.as_bool())
                                            .unwrap_or(false)
                                    })
                                };
                                let dirty = {
                                    let id = id.clone();
                                    Signal::derive(move || screen.is_dirty(&id))
                                };
                                let on_paid = {
                                    let id = id.clone();
                                    Callback::new(move |checked: bool| {
                                        screen.edit(&id, fields::PAID, Value::Bool(checked))
                                    })
                                };
                                let on_save = {
                                    let id = id.clone();
                                    Callback::new(move |_| screen.save(id.clone()))
                                };
                                let on_delete = Callback::new(move |_| screen.remove(id.clone()));

                                view! {
                                    <tr class="table__row" class:table__row--modified=move || dirty.get()>
                                        <td class="table__cell">{format_datetime(&order.date)}</td>
                                        <td class="table__cell">{order.client_name().to_string()}</td>
                                        <td class="table__cell">{order.product_name().to_string()}</td>
                                        <td class="table__cell table__cell--right">{format_quantity(order.amount_in_bag)}</td>
                                        <td class="table__cell table__cell--right">{format_quantity(order.amount_in_kg)}</td>
                                        <td class="table__cell table__cell--right">{format_money(order.price_per_bag)}</td>
                                        <td class="table__cell table__cell--right">{format_money(order.price_in_total)}</td>
                                        <td class="table__cell">{order.remark.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">
                                            <Checkbox checked=paid modified=dirty on_change=on_paid />
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <Button size="sm" disabled=Signal::derive(move || !dirty.get()) on_click=on_save>
                                                "Save"
                                            </Button>
                                            <Button size="sm" variant="danger" on_click=on_delete>
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </LoadState>
        </div>
    }
}
