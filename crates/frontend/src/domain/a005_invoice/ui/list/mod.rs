pub mod state;

use self::state::{by_client, by_date, new_model, InvoiceSort, CLIENT_FILTER, DATE_FILTER};
use crate::domain::a001_client::ui::list::state::client_options;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::{LoadState, PageHeader};
use crate::shared::components::table::{format_money, format_quantity};
use crate::shared::components::ui::{Button, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_view_model::{use_list_screen, use_reference_list};
use contracts::domain::a001_client::aggregate::Client;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let screen = use_list_screen(new_model());
    let clients = use_reference_list::<Client>();
    let client_filter = RwSignal::new(String::new());
    let date_filter = RwSignal::new(String::new());
    let sort = RwSignal::new(InvoiceSort::DateDesc);

    let client_choices = Signal::derive(move || clients.with(|list| client_options(list)));
    let sort_options = Signal::derive(|| {
        InvoiceSort::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title="Invoices" subtitle=Signal::derive(move || format!("{} shown", screen.row_count()))>
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
                    options=client_choices
                    empty_label="All clients"
                    on_change=Callback::new(move |value: String| {
                        screen.set_filter(CLIENT_FILTER, by_client(&value));
                        client_filter.set(value);
                    })
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
                    on_change=Callback::new(move |key: String| {
                        if let Some(selected) = InvoiceSort::from_key(&key) {
                            sort.set(selected);
                            screen.set_sort(Some(selected.sort_key()));
                        }
                    })
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
                                <th class="table__header-cell table__header-cell--right">"Kg"</th>
                                <th class="table__header-cell table__header-cell--right">"Price per item"</th>
                                <th class="table__header-cell table__header-cell--right">"Total"</th>
                                <th class="table__header-cell">"Remark"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || screen.rows().into_iter().map(|invoice| {
                                let id = invoice.id.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_datetime(&invoice.date)}</td>
                                        <td class="table__cell">{invoice.client_name().to_string()}</td>
                                        <td class="table__cell">{invoice.product_name().to_string()}</td>
                                        <td class="table__cell table__cell--right">{format_quantity(invoice.amount_in_kg)}</td>
                                        <td class="table__cell table__cell--right">{format_money(invoice.price_per_item)}</td>
                                        <td class="table__cell table__cell--right">{format_money(invoice.total_price)}</td>
                                        <td class="table__cell">{invoice.remark.clone().unwrap_or_default()}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Button
                                                size="sm"
                                                variant="danger"
                                                on_click=Callback::new(move |_| screen.remove(id.clone()))
                                            >
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
