pub mod state;

use self::state::new_model;
use crate::shared::components::page_header::{LoadState, PageHeader};
use crate::shared::components::ui::{Button, Input};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_view_model::{display_value, parse_input, use_list_screen};
use contracts::domain::a002_product::aggregate::fields;
use leptos::prelude::*;
use serde_json::Value;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let screen = use_list_screen(new_model());

    view! {
        <div class="page">
            <PageHeader title="Products" subtitle=Signal::derive(move || format!("{} products", screen.row_count()))>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || screen.is_loading())
                    on_click=Callback::new(move |_| screen.load())
                >
                    {icon("list")}
                    "Refresh"
                </Button>
            </PageHeader>

            <LoadState
                loading=Signal::derive(move || screen.is_first_load())
                error=Signal::derive(move || screen.error_message())
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"In stock"</th>
                                <th class="table__header-cell">"Updated"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || screen.rows().into_iter().map(|product| {
                                let id = product.id.clone();
                                let field_text = {
                                    let id = id.clone();
                                    move |field: &'static str| {
                                        let id = id.clone();
                                        Signal::derive(move || display_value(screen.value(&id, field).as_ref()))
                                    }
                                };
                                let dirty = {
                                    let id = id.clone();
                                    Signal::derive(move || screen.is_dirty(&id))
                                };
                                let on_name = {
                                    let id = id.clone();
                                    Callback::new(move |raw: String| {
                                        screen.edit(&id, fields::PRODUCT_NAME, Value::String(raw))
                                    })
                                };
                                let on_stock = {
                                    let id = id.clone();
                                    Callback::new(move |raw: String| {
                                        screen.edit(&id, fields::PRODUCT_IN_STOCK, parse_input(&raw))
                                    })
                                };
                                let on_save = {
                                    let id = id.clone();
                                    Callback::new(move |_| screen.save(id.clone()))
                                };
                                let updated = product
                                    .date_updated
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_default();

                                view! {
                                    <tr class="table__row" class:table__row--modified=move || dirty.get()>
                                        <td class="table__cell">
                                            <Input value=field_text(fields::PRODUCT_NAME) on_input=on_name />
                                        </td>
                                        <td class="table__cell">
                                            <Input
                                                input_type="number"
                                                value=field_text(fields::PRODUCT_IN_STOCK)
                                                on_input=on_stock
                                            />
                                        </td>
                                        <td class="table__cell">{updated}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Button size="sm" disabled=Signal::derive(move || !dirty.get()) on_click=on_save>
                                                "Save"
                                            </Button>
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
