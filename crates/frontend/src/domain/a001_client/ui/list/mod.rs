pub mod state;

use self::state::{new_model, total_debt};
use crate::shared::components::page_header::{LoadState, PageHeader};
use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::list_view_model::{display_value, parse_input, use_create_form, use_list_screen};
use contracts::domain::a001_client::aggregate::{fields, Client, CreateClientRequest};
use leptos::prelude::*;
use serde_json::Value;

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let screen = use_list_screen(new_model());
    let form = use_create_form::<Client, _>(&CreateClientRequest::new(""), Vec::new());
    let debt = Signal::derive(move || {
        screen
            .state
            .with(|vm| format_money(total_debt(vm.snapshot())))
    });

    view! {
        <div class="page">
            <PageHeader title="Clients" subtitle=Signal::derive(move || format!("Total debt: {}", debt.get()))>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || screen.is_loading())
                    on_click=Callback::new(move |_| screen.load())
                >
                    {icon("list")}
                    "Refresh"
                </Button>
            </PageHeader>

            <form
                class="form form--inline"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit::<CreateClientRequest>(
                        CreateClientRequest::validate,
                        Some(Callback::new(move |_| screen.load())),
                    );
                }
            >
                <Input
                    placeholder="New client name"
                    value=form.text_signal(fields::CLIENT_NAME)
                    on_input=form.string_input(fields::CLIENT_NAME)
                />
                <Button button_type="submit" disabled=form.submitting>
                    {icon("plus")}
                    "Add client"
                </Button>
            </form>

            <LoadState
                loading=Signal::derive(move || screen.is_first_load())
                error=Signal::derive(move || screen.error_message())
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Client"</th>
                                <th class="table__header-cell">"Debt"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || screen.rows().into_iter().map(|client| {
                                let id = client.id.clone();
                                let text_of = {
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
                                        screen.edit(&id, fields::CLIENT_NAME, Value::String(raw))
                                    })
                                };
                                let on_debt = {
                                    let id = id.clone();
                                    Callback::new(move |raw: String| {
                                        screen.edit(&id, fields::DEBT_AMOUNT, parse_input(&raw))
                                    })
                                };
                                let on_save = {
                                    let id = id.clone();
                                    Callback::new(move |_| screen.save(id.clone()))
                                };

                                view! {
                                    <tr class="table__row" class:table__row--modified=move || dirty.get()>
                                        <td class="table__cell">
                                            <Input value=text_of(fields::CLIENT_NAME) on_input=on_name />
                                        </td>
                                        <td class="table__cell">
                                            <Input
                                                input_type="number"
                                                value=text_of(fields::DEBT_AMOUNT)
                                                on_input=on_debt
                                            />
                                        </td>
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
