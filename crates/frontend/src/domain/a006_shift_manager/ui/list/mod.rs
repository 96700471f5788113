use crate::shared::components::page_header::{LoadState, PageHeader};
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::list_view_model::{
    display_value, use_create_form, use_list_screen, ListViewModel, SortKey,
};
use contracts::domain::a006_shift_manager::aggregate::{
    fields, CreateShiftManagerRequest, ShiftManager,
};
use leptos::prelude::*;
use serde_json::Value;

fn by_name() -> SortKey<ShiftManager> {
    SortKey::new("name", |a: &ShiftManager, b: &ShiftManager| {
        a.shift_manager
            .to_lowercase()
            .cmp(&b.shift_manager.to_lowercase())
    })
}

#[component]
#[allow(non_snake_case)]
pub fn ShiftManagerList() -> impl IntoView {
    let screen = use_list_screen(ListViewModel::new().with_sort(by_name()));
    let form = use_create_form::<ShiftManager, _>(
        &CreateShiftManagerRequest {
            shift_manager: String::new(),
        },
        Vec::new(),
    );

    view! {
        <div class="page">
            <PageHeader title="Shift managers">
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
                    form.submit::<CreateShiftManagerRequest>(
                        CreateShiftManagerRequest::validate,
                        Some(Callback::new(move |_| screen.load())),
                    );
                }
            >
                <Input
                    placeholder="New shift manager"
                    value=form.text_signal(fields::SHIFT_MANAGER)
                    on_input=form.string_input(fields::SHIFT_MANAGER)
                />
                <Button button_type="submit" disabled=form.submitting>
                    {icon("plus")}
                    "Add"
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
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || screen.rows().into_iter().map(|manager| {
                                let id = manager.id.clone();
                                let name = {
                                    let id = id.clone();
                                    Signal::derive(move || {
                                        display_value(screen.value(&id, fields::SHIFT_MANAGER).as_ref())
                                    })
                                };
                                let dirty = {
                                    let id = id.clone();
                                    Signal::derive(move || screen.is_dirty(&id))
                                };
                                let on_name = {
                                    let id = id.clone();
                                    Callback::new(move |raw: String| {
                                        screen.edit(&id, fields::SHIFT_MANAGER, Value::String(raw))
                                    })
                                };
                                let on_save = {
                                    let id = id.clone();
                                    Callback::new(move |_| screen.save(id.clone()))
                                };

                                view! {
                                    <tr class="table__row" class:table__row--modified=move || dirty.get()>
                                        <td class="table__cell">
                                            <Input value=name on_input=on_name />
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
