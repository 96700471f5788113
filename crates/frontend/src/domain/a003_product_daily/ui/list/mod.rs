pub mod state;

use self::state::{
    by_manager, by_time_frame, manager_names, new_model, TimeFrame, MANAGER_FILTER,
    TIME_FRAME_FILTER,
};
use crate::shared::components::page_header::{LoadState, PageHeader};
use crate::shared::components::table::format_quantity;
use crate::shared::components::ui::{Button, Select};
use crate::shared::date_utils::{format_datetime, now_utc};
use crate::shared::icons::icon;
use crate::shared::list_view_model::use_list_screen;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductDailyList() -> impl IntoView {
    let screen = use_list_screen(new_model());
    let manager = RwSignal::new(String::new());
    let time_frame = RwSignal::new(String::new());

    let manager_options = Signal::derive(move || {
        screen.state.with(|vm| {
            manager_names(vm.snapshot())
                .into_iter()
                .map(|name| (name.clone(), name))
                .collect::<Vec<_>>()
        })
    });
    let frame_options = Signal::derive(|| {
        TimeFrame::ALL
            .iter()
            .map(|t| (t.key().to_string(), t.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <PageHeader title="Daily production" subtitle=Signal::derive(move || format!("{} shown", screen.row_count()))>
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
                    label="Shift manager"
                    value=manager
                    options=manager_options
                    empty_label="All shift managers"
                    on_change=Callback::new(move |name: String| {
                        screen.set_filter(MANAGER_FILTER, by_manager(&name));
                        manager.set(name);
                    })
                />
                <Select
                    label="Time frame"
                    value=time_frame
                    options=frame_options
                    empty_label="All time"
                    on_change=Callback::new(move |key: String| {
                        let frame = TimeFrame::from_key(&key);
                        screen.set_filter(TIME_FRAME_FILTER, by_time_frame(frame, now_utc));
                        time_frame.set(key);
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
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell table__header-cell--right">"Amount"</th>
                                <th class="table__header-cell">"Shift manager"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || screen.rows().into_iter().map(|entry| {
                                let id = entry.id.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_datetime(&entry.date)}</td>
                                        <td class="table__cell">{entry.product_name().to_string()}</td>
                                        <td class="table__cell table__cell--right">{format_quantity(entry.amount_daily)}</td>
                                        <td class="table__cell">{entry.shift_manager_name().to_string()}</td>
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
