use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::list_view_model::{use_create_form, use_reference_list};
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_product_daily::aggregate::{
    fields, CreateProductDailyRequest, ProductDaily,
};
use contracts::domain::a006_shift_manager::aggregate::ShiftManager;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductDailyCreate(on_created: Callback<()>) -> impl IntoView {
    let form = use_create_form::<ProductDaily, _>(&CreateProductDailyRequest::default(), Vec::new());
    let products = use_reference_list::<Product>();
    let managers = use_reference_list::<ShiftManager>();
    form.default_to_first(fields::PRODUCT_ID, products);
    form.default_to_first(fields::SHIFT_MANAGER_ID, managers);

    let product_options = Signal::derive(move || {
        products.with(|list| {
            list.iter()
                .map(|p| (p.id.as_string(), p.product_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let manager_options = Signal::derive(move || {
        managers.with(|list| {
            list.iter()
                .map(|m| (m.id.as_string(), m.shift_manager.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page page--form">
            <PageHeader title="Add daily production" />
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit::<CreateProductDailyRequest>(
                        CreateProductDailyRequest::validate,
                        Some(on_created),
                    );
                }
            >
                <Select
                    label="Product"
                    value=form.text_signal(fields::PRODUCT_ID)
                    options=product_options
                    on_change=form.id_input(fields::PRODUCT_ID)
                    required=true
                />
                <Select
                    label="Shift manager"
                    value=form.text_signal(fields::SHIFT_MANAGER_ID)
                    options=manager_options
                    on_change=form.id_input(fields::SHIFT_MANAGER_ID)
                    required=true
                />
                <Input
                    label="Amount produced"
                    input_type="number"
                    value=form.text_signal(fields::AMOUNT_DAILY)
                    on_input=form.number_input(fields::AMOUNT_DAILY)
                    required=true
                />
                <div class="form__actions">
                    <Button button_type="submit" disabled=form.submitting>
                        "Save"
                    </Button>
                </div>
            </form>
        </div>
    }
}
