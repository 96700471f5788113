use super::list::state::TOTAL_RULE;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::list_view_model::{use_create_form, use_reference_list};
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_order::aggregate::{fields, CreateOrderRequest, Order};
use leptos::prelude::*;
use serde_json::Value;

#[component]
#[allow(non_snake_case)]
pub fn OrderCreate(on_created: Callback<()>) -> impl IntoView {
    let form = use_create_form::<Order, _>(&CreateOrderRequest::default(), vec![TOTAL_RULE]);
    let clients = use_reference_list::<Client>();
    let products = use_reference_list::<Product>();
    form.default_to_first(fields::CLIENT_ID, clients);
    form.default_to_first(fields::PRODUCT_ID, products);

    let client_options = Signal::derive(move || {
        clients.with(|list| {
            list.iter()
                .map(|c| (c.id.as_string(), c.client_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let product_options = Signal::derive(move || {
        products.with(|list| {
            list.iter()
                .map(|p| (p.id.as_string(), p.product_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let paid = Signal::derive(move || {
        form.value(fields::PAID)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    });

    view! {
        <div class="page page--form">
            <PageHeader title="Create order" />
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit::<CreateOrderRequest>(CreateOrderRequest::validate, Some(on_created));
                }
            >
                <div class="form__row">
                    <Select
                        label="Client"
                        value=form.text_signal(fields::CLIENT_ID)
                        options=client_options
                        on_change=form.id_input(fields::CLIENT_ID)
                        required=true
                    />
                    <Select
                        label="Product"
                        value=form.text_signal(fields::PRODUCT_ID)
                        options=product_options
                        on_change=form.id_input(fields::PRODUCT_ID)
                        required=true
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="Amount in bags"
                        input_type="number"
                        value=form.text_signal(fields::AMOUNT_IN_BAG)
                        on_input=form.number_input(fields::AMOUNT_IN_BAG)
                    />
                    <Input
                        label="Amount in kg"
                        input_type="number"
                        value=form.text_signal(fields::AMOUNT_IN_KG)
                        on_input=form.number_input(fields::AMOUNT_IN_KG)
                    />
                </div>
                <div class="form__row">
                    <Input
                        label="Price per bag"
                        input_type="number"
                        value=form.text_signal(fields::PRICE_PER_BAG)
                        on_input=form.number_input(fields::PRICE_PER_BAG)
                    />
                    <Input
                        label="Total price"
                        input_type="number"
                        value=form.text_signal(fields::PRICE_IN_TOTAL)
                        readonly=true
                    />
                </div>
                <Input
                    label="Remark"
                    value=form.text_signal(fields::REMARK)
                    on_input=form.string_input(fields::REMARK)
                />
                <Checkbox
                    label="Paid"
                    checked=paid
                    on_change=Callback::new(move |checked: bool| form.set_value(fields::PAID, Value::Bool(checked)))
                />
                <div class="form__actions">
                    <Button button_type="submit" disabled=form.submitting>
                        "Create order"
                    </Button>
                </div>
            </form>
        </div>
    }
}
