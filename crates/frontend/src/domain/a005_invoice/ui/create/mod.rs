use super::list::state::TOTAL_RULE;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::list_view_model::{use_create_form, use_reference_list};
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a005_invoice::aggregate::{fields, CreateInvoiceRequest, Invoice};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn InvoiceCreate(on_created: Callback<()>) -> impl IntoView {
    let form = use_create_form::<Invoice, _>(&CreateInvoiceRequest::default(), vec![TOTAL_RULE]);
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

    view! {
        <div class="page page--form">
            <PageHeader title="Create invoice" />
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit::<CreateInvoiceRequest>(CreateInvoiceRequest::validate, Some(on_created));
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
                        label="Amount in kg"
                        input_type="number"
                        value=form.text_signal(fields::AMOUNT_IN_KG)
                        on_input=form.number_input(fields::AMOUNT_IN_KG)
                    />
                    <Input
                        label="Price per item"
                        input_type="number"
                        value=form.text_signal(fields::PRICE_PER_ITEM)
                        on_input=form.number_input(fields::PRICE_PER_ITEM)
                    />
                    <Input
                        label="Total price"
                        input_type="number"
                        value=form.text_signal(fields::TOTAL_PRICE)
                        readonly=true
                    />
                </div>
                <Input
                    label="Remark"
                    value=form.text_signal(fields::REMARK)
                    on_input=form.string_input(fields::REMARK)
                />
                <div class="form__actions">
                    <Button button_type="submit" disabled=form.submitting>
                        "Create invoice"
                    </Button>
                </div>
            </form>
        </div>
    }
}
