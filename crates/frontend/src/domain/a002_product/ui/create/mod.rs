use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::list_view_model::use_create_form;
use contracts::domain::a002_product::aggregate::{fields, CreateProductRequest, Product};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductCreate(on_created: Callback<()>) -> impl IntoView {
    let form = use_create_form::<Product, _>(&CreateProductRequest::default(), Vec::new());

    view! {
        <div class="page page--form">
            <PageHeader title="Create product" />
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit::<CreateProductRequest>(CreateProductRequest::validate, Some(on_created));
                }
            >
                <Input
                    label="Product name"
                    value=form.text_signal(fields::PRODUCT_NAME)
                    on_input=form.string_input(fields::PRODUCT_NAME)
                    required=true
                />
                <Input
                    label="In stock"
                    input_type="number"
                    value=form.text_signal(fields::PRODUCT_IN_STOCK)
                    on_input=form.number_input(fields::PRODUCT_IN_STOCK)
                />
                <div class="form__actions">
                    <Button button_type="submit" disabled=form.submitting>
                        "Create product"
                    </Button>
                </div>
            </form>
        </div>
    }
}
