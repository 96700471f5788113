use crate::shared::list_view_model::{ListViewModel, SortKey};
use contracts::domain::a002_product::aggregate::Product;

pub fn by_name() -> SortKey<Product> {
    SortKey::new("name", |a: &Product, b: &Product| {
        a.product_name
            .to_lowercase()
            .cmp(&b.product_name.to_lowercase())
    })
}

pub fn new_model() -> ListViewModel<Product> {
    ListViewModel::new().with_sort(by_name())
}
