//! Titles of the tabs, by tab key.

/// Readable tab title for a key; unknown keys are shown as-is
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "d400_overview" => "Dashboard",

        "a004_order_create" => "Create Order",
        "a004_order_list" => "List Orders",

        "a005_invoice_create" => "Create Invoice",
        "a005_invoice_list" => "List Invoices",

        "a003_product_daily_create" => "Add Todays Product",
        "a003_product_daily_list" => "List Daily Products",

        "a002_product_create" => "Add Product",
        "a002_product_list" => "List All Products",

        "a001_client_list" => "Clients",
        "a006_shift_manager_list" => "Shift Managers",

        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_keys() {
        assert_eq!(tab_label_for_key("a004_order_list"), "List Orders");
        assert_eq!(tab_label_for_key("x999_unknown"), "x999_unknown");
    }
}
