//! Figures of the overview dashboard, computed from the fetched collections

use crate::shared::date_utils::compare_timestamps;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_order::aggregate::Order;
use contracts::domain::a005_invoice::aggregate::Invoice;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EarningsSummary {
    /// Σ pricePerBag × amountInBag over orders
    pub total_earnings: f64,
    /// Σ totalPrice over invoices
    pub total_expenses: f64,
    /// One point per order, in snapshot order
    pub earnings_series: Vec<f64>,
    /// One point per invoice, in snapshot order
    pub expenses_series: Vec<f64>,
}

impl EarningsSummary {
    pub fn balance(&self) -> f64 {
        self.total_earnings - self.total_expenses
    }
}

pub fn earnings_summary(orders: &[Order], invoices: &[Invoice]) -> EarningsSummary {
    let earnings_series: Vec<f64> = orders.iter().map(Order::earnings).collect();
    let expenses_series: Vec<f64> = invoices.iter().map(|i| i.total_price).collect();
    EarningsSummary {
        total_earnings: earnings_series.iter().sum(),
        total_expenses: expenses_series.iter().sum(),
        earnings_series,
        expenses_series,
    }
}

/// Newest orders first, at most `limit`
pub fn recent_transactions(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| compare_timestamps(&b.date, &a.date));
    sorted.truncate(limit);
    sorted
}

/// (product name, units in stock), in the order the server sent them
pub fn product_stock(products: &[Product]) -> Vec<(String, i64)> {
    products
        .iter()
        .map(|p| (p.product_name.clone(), p.product_in_stock))
        .collect()
}

/// Bar heights in percent of the largest value; non-positive values get 0
pub fn bar_heights(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| if *v > 0.0 { v / max * 100.0 } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn order(id: i64, date: &str, bags: f64, price: f64) -> Order {
        serde_json::from_value(json!({
            "id": id, "date": date, "amountInBag": bags, "pricePerBag": price
        }))
        .unwrap()
    }

    fn invoice(id: i64, total: f64) -> Invoice {
        serde_json::from_value(json!({"id": id, "totalPrice": total})).unwrap()
    }

    #[test]
    fn test_earnings_and_expenses() {
        let orders = vec![order(1, "2024-01-01", 100.0, 2000.0), order(2, "2024-01-02", 10.0, 50.0)];
        let invoices = vec![invoice(1, 30000.0), invoice(2, 1250.5)];

        let summary = earnings_summary(&orders, &invoices);
        assert_eq!(summary.total_earnings, 200500.0);
        assert_eq!(summary.total_expenses, 31250.5);
        assert_eq!(summary.earnings_series, vec![200000.0, 500.0]);
        assert_eq!(summary.balance(), 169249.5);
    }

    #[test]
    fn test_empty_collections() {
        let summary = earnings_summary(&[], &[]);
        assert_eq!(summary, EarningsSummary::default());
        assert!(recent_transactions(&[], 6).is_empty());
    }

    #[test]
    fn test_recent_transactions_newest_first_and_limited() {
        let orders: Vec<Order> = (1..=8)
            .map(|day| order(day, &format!("2024-02-{:02}T10:00:00Z", day), 1.0, 1.0))
            .collect();
        let recent = recent_transactions(&orders, 6);
        let ids: Vec<String> = recent.iter().map(|o| o.id.as_string()).collect();
        assert_eq!(ids, vec!["8", "7", "6", "5", "4", "3"]);
    }

    #[test]
    fn test_product_stock_and_bars() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {"id": 1, "productName": "Flour", "productInStock": 40},
            {"id": 2, "productName": "Bran", "productInStock": 10}
        ]))
        .unwrap();
        assert_eq!(
            product_stock(&products),
            vec![("Flour".to_string(), 40), ("Bran".to_string(), 10)]
        );
        assert_eq!(bar_heights(&[40.0, 10.0, -5.0]), vec![100.0, 25.0, 0.0]);
        assert_eq!(bar_heights(&[0.0]), vec![0.0]);
    }
}
