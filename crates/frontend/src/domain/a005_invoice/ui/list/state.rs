use crate::shared::date_utils::{calendar_day_in, compare_timestamps, local_offset, ZoneOffset};
use crate::shared::list_view_model::{criterion, Criterion, DerivedTotal, ListViewModel, SortKey};
use chrono::NaiveDate;
use contracts::domain::a005_invoice::aggregate::{fields, Invoice};

pub const CLIENT_FILTER: &str = "client";
pub const DATE_FILTER: &str = "date";

/// totalPrice = amountInKg × pricePerItem
pub const TOTAL_RULE: DerivedTotal = DerivedTotal::new(
    fields::AMOUNT_IN_KG,
    fields::PRICE_PER_ITEM,
    fields::TOTAL_PRICE,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceSort {
    DateDesc,
    ClientName,
}

impl InvoiceSort {
    pub const ALL: [InvoiceSort; 2] = [InvoiceSort::DateDesc, InvoiceSort::ClientName];

    pub fn key(self) -> &'static str {
        match self {
            InvoiceSort::DateDesc => "date_desc",
            InvoiceSort::ClientName => "client_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvoiceSort::DateDesc => "Newest first",
            InvoiceSort::ClientName => "Client name",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn sort_key(self) -> SortKey<Invoice> {
        match self {
            InvoiceSort::DateDesc => SortKey::new(self.key(), |a: &Invoice, b: &Invoice| {
                compare_timestamps(&b.date, &a.date)
            }),
            InvoiceSort::ClientName => SortKey::new(self.key(), |a: &Invoice, b: &Invoice| {
                a.client_name()
                    .to_lowercase()
                    .cmp(&b.client_name().to_lowercase())
            }),
        }
    }
}

pub fn by_client(selection: &str) -> Option<Criterion<Invoice>> {
    if selection.is_empty() {
        return None;
    }
    let selection = selection.to_string();
    Some(criterion(move |invoice: &Invoice| {
        invoice.client_id().is_some_and(|id| id.matches(&selection))
    }))
}

pub fn by_date(selection: &str) -> Option<Criterion<Invoice>> {
    by_date_in(selection, local_offset)
}

/// Same as [`by_date`], with days taken in the zone given by `zone`
pub fn by_date_in(selection: &str, zone: ZoneOffset) -> Option<Criterion<Invoice>> {
    let day = NaiveDate::parse_from_str(selection, "%Y-%m-%d").ok()?;
    Some(criterion(move |invoice: &Invoice| calendar_day_in(&invoice.date, zone) == Some(day)))
}

pub fn new_model() -> ListViewModel<Invoice> {
    ListViewModel::new().with_sort(InvoiceSort::DateDesc.sort_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_utils::utc_offset;
    use contracts::domain::common::EntityId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn invoice(id: i64, client: (i64, &str), date: &str) -> Invoice {
        serde_json::from_value(json!({
            "id": id,
            "client": {"id": client.0, "clientName": client.1},
            "amountInKg": 50,
            "pricePerItem": 12.5,
            "totalPrice": 625,
            "date": date
        }))
        .unwrap()
    }

    fn ids(vm: &ListViewModel<Invoice>) -> Vec<EntityId> {
        vm.projection().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_sorts_and_filters() {
        let mut vm = new_model();
        let ticket = vm.begin_load();
        vm.finish_load(
            ticket,
            Ok(vec![
                invoice(1, (2, "Tigist"), "2024-03-01T09:00:00Z"),
                invoice(2, (1, "abebe"), "2024-03-02T09:00:00Z"),
                invoice(3, (2, "Tigist"), "2024-03-02T15:00:00Z"),
            ]),
        );
        assert_eq!(ids(&vm), vec![EntityId::Int(3), EntityId::Int(2), EntityId::Int(1)]);

        vm.set_sort(Some(InvoiceSort::ClientName.sort_key()));
        assert_eq!(ids(&vm), vec![EntityId::Int(2), EntityId::Int(1), EntityId::Int(3)]);

        vm.set_filter(CLIENT_FILTER, by_client("2"));
        vm.set_filter(DATE_FILTER, by_date_in("2024-03-02", |_| utc_offset()));
        assert_eq!(ids(&vm), vec![EntityId::Int(3)]);
    }

    #[test]
    fn test_total_rule_multiplies_kg_by_price() {
        assert_eq!(
            DerivedTotal::product(&json!(50), &json!(12.5)),
            Some(json!(625.0))
        );
        assert!(TOTAL_RULE.depends_on(fields::PRICE_PER_ITEM));
        assert!(!TOTAL_RULE.depends_on(fields::TOTAL_PRICE));
    }
}
