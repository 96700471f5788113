use crate::shared::date_utils::{calendar_day_in, compare_timestamps, local_offset, ZoneOffset};
use crate::shared::list_view_model::{criterion, Criterion, DerivedTotal, ListViewModel, SortKey};
use chrono::NaiveDate;
use contracts::domain::a004_order::aggregate::{fields, Order};

pub const CLIENT_FILTER: &str = "client";
pub const DATE_FILTER: &str = "date";

/// priceInTotal = amountInBag × pricePerBag
pub const TOTAL_RULE: DerivedTotal = DerivedTotal::new(
    fields::AMOUNT_IN_BAG,
    fields::PRICE_PER_BAG,
    fields::PRICE_IN_TOTAL,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    DateDesc,
    /// Unpaid orders first, newest first within each group
    UnpaidFirst,
    ClientName,
}

impl OrderSort {
    pub const ALL: [OrderSort; 3] = [OrderSort::DateDesc, OrderSort::UnpaidFirst, OrderSort::ClientName];

    pub fn key(self) -> &'static str {
        match self {
            OrderSort::DateDesc => "date_desc",
            OrderSort::UnpaidFirst => "unpaid_first",
            OrderSort::ClientName => "client_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderSort::DateDesc => "Newest first",
            OrderSort::UnpaidFirst => "Unpaid first",
            OrderSort::ClientName => "Client name",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn sort_key(self) -> SortKey<Order> {
        match self {
            OrderSort::DateDesc => SortKey::new(self.key(), |a: &Order, b: &Order| {
                compare_timestamps(&b.date, &a.date)
            }),
            OrderSort::UnpaidFirst => SortKey::new(self.key(), |a: &Order, b: &Order| {
                a.paid
                    .cmp(&b.paid)
                    .then_with(|| compare_timestamps(&b.date, &a.date))
            }),
            OrderSort::ClientName => SortKey::new(self.key(), |a: &Order, b: &Order| {
                a.client_name()
                    .to_lowercase()
                    .cmp(&b.client_name().to_lowercase())
            }),
        }
    }
}

/// Orders of one client; an empty selection clears the filter
pub fn by_client(selection: &str) -> Option<Criterion<Order>> {
    if selection.is_empty() {
        return None;
    }
    let selection = selection.to_string();
    Some(criterion(move |order: &Order| {
        order.client_id().is_some_and(|id| id.matches(&selection))
    }))
}

/// Orders placed on one calendar day ("yyyy-mm-dd"); "" clears the filter
pub fn by_date(selection: &str) -> Option<Criterion<Order>> {
    by_date_in(selection, local_offset)
}

/// Same as [`by_date`], with days taken in the zone given by `zone`
pub fn by_date_in(selection: &str, zone: ZoneOffset) -> Option<Criterion<Order>> {
    let day = NaiveDate::parse_from_str(selection, "%Y-%m-%d").ok()?;
    Some(criterion(move |order: &Order| calendar_day_in(&order.date, zone) == Some(day)))
}

pub fn new_model() -> ListViewModel<Order> {
    ListViewModel::new()
        .with_sort(OrderSort::DateDesc.sort_key())
        .with_derived(TOTAL_RULE)
}
