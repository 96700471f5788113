use crate::shared::date_utils::{compare_timestamps, within_days};
use crate::shared::list_view_model::{criterion, Criterion, ListViewModel, SortKey};
use chrono::{DateTime, Utc};
use contracts::domain::a003_product_daily::aggregate::ProductDaily;

pub const MANAGER_FILTER: &str = "shift_manager";
pub const TIME_FRAME_FILTER: &str = "time_frame";

/// Look-back window of the time frame filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    Day,
    Week,
    Month,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [TimeFrame::Day, TimeFrame::Week, TimeFrame::Month];

    pub fn key(self) -> &'static str {
        match self {
            TimeFrame::Day => "day",
            TimeFrame::Week => "week",
            TimeFrame::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::Day => "Past day",
            TimeFrame::Week => "Past week",
            TimeFrame::Month => "Past 30 days",
        }
    }

    pub fn days(self) -> i64 {
        match self {
            TimeFrame::Day => 1,
            TimeFrame::Week => 7,
            TimeFrame::Month => 30,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

pub fn date_desc() -> SortKey<ProductDaily> {
    SortKey::new("date_desc", |a: &ProductDaily, b: &ProductDaily| {
        compare_timestamps(&b.date, &a.date)
    })
}

/// Entries of one shift manager, matched by name; "" clears the filter
pub fn by_manager(name: &str) -> Option<Criterion<ProductDaily>> {
    if name.is_empty() {
        return None;
    }
    let name = name.to_string();
    Some(criterion(move |entry: &ProductDaily| entry.shift_manager_name() == name))
}

/// Entries made within the frame; `clock` is read each time the projection is rebuilt
pub fn by_time_frame(
    frame: Option<TimeFrame>,
    clock: fn() -> DateTime<Utc>,
) -> Option<Criterion<ProductDaily>> {
    let days = frame?.days();
    Some(criterion(move |entry: &ProductDaily| within_days(&entry.date, days, clock())))
}

pub fn new_model() -> ListViewModel<ProductDaily> {
    ListViewModel::new().with_sort(date_desc())
}

/// Distinct manager names in first-seen order
pub fn manager_names(entries: &[ProductDaily]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let name = entry.shift_manager_name();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::date_utils::parse_timestamp;
    use contracts::domain::common::EntityId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn entry(id: i64, manager: &str, date: &str) -> ProductDaily {
        serde_json::from_value(json!({
            "id": id,
            "amountDaily": 120,
            "date": date,
            "product": {"id": 1, "productName": "Flour"},
            "shiftManager": {"id": 9, "shiftManager": manager}
        }))
        .unwrap()
    }

    fn loaded() -> ListViewModel<ProductDaily> {
        let mut vm = new_model();
        let ticket = vm.begin_load();
        vm.finish_load(
            ticket,
            Ok(vec![
                entry(1, "Kebede", "2024-05-01T08:00:00Z"),
                entry(2, "Almaz", "2024-05-09T20:00:00Z"),
                entry(3, "Kebede", "2024-05-06T08:00:00Z"),
            ]),
        );
        vm
    }

    fn ids(vm: &ListViewModel<ProductDaily>) -> Vec<EntityId> {
        vm.projection().iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_newest_first() {
        assert_eq!(
            ids(&loaded()),
            vec![EntityId::Int(2), EntityId::Int(3), EntityId::Int(1)]
        );
    }

    fn may_10_noon() -> DateTime<Utc> {
        parse_timestamp("2024-05-10T12:00:00Z").unwrap_or_default()
    }

    #[test]
    fn test_time_frames() {
        let now = may_10_noon;
        let mut vm = loaded();

        vm.set_filter(TIME_FRAME_FILTER, by_time_frame(Some(TimeFrame::Day), now));
        assert_eq!(ids(&vm), vec![EntityId::Int(2)]);

        vm.set_filter(TIME_FRAME_FILTER, by_time_frame(Some(TimeFrame::Week), now));
        assert_eq!(ids(&vm), vec![EntityId::Int(2), EntityId::Int(3)]);

        vm.set_filter(TIME_FRAME_FILTER, by_time_frame(Some(TimeFrame::Month), now));
        assert_eq!(ids(&vm).len(), 3);

        vm.set_filter(TIME_FRAME_FILTER, by_time_frame(None, now));
        assert!(!vm.has_filter(TIME_FRAME_FILTER));
    }

    #[test]
    fn test_manager_filter_combines_with_time_frame() {
        let now = may_10_noon;
        let mut vm = loaded();
        vm.set_filter(MANAGER_FILTER, by_manager("Kebede"));
        vm.set_filter(TIME_FRAME_FILTER, by_time_frame(Some(TimeFrame::Week), now));
        assert_eq!(ids(&vm), vec![EntityId::Int(3)]);
    }

    #[test]
    fn test_entries_newer_than_selection_stay_visible() {
        let mut vm = loaded();
        vm.set_filter(TIME_FRAME_FILTER, by_time_frame(Some(TimeFrame::Day), may_10_noon));

        let ticket = vm.begin_load();
        vm.finish_load(
            ticket,
            Ok(vec![
                entry(2, "Almaz", "2024-05-09T20:00:00Z"),
                entry(4, "Almaz", "2024-05-10T12:05:00Z"),
            ]),
        );
        assert_eq!(ids(&vm), vec![EntityId::Int(4), EntityId::Int(2)]);
    }

    #[test]
    fn test_manager_names_are_distinct() {
        let vm = loaded();
        assert_eq!(manager_names(vm.snapshot()), vec!["Kebede", "Almaz"]);
    }
}
