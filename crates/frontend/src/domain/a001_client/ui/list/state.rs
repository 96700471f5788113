use crate::shared::list_view_model::{ListViewModel, SortKey};
use contracts::domain::a001_client::aggregate::Client;

pub fn by_name() -> SortKey<Client> {
    SortKey::new("name", |a: &Client, b: &Client| {
        a.client_name
            .to_lowercase()
            .cmp(&b.client_name.to_lowercase())
    })
}

pub fn new_model() -> ListViewModel<Client> {
    ListViewModel::new().with_sort(by_name())
}

/// (id, name) pairs for client select boxes
pub fn client_options(clients: &[Client]) -> Vec<(String, String)> {
    clients
        .iter()
        .map(|c| (c.id.as_string(), c.client_name.clone()))
        .collect()
}

/// Sum of outstanding debt over the given clients
pub fn total_debt(clients: &[Client]) -> f64 {
    clients.iter().map(|c| c.debt_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::aggregate::fields;
    use contracts::domain::common::EntityId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client(id: i64, name: &str, debt: f64) -> Client {
        serde_json::from_value(json!({"id": id, "clientName": name, "debtAmount": debt})).unwrap()
    }

    #[test]
    fn test_sorted_by_name_and_debt_summed() {
        let mut vm = new_model();
        let ticket = vm.begin_load();
        vm.finish_load(ticket, Ok(vec![client(1, "Selam", 1500.0), client(2, "Abel", 250.5)]));

        let names: Vec<&str> = vm.projection().iter().map(|c| c.client_name.as_str()).collect();
        assert_eq!(names, vec!["Abel", "Selam"]);
        assert_eq!(total_debt(vm.snapshot()), 1750.5);
    }

    #[test]
    fn test_name_and_debt_edited_independently() {
        let mut vm = new_model();
        let ticket = vm.begin_load();
        vm.finish_load(ticket, Ok(vec![client(1, "Selam", 1500.0)]));
        let id = EntityId::Int(1);

        vm.edit(&id, fields::CLIENT_NAME, json!("Selam B."));
        vm.edit(&id, fields::DEBT_AMOUNT, json!(0));
        let pending = vm.pending(&id).cloned().unwrap_or_default();
        assert_eq!(pending.len(), 2);
        assert_eq!(
            pending.to_json(),
            json!({"clientName": "Selam B.", "debtAmount": 0})
        );
    }

    #[test]
    fn test_client_options_follow_fetch_order() {
        let clients = vec![client(7, "Selam", 0.0), client(3, "Abel", 10.0)];
        assert_eq!(
            client_options(&clients),
            vec![
                ("7".to_string(), "Selam".to_string()),
                ("3".to_string(), "Abel".to_string()),
            ]
        );
    }
}
