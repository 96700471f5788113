use contracts::domain::common::EntityId;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Locally edited, not yet persisted field values of one record.
///
/// Also used as the draft of create forms, where every field is "pending".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingEdits {
    values: BTreeMap<String, Value>,
}

impl PendingEdits {
    /// Draft seeded from a serializable value (usually a request's `Default`)
    pub fn from_json(value: Value) -> Self {
        let values = match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        };
        Self { values }
    }

    /// Draft seeded from a typed request, usually its `Default`
    pub fn from_serialize<T: Serialize>(value: &T) -> Self {
        serde_json::to_value(value)
            .map(Self::from_json)
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.values.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Set `field` and recompute every derived total that depends on it.
    ///
    /// `clean` supplies the last-known server value for fields that have not
    /// been edited yet.
    pub fn apply<F>(&mut self, field: &str, value: Value, rules: &[DerivedTotal], clean: F)
    where
        F: Fn(&str) -> Option<Value>,
    {
        self.set(field, value);
        for rule in rules.iter().filter(|rule| rule.depends_on(field)) {
            let quantity = self.get(rule.quantity).cloned().or_else(|| clean(rule.quantity));
            let unit_price = self
                .get(rule.unit_price)
                .cloned()
                .or_else(|| clean(rule.unit_price));
            if let (Some(quantity), Some(unit_price)) = (quantity, unit_price) {
                if let Some(total) = DerivedTotal::product(&quantity, &unit_price) {
                    self.set(rule.total, total);
                }
            }
        }
    }

    /// Forget the fields that were persisted with exactly these values
    pub fn acknowledge(&mut self, saved: &PendingEdits) {
        for (field, value) in saved.iter() {
            if self.values.get(field) == Some(value) {
                self.values.remove(field);
            }
        }
    }

    /// JSON object of the pending fields (PATCH body)
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Value::Object(map)
    }

    /// Deserialize the draft into a typed request
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, String> {
        serde_json::from_value(self.to_json()).map_err(|e| format!("Invalid form data: {}", e))
    }
}

/// Value of a raw form input: numbers become JSON numbers, blank becomes null
pub fn parse_input(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(number) => Value::Number(number),
        None => Value::String(raw.to_string()),
    }
}

/// JSON form of a record id, as create requests carry it
pub fn id_value(id: &EntityId) -> Value {
    match id {
        EntityId::Int(value) => Value::from(*value),
        EntityId::Text(value) => Value::String(value.clone()),
    }
}

/// Text to put back into an input for a stored value
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

/// `total = quantity × unit_price`, kept up to date while either input is edited.
///
/// The total is read-only in the UI; nothing stops a direct edit of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTotal {
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub total: &'static str,
}

impl DerivedTotal {
    pub const fn new(quantity: &'static str, unit_price: &'static str, total: &'static str) -> Self {
        Self {
            quantity,
            unit_price,
            total,
        }
    }

    pub fn depends_on(&self, field: &str) -> bool {
        field == self.quantity || field == self.unit_price
    }

    /// Product of two numeric values; integers stay integers unless they overflow.
    /// Numeric strings (raw form input) are accepted, anything else yields `None`.
    pub fn product(a: &Value, b: &Value) -> Option<Value> {
        if let (Some(x), Some(y)) = (as_integer(a), as_integer(b)) {
            if let Some(total) = x.checked_mul(y) {
                return Some(Value::from(total));
            }
        }
        let total = as_float(a)? * as_float(b)?;
        Number::from_f64(total).map(Value::Number)
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TOTAL: DerivedTotal = DerivedTotal::new("amountInBag", "pricePerBag", "priceInTotal");

    #[test]
    fn test_product_keeps_integers() {
        assert_eq!(DerivedTotal::product(&json!(100), &json!(2000)), Some(json!(200000)));
        assert_eq!(DerivedTotal::product(&json!("3"), &json!(4)), Some(json!(12)));
    }

    #[test]
    fn test_product_of_floats() {
        let total = DerivedTotal::product(&json!(2.5), &json!(4)).unwrap();
        assert_eq!(total.as_f64(), Some(10.0));
    }

    #[test]
    fn test_product_requires_both_numbers() {
        assert_eq!(DerivedTotal::product(&json!(""), &json!(4)), None);
        assert_eq!(DerivedTotal::product(&json!(null), &json!(4)), None);
    }

    #[test]
    fn test_apply_uses_pending_over_clean_values() {
        let clean = |field: &str| match field {
            "amountInBag" => Some(json!(1)),
            "pricePerBag" => Some(json!(10)),
            _ => None,
        };
        let mut edits = PendingEdits::default();

        edits.apply("amountInBag", json!(100), &[TOTAL], clean);
        assert_eq!(edits.get("priceInTotal"), Some(&json!(1000)));

        edits.apply("pricePerBag", json!(2000), &[TOTAL], clean);
        assert_eq!(edits.get("priceInTotal"), Some(&json!(200000)));
    }

    #[test]
    fn test_apply_ignores_unrelated_fields() {
        let mut edits = PendingEdits::default();
        edits.apply("remark", json!("half paid"), &[TOTAL], |_| Some(json!(5)));
        assert_eq!(edits.len(), 1);
        assert!(edits.get("priceInTotal").is_none());
    }

    #[test]
    fn test_acknowledge_keeps_newer_edits() {
        let mut edits = PendingEdits::default();
        edits.set("paid", json!(true));
        edits.set("remark", json!("x"));
        let sent = edits.clone();
        edits.set("remark", json!("y"));

        edits.acknowledge(&sent);
        assert_eq!(edits.to_json(), json!({"remark": "y"}));
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(" 100 "), json!(100));
        assert_eq!(parse_input("2.5"), json!(2.5));
        assert_eq!(parse_input(""), Value::Null);
        assert_eq!(parse_input("abc"), json!("abc"));
    }

    #[test]
    fn test_id_value_keeps_wire_form() {
        assert_eq!(id_value(&EntityId::Int(4)), json!(4));
        assert_eq!(id_value(&EntityId::from_string("p-1")), json!("p-1"));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(Some(&json!(200000.0))), "200000");
        assert_eq!(display_value(Some(&json!(2.5))), "2.5");
        assert_eq!(display_value(Some(&json!("x"))), "x");
        assert_eq!(display_value(None), "");
    }

    #[test]
    fn test_draft_round_trip_into_request() {
        #[derive(serde::Deserialize, serde::Serialize, Default)]
        #[serde(rename_all = "camelCase")]
        struct Draft {
            amount_in_bag: f64,
            price_per_bag: f64,
            price_in_total: f64,
        }

        let mut draft = PendingEdits::from_json(serde_json::to_value(Draft::default()).unwrap());
        draft.apply("amountInBag", json!(100), &[TOTAL], |_| None);
        draft.apply("pricePerBag", json!(2000), &[TOTAL], |_| None);

        let decoded: Draft = draft.decode().unwrap();
        assert_eq!(decoded.price_in_total, 200000.0);
    }
}
