use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a remote record.
///
/// The backend hands out integer ids for most collections, but some
/// endpoints serialize them as strings. Both forms compare by their
/// textual representation when matched against UI selections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl EntityId {
    /// Convert the id to its textual form (used in URLs and `<select>` values)
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Parse an id coming from a form control. Numeric text becomes `Int`.
    pub fn from_string(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(value) => EntityId::Int(value),
            Err(_) => EntityId::Text(s.to_string()),
        }
    }

    /// True when both ids render to the same text (`7` matches `"7"`)
    pub fn matches(&self, other: &str) -> bool {
        self.as_string() == other
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(value) => write!(f, "{}", value),
            EntityId::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        EntityId::Int(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_both_forms() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "a1b2"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::Int(7), EntityId::Text("a1b2".into())]);
    }

    #[test]
    fn test_from_string_prefers_integer() {
        assert_eq!(EntityId::from_string("42"), EntityId::Int(42));
        assert_eq!(EntityId::from_string("x-42"), EntityId::Text("x-42".into()));
    }

    #[test]
    fn test_matches_textual_form() {
        assert!(EntityId::Int(7).matches("7"));
        assert!(!EntityId::Int(7).matches("8"));
    }
}
