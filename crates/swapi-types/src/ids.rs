//! Opaque record identifiers.
//!
//! Fixture keys are plain scalars: the bundled data uses integers, but a
//! dataset may key its records with strings. Identifiers are compared by
//! equality only, and an integer key never equals a string key with the
//! same digits.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Primary key of a record, or a reference to one from another record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "bindings/")]
pub enum EntityId {
    /// Integer key.
    Number(i64),
    /// String key.
    Text(String),
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[1, "tatooine", 42]"#).unwrap();
        assert_eq!(
            ids,
            vec![EntityId::Number(1), EntityId::from("tatooine"), EntityId::Number(42)]
        );
    }

    #[test]
    fn number_and_text_keys_never_match() {
        assert_ne!(EntityId::from(1), EntityId::from("1"));
    }

    #[test]
    fn serializes_as_bare_scalar() {
        let json = serde_json::to_string(&EntityId::from(7)).unwrap();
        assert_eq!(json, "7");
        let json = serde_json::to_string(&EntityId::from("x")).unwrap();
        assert_eq!(json, r#""x""#);
    }
}
