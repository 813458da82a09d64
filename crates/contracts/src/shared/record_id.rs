use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable identifier of a backend record.
///
/// The backend serializes primary keys either as integers (`"id": 42`) or as
/// strings (UUIDs, slugs). Both decode into the same textual form so that
/// selection sets and URL templates never care which one a resource uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // numeric ids go back out as numbers
        match self.0.parse::<i64>() {
            Ok(n) if n.to_string() == self.0 => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Uint(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Uint(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[7, "a1b2", 18446744073709551615]"#).unwrap();
        assert_eq!(ids[0].as_str(), "7");
        assert_eq!(ids[1].as_str(), "a1b2");
        assert_eq!(ids[2].as_str(), "18446744073709551615");
    }

    #[test]
    fn test_numeric_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&RecordId::from(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&RecordId::from("007")).unwrap(), "\"007\"");
    }
}
