//! Records, field values and per-resource schemas.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use contracts::enums::ResourceKind;
use contracts::shared::RecordId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Field values
// ============================================================================

/// Value of one record field as seen by filtering and sorting
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Number(f64),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Empty,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Text for search matching. Only textual fields take part in search.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Calendar date, datetimes are truncated to their UTC day
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::DateTime(dt) => Some(dt.date_naive()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Empty => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Date(_) | FieldValue::DateTime(_) => 3,
            FieldValue::Text(_) => 4,
        }
    }

    /// Ordering used by sortable columns. Empty values sort first.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            (a, b) if a.rank() == 3 && b.rank() == 3 => a.as_date().cmp(&b.as_date()),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl From<&RecordId> for FieldValue {
    fn from(value: &RecordId) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl<T> From<Option<T>> for FieldValue
where
    T: Into<FieldValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

// ============================================================================
// Schema
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Bool,
    Number,
    Date,
    /// Closed set of wire values (statuses, priorities)
    Choice(&'static [&'static str]),
}

/// Initial value of a field in a create draft
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Blank,
    Bool(bool),
    Text(&'static str),
    Number(f64),
}

/// Description of one field of a resource
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Included in free-text search
    pub searchable: bool,
    /// Offered as an equality filter
    pub filterable: bool,
    /// Must be non-blank before a draft is submitted
    pub required: bool,
    pub default: FieldDefault,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            searchable: false,
            filterable: false,
            required: false,
            default: FieldDefault::Blank,
        }
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_value(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    fn initial_value(&self) -> Value {
        match (self.default, self.kind) {
            (FieldDefault::Bool(b), _) => Value::Bool(b),
            (FieldDefault::Text(s), _) => Value::String(s.to_string()),
            (FieldDefault::Number(n), _) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            (FieldDefault::Blank, FieldKind::Bool) => Value::Bool(false),
            (FieldDefault::Blank, FieldKind::Text) | (FieldDefault::Blank, FieldKind::Choice(_)) => {
                Value::String(String::new())
            }
            (FieldDefault::Blank, _) => Value::Null,
        }
    }
}

/// Static description of one managed resource
#[derive(Debug)]
pub struct ResourceSchema {
    pub kind: ResourceKind,
    pub fields: &'static [FieldSpec],
    /// Field the date-range filter applies to
    pub date_field: Option<&'static str>,
}

impl ResourceSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn search_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.searchable).map(|f| f.name)
    }

    pub fn filter_fields(&self) -> impl Iterator<Item = &FieldSpec> + '_ {
        self.fields.iter().filter(|f| f.filterable)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> + '_ {
        self.fields.iter().filter(|f| f.required)
    }

    /// Resource carries the `is_active` lifecycle flag
    pub fn supports_activation(&self) -> bool {
        self.field("is_active").is_some()
    }

    pub fn default_draft(&self) -> Draft {
        let mut draft = Draft::default();
        for field in self.fields {
            draft.set(field.name, field.initial_value());
        }
        draft
    }
}

// ============================================================================
// Records
// ============================================================================

/// A row of a managed resource
pub trait ListRecord: Clone + Serialize + DeserializeOwned + 'static {
    fn schema() -> &'static ResourceSchema;

    fn id(&self) -> &RecordId;

    /// Value of a named field, `FieldValue::Empty` for unknown names
    fn field(&self, name: &str) -> FieldValue;

    fn is_active(&self) -> Option<bool> {
        match self.field("is_active") {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Editable snapshot of the record's current values
    fn to_draft(&self) -> Draft {
        Draft::from_record(self)
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Unsaved form data, serialized as the request body of create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(Map<String, Value>);

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a record without its id (the id travels in the URL)
    pub fn from_record<R: Serialize>(record: &R) -> Self {
        match serde_json::to_value(record) {
            Ok(Value::Object(mut map)) => {
                map.remove("id");
                Self(map)
            }
            Ok(_) => Self::default(),
            Err(e) => {
                log::warn!("Could not snapshot record into a draft: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Missing, null, whitespace-only string or empty array
    pub fn is_blank(&self, name: &str) -> bool {
        match self.0.get(name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(_) => false,
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Draft {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_vehicle_type::SCHEMA;
    use contracts::domain::a001_vehicle_type::aggregate::VehicleType;

    #[test]
    fn test_compare_orders_empty_first_and_text_case_insensitive() {
        assert_eq!(FieldValue::Empty.compare(&FieldValue::text("a")), Ordering::Less);
        assert_eq!(FieldValue::text("apple").compare(&FieldValue::text("Banana")), Ordering::Less);
        assert_eq!(FieldValue::Number(2.0).compare(&FieldValue::Number(10.0)), Ordering::Less);
    }

    #[test]
    fn test_compare_mixes_dates_and_datetimes() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let dt = DateTime::parse_from_rfc3339("2024-03-16T08:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(FieldValue::Date(d).compare(&FieldValue::DateTime(dt)), Ordering::Less);
    }

    #[test]
    fn test_draft_blankness() {
        let draft = Draft::new()
            .with("name", "  ")
            .with("capacity_kg", Value::Null)
            .with("is_active", false)
            .with("tags", Value::Array(vec![]));
        assert!(draft.is_blank("name"));
        assert!(draft.is_blank("capacity_kg"));
        assert!(draft.is_blank("tags"));
        assert!(draft.is_blank("missing"));
        assert!(!draft.is_blank("is_active"));
    }

    #[test]
    fn test_snapshot_drops_id() {
        let record = VehicleType {
            id: RecordId::from(4),
            name: "Tipper".into(),
            description: None,
            is_active: true,
            created_at: None,
        };
        let draft = record.to_draft();
        assert!(draft.get("id").is_none());
        assert_eq!(draft.get("name"), Some(&Value::String("Tipper".into())));
    }

    #[test]
    fn test_default_draft_uses_field_defaults() {
        let draft = SCHEMA.default_draft();
        assert_eq!(draft.get("name"), Some(&Value::String(String::new())));
        assert_eq!(draft.get("is_active"), Some(&Value::Bool(true)));
        assert!(SCHEMA.supports_activation());
    }
}
