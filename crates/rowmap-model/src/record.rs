//! Record shapes on both sides of the codec.
//!
//! An [`ExternalRecord`] is the loosely typed shape produced by a data
//! source (JSON scalars keyed by arbitrary strings). An [`InternalRecord`]
//! carries [`FieldValue`]s keyed by internal field names. Both are plain
//! owned values with no interior mutability; each codec call allocates its
//! own output, so records are freely shareable and disposable.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::descriptor::SemanticType;

/// A typed internal field value.
///
/// `Null` is the explicit absent marker produced when a lenient decode
/// finds no external value for a field. It is distinct from the field being
/// missing from the record entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Null,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The semantic type this value inhabits, or `None` for the absent
    /// marker.
    pub fn semantic_type(&self) -> Option<SemanticType> {
        match self {
            FieldValue::Text(_) => Some(SemanticType::Text),
            FieldValue::Number(_) => Some(SemanticType::Number),
            FieldValue::Boolean(_) => Some(SemanticType::Boolean),
            FieldValue::Date(_) => Some(SemanticType::Date),
            FieldValue::Null => None,
        }
    }

    /// Render this value as a JSON scalar.
    ///
    /// Dates become canonical ISO 8601 strings in UTC (`Z` suffix,
    /// subseconds only when present). Whole numbers are emitted as JSON
    /// integers so that values which arrived as integers leave as integers.
    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::Text(s) => JsonValue::String(s.clone()),
            FieldValue::Number(n) => number_to_json(*n),
            FieldValue::Boolean(b) => JsonValue::Bool(*b),
            FieldValue::Date(d) => {
                JsonValue::String(d.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            FieldValue::Null => JsonValue::Null,
        }
    }
}

/// Emit a whole-valued f64 as a JSON integer, everything else as a float.
fn number_to_json(n: f64) -> JsonValue {
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT {
        return JsonValue::from(n as i64);
    }
    match serde_json::Number::from_f64(n) {
        Some(num) => JsonValue::Number(num),
        None => JsonValue::Null,
    }
}

/// A record in the external shape: arbitrary string keys mapped to untyped
/// JSON scalars, as received from a data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExternalRecord {
    entries: BTreeMap<String, JsonValue>,
}

impl ExternalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: JsonValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.entries.iter()
    }

    /// Render as a JSON object value.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl FromIterator<(String, JsonValue)> for ExternalRecord {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, JsonValue>> for ExternalRecord {
    fn from(entries: BTreeMap<String, JsonValue>) -> Self {
        Self { entries }
    }
}

/// A record in the internal shape: typed values keyed by internal field
/// names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl InternalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Render as a JSON object, using each field's [`FieldValue::to_json`]
    /// form.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl FromIterator<(String, FieldValue)> for InternalRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn whole_numbers_render_as_integers() {
        assert_eq!(FieldValue::Number(25.0).to_json(), JsonValue::from(25));
        assert_eq!(
            FieldValue::Number(2.5).to_json(),
            JsonValue::from(2.5_f64)
        );
    }

    #[test]
    fn dates_render_as_canonical_iso8601() {
        let instant = Utc.with_ymd_and_hms(2025, 8, 13, 10, 0, 0).unwrap();
        assert_eq!(
            FieldValue::Date(instant).to_json(),
            JsonValue::String("2025-08-13T10:00:00Z".to_string())
        );
    }

    #[test]
    fn external_record_deserializes_from_json_object() {
        let record: ExternalRecord =
            serde_json::from_str(r#"{"user_id": 1, "name": "ada"}"#).expect("valid record");
        assert_eq!(record.get("user_id"), Some(&JsonValue::from(1)));
        assert_eq!(record.len(), 2);
    }
}
