//! The coercion kernel: one untyped external value to one typed field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;

use rowmap_model::{
    BooleanRule, DecodeOptions, FieldDescriptor, FieldValue, MissingKeyRule, SemanticType,
};

use crate::error::CoercionError;

/// Coerce one raw external value to the field's declared semantic type.
///
/// `raw` is `None` when the external key is absent; an explicit JSON null
/// is treated the same way. Missing values are resolved by the options'
/// missing-key rule, except booleans under the truthy rule, where absence
/// is falsy and coerces to `false`.
pub(crate) fn coerce_field(
    descriptor: &FieldDescriptor,
    raw: Option<&JsonValue>,
    options: &DecodeOptions,
) -> Result<FieldValue, CoercionError> {
    let present = match raw {
        Some(JsonValue::Null) | None => None,
        Some(value) => Some(value),
    };
    let Some(value) = present else {
        if descriptor.semantic_type == SemanticType::Boolean
            && options.booleans == BooleanRule::Truthy
        {
            return Ok(FieldValue::Boolean(false));
        }
        return match options.missing_keys {
            MissingKeyRule::NullMarker => Ok(FieldValue::Null),
            MissingKeyRule::Error => Err(CoercionError::new(
                &descriptor.internal_name,
                descriptor.semantic_type,
                JsonValue::Null,
            )),
        };
    };

    match descriptor.semantic_type {
        SemanticType::Text => coerce_text(descriptor, value),
        SemanticType::Number => coerce_number(descriptor, value),
        SemanticType::Boolean => coerce_boolean(descriptor, value, options.booleans),
        SemanticType::Date => coerce_date(descriptor, value),
    }
}

fn coerce_text(descriptor: &FieldDescriptor, value: &JsonValue) -> Result<FieldValue, CoercionError> {
    match value {
        JsonValue::String(s) => Ok(FieldValue::Text(s.clone())),
        JsonValue::Number(n) => Ok(FieldValue::Text(n.to_string())),
        JsonValue::Bool(b) => Ok(FieldValue::Text(b.to_string())),
        _ => Err(error_for(descriptor, value)),
    }
}

fn coerce_number(
    descriptor: &FieldDescriptor,
    value: &JsonValue,
) -> Result<FieldValue, CoercionError> {
    match value {
        JsonValue::Number(n) => n
            .as_f64()
            .map(FieldValue::Number)
            .ok_or_else(|| error_for(descriptor, value)),
        JsonValue::String(s) => match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(FieldValue::Number(n)),
            _ => Err(error_for(descriptor, value)),
        },
        _ => Err(error_for(descriptor, value)),
    }
}

fn coerce_boolean(
    descriptor: &FieldDescriptor,
    value: &JsonValue,
    rule: BooleanRule,
) -> Result<FieldValue, CoercionError> {
    match rule {
        BooleanRule::Truthy => Ok(FieldValue::Boolean(is_truthy(value))),
        BooleanRule::Strict => match value {
            JsonValue::Bool(b) => Ok(FieldValue::Boolean(*b)),
            JsonValue::String(s) => match s.trim().to_lowercase().as_str() {
                "true" => Ok(FieldValue::Boolean(true)),
                "false" => Ok(FieldValue::Boolean(false)),
                _ => Err(error_for(descriptor, value)),
            },
            _ => Err(error_for(descriptor, value)),
        },
    }
}

fn coerce_date(descriptor: &FieldDescriptor, value: &JsonValue) -> Result<FieldValue, CoercionError> {
    match value {
        JsonValue::String(s) => parse_instant(s)
            .map(FieldValue::Date)
            .ok_or_else(|| error_for(descriptor, value)),
        _ => Err(error_for(descriptor, value)),
    }
}

/// Truthiness of an untyped value: empty string, zero, and false are
/// falsy; everything else present is truthy. Lossy and non-invertible.
fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Parse an ISO 8601 instant.
///
/// Accepts a full RFC 3339 timestamp (offset normalized to UTC), a naive
/// `YYYY-MM-DDTHH:MM:SS[.frac]` datetime interpreted as UTC, or a plain
/// `YYYY-MM-DD` date interpreted as midnight UTC.
pub(crate) fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

fn error_for(descriptor: &FieldDescriptor, raw: &JsonValue) -> CoercionError {
    CoercionError::new(
        &descriptor.internal_name,
        descriptor.semantic_type,
        raw.clone(),
    )
}
