//! Error type for value coercion.

use serde_json::Value as JsonValue;
use thiserror::Error;

use rowmap_model::SemanticType;

/// A value could not be coerced to its declared semantic type.
///
/// Raised by decode and propagated to the immediate caller; the codec does
/// no I/O, so there is no transient-failure class and nothing is retried.
/// The caller decides whether to default, drop the field, or abort.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot coerce field \"{field}\" to {expected}: {raw}")]
pub struct CoercionError {
    /// Internal name of the field that failed.
    pub field: String,
    /// The semantic type declared for the field.
    pub expected: SemanticType,
    /// The raw external value that failed to coerce. `null` when the key
    /// was absent and the missing-key rule demands an error.
    pub raw: JsonValue,
}

impl CoercionError {
    pub fn new(field: impl Into<String>, expected: SemanticType, raw: JsonValue) -> Self {
        Self {
            field: field.into(),
            expected,
            raw,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoercionError>;
