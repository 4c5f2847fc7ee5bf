//! Field descriptors and the validated mapping between record shapes.
//!
//! A [`Mapping`] is the static configuration that connects an external
//! record shape (arbitrary string keys from a data source) to an internal
//! one (named fields with declared semantic types). It is validated once at
//! construction and never mutated afterwards, so sharing it across threads
//! is always safe.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The semantic type declared for an internal field.
///
/// External values are untyped; decoding coerces them into one of these
/// four kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    /// Free text. Any scalar coerces via its canonical display form.
    #[serde(rename = "string", alias = "text")]
    Text,
    /// Floating-point number.
    #[serde(rename = "number")]
    Number,
    /// Boolean flag. See the codec's boolean rules for coercion semantics.
    #[serde(rename = "boolean", alias = "bool")]
    Boolean,
    /// An instant in time, carried internally as UTC and serialized as
    /// canonical ISO 8601.
    #[serde(rename = "date", alias = "datetime")]
    Date,
}

impl SemanticType {
    /// Returns the canonical name used in mapping files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Text => "string",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    /// Parse a semantic type name (case-insensitive, common synonyms allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" => Ok(SemanticType::Text),
            "number" => Ok(SemanticType::Number),
            "boolean" | "bool" => Ok(SemanticType::Boolean),
            "date" | "datetime" => Ok(SemanticType::Date),
            _ => Err(ModelError::UnknownSemanticType { raw: s.to_string() }),
        }
    }
}

/// One entry of a mapping: connects an internal field to an external key
/// and declares the field's semantic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name in the internal record shape.
    pub internal_name: String,
    /// Key in the external record shape.
    pub external_name: String,
    /// Declared type of the internal field.
    pub semantic_type: SemanticType,
}

impl FieldDescriptor {
    pub fn new(
        internal_name: impl Into<String>,
        external_name: impl Into<String>,
        semantic_type: SemanticType,
    ) -> Self {
        Self {
            internal_name: internal_name.into(),
            external_name: external_name.into(),
            semantic_type,
        }
    }
}

/// A validated, immutable set of field descriptors.
///
/// Construction enforces that the descriptors form a bijection between
/// internal and external names: no duplicate names on either side, no
/// empty names. A mapping that deserializes successfully has passed the
/// same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDescriptor>", into = "Vec<FieldDescriptor>")]
pub struct Mapping {
    fields: Vec<FieldDescriptor>,
}

impl Mapping {
    /// Build a mapping from descriptors, validating the bijection invariant.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, ModelError> {
        let mut internal_seen = BTreeSet::new();
        let mut external_seen = BTreeSet::new();
        for (position, field) in fields.iter().enumerate() {
            if field.internal_name.trim().is_empty() || field.external_name.trim().is_empty() {
                return Err(ModelError::EmptyFieldName { position });
            }
            if !internal_seen.insert(field.internal_name.as_str()) {
                return Err(ModelError::DuplicateInternalName {
                    name: field.internal_name.clone(),
                });
            }
            if !external_seen.insert(field.external_name.as_str()) {
                return Err(ModelError::DuplicateExternalName {
                    name: field.external_name.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    /// Descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a descriptor by internal field name.
    pub fn by_internal(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.internal_name == name)
    }

    /// Look up a descriptor by external key name.
    pub fn by_external(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.external_name == name)
    }
}

impl TryFrom<Vec<FieldDescriptor>> for Mapping {
    type Error = ModelError;

    fn try_from(fields: Vec<FieldDescriptor>) -> Result<Self, Self::Error> {
        Mapping::new(fields)
    }
}

impl From<Mapping> for Vec<FieldDescriptor> {
    fn from(mapping: Mapping) -> Self {
        mapping.fields
    }
}

/// The untyped variant of [`Mapping`]: a pure key rename with no declared
/// types and no coercion. Used when the caller already guarantees that
/// value types line up on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RenamePair>", into = "Vec<RenamePair>")]
pub struct RenameMapping {
    pairs: Vec<RenamePair>,
}

/// One internal/external name pair of a [`RenameMapping`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePair {
    pub internal_name: String,
    pub external_name: String,
}

impl RenamePair {
    pub fn new(internal_name: impl Into<String>, external_name: impl Into<String>) -> Self {
        Self {
            internal_name: internal_name.into(),
            external_name: external_name.into(),
        }
    }
}

impl RenameMapping {
    /// Build a rename mapping, validating the same bijection invariant as
    /// the typed [`Mapping`].
    pub fn new(pairs: Vec<RenamePair>) -> Result<Self, ModelError> {
        let mut internal_seen = BTreeSet::new();
        let mut external_seen = BTreeSet::new();
        for (position, pair) in pairs.iter().enumerate() {
            if pair.internal_name.trim().is_empty() || pair.external_name.trim().is_empty() {
                return Err(ModelError::EmptyFieldName { position });
            }
            if !internal_seen.insert(pair.internal_name.as_str()) {
                return Err(ModelError::DuplicateInternalName {
                    name: pair.internal_name.clone(),
                });
            }
            if !external_seen.insert(pair.external_name.as_str()) {
                return Err(ModelError::DuplicateExternalName {
                    name: pair.external_name.clone(),
                });
            }
        }
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl TryFrom<Vec<RenamePair>> for RenameMapping {
    type Error = ModelError;

    fn try_from(pairs: Vec<RenamePair>) -> Result<Self, Self::Error> {
        RenameMapping::new(pairs)
    }
}

impl From<RenameMapping> for Vec<RenamePair> {
    fn from(mapping: RenameMapping) -> Self {
        mapping.pairs
    }
}
