//! Error types for mapping construction and validation.

use thiserror::Error;

/// Errors detected while constructing or validating a mapping.
///
/// These are configuration problems: a mapping is built once at startup,
/// so every variant here is intended to be fatal at that point rather than
/// caught per-record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two field descriptors claim the same external key.
    #[error("duplicate external name in mapping: {name}")]
    DuplicateExternalName { name: String },

    /// Two field descriptors claim the same internal field name.
    #[error("duplicate internal name in mapping: {name}")]
    DuplicateInternalName { name: String },

    /// A descriptor has an empty internal or external name.
    #[error("empty field name in mapping descriptor {position}")]
    EmptyFieldName { position: usize },

    /// A semantic type string did not match any recognized kind.
    #[error("unknown semantic type: {raw}")]
    UnknownSemanticType { raw: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
