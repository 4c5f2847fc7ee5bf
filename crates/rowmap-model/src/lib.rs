//! Data model for the rowmap codecs.
//!
//! This crate defines the shapes on both sides of the field mapper:
//!
//! - **descriptor**: [`SemanticType`], [`FieldDescriptor`], and the
//!   validated [`Mapping`] / [`RenameMapping`] configuration types
//! - **record**: [`ExternalRecord`], [`InternalRecord`], and the typed
//!   [`FieldValue`]
//! - **options**: decode policy ([`DecodeOptions`])
//! - **error**: configuration errors ([`ModelError`])

pub mod descriptor;
pub mod error;
pub mod options;
pub mod record;

pub use descriptor::{FieldDescriptor, Mapping, RenameMapping, RenamePair, SemanticType};
pub use error::{ModelError, Result};
pub use options::{BooleanRule, DecodeOptions, MissingKeyRule};
pub use record::{ExternalRecord, FieldValue, InternalRecord};
