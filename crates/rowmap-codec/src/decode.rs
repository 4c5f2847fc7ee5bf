//! Typed decode: external record to internal record.

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

use rowmap_model::{DecodeOptions, ExternalRecord, InternalRecord, Mapping};

use crate::coerce::coerce_field;
use crate::error::CoercionError;

/// Decode an external record with default (lenient) options.
///
/// See [`decode_with`] for the full semantics.
pub fn decode(external: &ExternalRecord, mapping: &Mapping) -> Result<InternalRecord, CoercionError> {
    decode_with(external, mapping, &DecodeOptions::default())
}

/// Decode an external record into the internal shape described by the
/// mapping, coercing every value to its declared semantic type.
///
/// Decoding is atomic: the first field that fails to coerce aborts the
/// whole call and no partial record is returned. Under the default
/// missing-key rule an absent external key yields the explicit absent
/// marker rather than an error, so partial source records decode cleanly.
pub fn decode_with(
    external: &ExternalRecord,
    mapping: &Mapping,
    options: &DecodeOptions,
) -> Result<InternalRecord, CoercionError> {
    let mut record = InternalRecord::new();
    for descriptor in mapping.fields() {
        let raw = external.get(&descriptor.external_name);
        let value = coerce_field(descriptor, raw, options)?;
        trace!(
            field = %descriptor.internal_name,
            semantic_type = %descriptor.semantic_type,
            "coerced field"
        );
        record.insert(descriptor.internal_name.clone(), value);
    }
    debug!(fields = record.len(), "decoded record");
    Ok(record)
}

/// Interpret a JSON object already keyed by internal field names as an
/// [`InternalRecord`], coercing each value to its declared type.
///
/// Fields absent from the object are omitted from the result (not set to
/// the absent marker), so a later [`crate::encode`] leaves them out of the
/// external payload as well.
pub fn decode_internal(
    object: &Map<String, JsonValue>,
    mapping: &Mapping,
    options: &DecodeOptions,
) -> Result<InternalRecord, CoercionError> {
    let mut record = InternalRecord::new();
    for descriptor in mapping.fields() {
        let Some(raw) = object.get(&descriptor.internal_name) else {
            continue;
        };
        let value = coerce_field(descriptor, Some(raw), options)?;
        record.insert(descriptor.internal_name.clone(), value);
    }
    Ok(record)
}
