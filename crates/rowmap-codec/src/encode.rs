//! Typed encode: internal record to external record.

use tracing::debug;

use rowmap_model::{ExternalRecord, InternalRecord, Mapping};

/// Encode an internal record into the external shape described by the
/// mapping.
///
/// For every descriptor whose field is present in the record, the value is
/// serialized under the external key: dates become canonical ISO 8601
/// strings in UTC, the absent marker becomes JSON null, and text, number,
/// and boolean values pass through unchanged. Fields missing from the
/// record are omitted entirely, keeping external payloads minimal.
///
/// Encoding cannot fail: every internal value has a serialized form.
pub fn encode(internal: &InternalRecord, mapping: &Mapping) -> ExternalRecord {
    let mut record = ExternalRecord::new();
    for descriptor in mapping.fields() {
        if let Some(value) = internal.get(&descriptor.internal_name) {
            record.insert(descriptor.external_name.clone(), value.to_json());
        }
    }
    debug!(fields = record.len(), "encoded record");
    record
}
