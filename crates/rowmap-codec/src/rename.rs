//! The untyped rename codec.
//!
//! A pure key rename over loosely typed records: values are carried
//! verbatim with no coercion, so no type errors are possible. Both sides
//! of this codec use the same loosely typed [`ExternalRecord`] shape; only
//! the keys change. Use it when the caller already guarantees that value
//! types line up.

use rowmap_model::{ExternalRecord, RenameMapping};

/// Rename external keys to internal field names.
///
/// Keys absent from the input are skipped, so the output contains exactly
/// the pairs that were present.
pub fn decode(external: &ExternalRecord, mapping: &RenameMapping) -> ExternalRecord {
    let mut record = ExternalRecord::new();
    for pair in mapping.pairs() {
        if let Some(value) = external.get(&pair.external_name) {
            record.insert(pair.internal_name.clone(), value.clone());
        }
    }
    record
}

/// Rename internal field names back to external keys. Exact inverse of
/// [`decode`] for every key present in the record.
pub fn encode(internal: &ExternalRecord, mapping: &RenameMapping) -> ExternalRecord {
    let mut record = ExternalRecord::new();
    for pair in mapping.pairs() {
        if let Some(value) = internal.get(&pair.internal_name) {
            record.insert(pair.external_name.clone(), value.clone());
        }
    }
    record
}
