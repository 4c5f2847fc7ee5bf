//! Tests for the untyped rename codec.

use serde_json::json;

use rowmap_codec::rename;
use rowmap_model::{ExternalRecord, RenameMapping, RenamePair};

fn user_rename() -> RenameMapping {
    RenameMapping::new(vec![
        RenamePair::new("userId", "user_id"),
        RenamePair::new("fullName", "full_name"),
    ])
    .expect("valid rename mapping")
}

fn record(value: serde_json::Value) -> ExternalRecord {
    serde_json::from_value(value).expect("valid record")
}

#[test]
fn rename_round_trips_exactly() {
    let external = record(json!({"user_id": 1, "full_name": "Ada"}));
    let internal = rename::decode(&external, &user_rename());
    assert_eq!(internal.get("userId"), Some(&json!(1)));
    assert_eq!(internal.get("fullName"), Some(&json!("Ada")));
    assert_eq!(rename::encode(&internal, &user_rename()), external);
}

#[test]
fn rename_carries_values_verbatim() {
    // No coercion: whatever the value is, it passes through untouched.
    let external = record(json!({"user_id": "0001", "full_name": null}));
    let internal = rename::decode(&external, &user_rename());
    assert_eq!(internal.get("userId"), Some(&json!("0001")));
    assert_eq!(internal.get("fullName"), Some(&serde_json::Value::Null));
}

#[test]
fn rename_skips_absent_keys() {
    let external = record(json!({"user_id": 1}));
    let internal = rename::decode(&external, &user_rename());
    assert_eq!(internal.len(), 1);
    assert!(!internal.contains("fullName"));
    // Keys outside the mapping are dropped as well.
    let external = record(json!({"user_id": 1, "extra": true}));
    let internal = rename::decode(&external, &user_rename());
    assert!(!internal.contains("extra"));
}
