//! Tests for the typed codec semantics.

use chrono::{TimeZone, Utc};
use serde_json::{Value as JsonValue, json};

use rowmap_codec::{decode, decode_internal, decode_with, encode};
use rowmap_model::{
    BooleanRule, DecodeOptions, ExternalRecord, FieldDescriptor, FieldValue, Mapping,
    MissingKeyRule, SemanticType,
};

fn user_mapping() -> Mapping {
    Mapping::new(vec![
        FieldDescriptor::new("name", "full_name", SemanticType::Text),
        FieldDescriptor::new("age", "age", SemanticType::Number),
        FieldDescriptor::new("active", "is_active", SemanticType::Boolean),
        FieldDescriptor::new("createdAt", "created_at", SemanticType::Date),
    ])
    .expect("valid mapping")
}

fn external(value: JsonValue) -> ExternalRecord {
    serde_json::from_value(value).expect("valid external record")
}

#[test]
fn decodes_a_well_typed_record() {
    let record = external(json!({
        "full_name": "Ada Lovelace",
        "age": 25,
        "is_active": true,
        "created_at": "2025-08-13T10:00:00Z",
    }));
    let decoded = decode(&record, &user_mapping()).expect("decode");
    assert_eq!(decoded.get("name"), Some(&FieldValue::Text("Ada Lovelace".into())));
    assert_eq!(decoded.get("age"), Some(&FieldValue::Number(25.0)));
    assert_eq!(decoded.get("active"), Some(&FieldValue::Boolean(true)));
    assert_eq!(
        decoded.get("createdAt"),
        Some(&FieldValue::Date(
            Utc.with_ymd_and_hms(2025, 8, 13, 10, 0, 0).unwrap()
        ))
    );
}

#[test]
fn numeric_strings_parse_to_numbers() {
    let mapping = Mapping::new(vec![FieldDescriptor::new("age", "age", SemanticType::Number)])
        .expect("valid mapping");
    let decoded = decode(&external(json!({"age": "25"})), &mapping).expect("decode");
    assert_eq!(decoded.get("age"), Some(&FieldValue::Number(25.0)));
}

#[test]
fn unparseable_number_names_the_field() {
    let mapping = Mapping::new(vec![FieldDescriptor::new("age", "age", SemanticType::Number)])
        .expect("valid mapping");
    let err = decode(&external(json!({"age": "abc"})), &mapping).unwrap_err();
    assert_eq!(err.field, "age");
    assert_eq!(err.expected, SemanticType::Number);
    assert_eq!(err.raw, json!("abc"));
    assert_eq!(
        err.to_string(),
        "cannot coerce field \"age\" to number: \"abc\""
    );
}

#[test]
fn decode_is_atomic() {
    // One bad field among good ones fails the whole decode; no partial
    // record escapes.
    let record = external(json!({
        "full_name": "Ada Lovelace",
        "age": "not a number",
        "is_active": true,
        "created_at": "2025-08-13T10:00:00Z",
    }));
    let err = decode(&record, &user_mapping()).unwrap_err();
    assert_eq!(err.field, "age");
}

#[test]
fn absent_keys_become_the_null_marker() {
    let decoded = decode(&external(json!({"age": 30})), &user_mapping()).expect("decode");
    assert_eq!(decoded.get("name"), Some(&FieldValue::Null));
    assert_eq!(decoded.get("createdAt"), Some(&FieldValue::Null));
    // A truthy boolean treats absence as falsy rather than absent.
    assert_eq!(decoded.get("active"), Some(&FieldValue::Boolean(false)));
}

#[test]
fn missing_key_rule_can_demand_presence() {
    let options = DecodeOptions::new().with_missing_keys(MissingKeyRule::Error);
    let err = decode_with(&external(json!({"age": 30})), &user_mapping(), &options).unwrap_err();
    assert_eq!(err.field, "name");
    assert_eq!(err.raw, JsonValue::Null);
}

#[test]
fn truthy_booleans_are_lossy() {
    let mapping = Mapping::new(vec![FieldDescriptor::new(
        "active",
        "active",
        SemanticType::Boolean,
    )])
    .expect("valid mapping");
    for raw in [json!(true), json!(1), json!("yes"), json!("0")] {
        let decoded = decode(&external(json!({"active": raw})), &mapping).expect("decode");
        assert_eq!(decoded.get("active"), Some(&FieldValue::Boolean(true)), "{raw}");
    }
    for raw in [json!(false), json!(0), json!(""), json!(null)] {
        let decoded = decode(&external(json!({"active": raw})), &mapping).expect("decode");
        assert_eq!(decoded.get("active"), Some(&FieldValue::Boolean(false)), "{raw}");
    }
}

#[test]
fn strict_booleans_reject_truthiness() {
    let mapping = Mapping::new(vec![FieldDescriptor::new(
        "active",
        "active",
        SemanticType::Boolean,
    )])
    .expect("valid mapping");
    let options = DecodeOptions::new().with_booleans(BooleanRule::Strict);

    let decoded =
        decode_with(&external(json!({"active": "TRUE"})), &mapping, &options).expect("decode");
    assert_eq!(decoded.get("active"), Some(&FieldValue::Boolean(true)));

    let err = decode_with(&external(json!({"active": 1})), &mapping, &options).unwrap_err();
    assert_eq!(err.field, "active");
    assert_eq!(err.expected, SemanticType::Boolean);
}

#[test]
fn text_coerces_any_scalar() {
    let mapping = Mapping::new(vec![FieldDescriptor::new("note", "note", SemanticType::Text)])
        .expect("valid mapping");
    let decoded = decode(&external(json!({"note": 2.5})), &mapping).expect("decode");
    assert_eq!(decoded.get("note"), Some(&FieldValue::Text("2.5".into())));
    let decoded = decode(&external(json!({"note": false})), &mapping).expect("decode");
    assert_eq!(decoded.get("note"), Some(&FieldValue::Text("false".into())));
    // Arrays and objects are not scalar.
    assert!(decode(&external(json!({"note": [1, 2]})), &mapping).is_err());
}

#[test]
fn dates_normalize_offsets_to_utc() {
    let mapping = Mapping::new(vec![FieldDescriptor::new(
        "createdAt",
        "created_at",
        SemanticType::Date,
    )])
    .expect("valid mapping");
    let decoded = decode(
        &external(json!({"created_at": "2025-08-13T12:30:00+02:30"})),
        &mapping,
    )
    .expect("decode");
    assert_eq!(
        decoded.get("createdAt"),
        Some(&FieldValue::Date(
            Utc.with_ymd_and_hms(2025, 8, 13, 10, 0, 0).unwrap()
        ))
    );
    let err = decode(&external(json!({"created_at": "next tuesday"})), &mapping).unwrap_err();
    assert_eq!(err.field, "createdAt");
    assert_eq!(err.expected, SemanticType::Date);
}

#[test]
fn encode_serializes_dates_and_omits_absent_fields() {
    let mut internal = rowmap_model::InternalRecord::new();
    internal.insert(
        "createdAt",
        FieldValue::Date(Utc.with_ymd_and_hms(2025, 8, 13, 10, 0, 0).unwrap()),
    );
    internal.insert("age", FieldValue::Number(25.0));
    // "name" and "active" are absent from the record entirely.
    let encoded = encode(&internal, &user_mapping());
    assert_eq!(
        encoded.get("created_at"),
        Some(&json!("2025-08-13T10:00:00Z"))
    );
    assert_eq!(encoded.get("age"), Some(&json!(25)));
    assert!(!encoded.contains("full_name"));
    assert!(!encoded.contains("is_active"));
    assert_eq!(encoded.len(), 2);
}

#[test]
fn encode_writes_null_for_the_absent_marker() {
    let mut internal = rowmap_model::InternalRecord::new();
    internal.insert("name", FieldValue::Null);
    let encoded = encode(&internal, &user_mapping());
    assert_eq!(encoded.get("full_name"), Some(&JsonValue::Null));
}

#[test]
fn internal_json_objects_decode_through_the_same_kernel() {
    let object = json!({
        "age": "41",
        "createdAt": "2025-08-13",
    });
    let JsonValue::Object(object) = object else {
        unreachable!();
    };
    let decoded =
        decode_internal(&object, &user_mapping(), &DecodeOptions::default()).expect("decode");
    assert_eq!(decoded.get("age"), Some(&FieldValue::Number(41.0)));
    assert_eq!(
        decoded.get("createdAt"),
        Some(&FieldValue::Date(
            Utc.with_ymd_and_hms(2025, 8, 13, 0, 0, 0).unwrap()
        ))
    );
    // Absent fields stay absent so a later encode omits them.
    assert!(!decoded.contains("name"));
}
