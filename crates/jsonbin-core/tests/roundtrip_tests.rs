use jsonbin_core::{decode, decode_value, encode};
use serde_json::Value;

/// Assert that encode → decode roundtrips to the same JSON value, including
/// key order (compared via the compact serialization).
fn assert_roundtrip(json: &str) {
    let cbor = encode(json).expect("encode failed");
    let decoded = decode(&cbor).expect("decode failed");
    let original: Value = serde_json::from_str(json).unwrap();
    let roundtripped: Value = serde_json::from_str(&decoded).unwrap();
    assert_eq!(
        original, roundtripped,
        "Roundtrip failed:\n  input JSON: {json}\n  CBOR:       {cbor:02x?}\n  output JSON: {decoded}"
    );
    assert_eq!(
        serde_json::to_string(&original).unwrap(),
        decoded,
        "Key order changed for {json}"
    );
}

// ============================================================================
// Primitive Roundtrips
// ============================================================================

#[test]
fn roundtrip_null() {
    assert_roundtrip("null");
}

#[test]
fn roundtrip_bool_true() {
    assert_roundtrip("true");
}

#[test]
fn roundtrip_bool_false() {
    assert_roundtrip("false");
}

#[test]
fn roundtrip_integer() {
    assert_roundtrip("42");
}

#[test]
fn roundtrip_negative_integer() {
    assert_roundtrip("-7");
}

#[test]
fn roundtrip_integer_extremes() {
    assert_roundtrip("18446744073709551615");
    assert_roundtrip("-9223372036854775808");
}

#[test]
fn roundtrip_float() {
    assert_roundtrip("3.14");
}

#[test]
fn roundtrip_negative_float() {
    assert_roundtrip("-0.5");
}

#[test]
fn roundtrip_zero() {
    assert_roundtrip("0");
}

#[test]
fn roundtrip_string() {
    assert_roundtrip(r#""hello""#);
}

#[test]
fn roundtrip_empty_string() {
    assert_roundtrip(r#""""#);
}

#[test]
fn roundtrip_string_with_escapes() {
    assert_roundtrip(r#""line1\nline2\t\"quoted\" \\ \u0000""#);
}

#[test]
fn roundtrip_unicode_string() {
    assert_roundtrip(r#""café 你好 🎉""#);
}

// ============================================================================
// Number kind preservation
// ============================================================================

#[test]
fn integer_stays_integer() {
    let value = decode_value(&encode("42").unwrap()).unwrap();
    assert!(value.is_u64());
    assert_eq!(value.as_u64(), Some(42));
}

#[test]
fn negative_integer_stays_integer() {
    let value = decode_value(&encode("-42").unwrap()).unwrap();
    assert!(value.is_i64());
}

#[test]
fn whole_float_stays_float() {
    let value = decode_value(&encode("2.0").unwrap()).unwrap();
    assert!(value.is_f64());
    assert_eq!(decode(&encode("2.0").unwrap()).unwrap(), "2.0");
}

#[test]
fn mixed_number_kinds_in_array() {
    let value = decode_value(&encode("[1, 1.0, -1, -1.0]").unwrap()).unwrap();
    let arr = value.as_array().unwrap();
    assert!(arr[0].is_u64());
    assert!(arr[1].is_f64());
    assert!(arr[2].is_i64());
    assert!(arr[3].is_f64());
}

// ============================================================================
// Object Roundtrips
// ============================================================================

#[test]
fn roundtrip_flat_object() {
    assert_roundtrip(r#"{"name":"Alice","age":30,"active":true}"#);
}

#[test]
fn roundtrip_object_with_null() {
    assert_roundtrip(r#"{"name":"Alice","email":null}"#);
}

#[test]
fn roundtrip_nested_object() {
    assert_roundtrip(r#"{"server":{"host":"localhost","port":8080}}"#);
}

#[test]
fn roundtrip_unsorted_keys() {
    assert_roundtrip(r#"{"zeta":1,"alpha":2,"mid":3}"#);
}

#[test]
fn roundtrip_empty_object() {
    assert_roundtrip("{}");
}

#[test]
fn roundtrip_nested_empty_object() {
    assert_roundtrip(r#"{"meta":{}}"#);
}

#[test]
fn roundtrip_keys_needing_escapes() {
    assert_roundtrip(r#"{"":0,"with space":1,"a\"b":2,"ключ":3}"#);
}

// ============================================================================
// Array Roundtrips
// ============================================================================

#[test]
fn roundtrip_empty_array() {
    assert_roundtrip("[]");
}

#[test]
fn roundtrip_mixed_array() {
    assert_roundtrip(r#"[1,"two",3.5,null,false,{"k":"v"},[[]]]"#);
}

#[test]
fn roundtrip_array_of_objects() {
    assert_roundtrip(
        r#"{"users":[{"id":1,"name":"Alice","role":"admin"},{"id":2,"name":"Bob","role":"user"}]}"#,
    );
}

#[test]
fn roundtrip_mixed_document() {
    assert_roundtrip(r#"{"a": 1, "b": [true, null, "x"]}"#);
}

// ============================================================================
// Larger documents
// ============================================================================

#[test]
fn roundtrip_deeply_nested_arrays() {
    let json = format!("{}1{}", "[".repeat(100), "]".repeat(100));
    assert_roundtrip(&json);
}

#[test]
fn roundtrip_long_string() {
    let s = "x".repeat(70_000);
    assert_roundtrip(&format!("\"{s}\""));
}

#[test]
fn roundtrip_wide_object() {
    let mut map = serde_json::Map::new();
    for i in 0..1_000 {
        map.insert(format!("key{i}"), Value::from(i));
    }
    assert_roundtrip(&Value::Object(map).to_string());
}

#[test]
fn roundtrip_realistic_payload() {
    assert_roundtrip(
        r#"{
            "name": "build-cache",
            "version": 7,
            "updated": "2026-02-15T10:00:00.000Z",
            "limits": {"max_entries": 100000, "max_bytes": 1073741824, "ttl_secs": 3600},
            "entries": [
                {
                    "key": "target/debug/deps/libserde.rlib",
                    "size": 5242880,
                    "hits": 0,
                    "ratio": 0.75,
                    "tags": ["debug", "x86_64"],
                    "pinned": false,
                    "evicted_at": null
                },
                {"key": "", "size": 0, "hits": -1, "ratio": 1.0, "tags": [], "pinned": true, "evicted_at": null}
            ],
            "notes": null
        }"#,
    );
}
