//! CBOR Encoder — converts JSON into Concise Binary Object Representation.
//!
//! The value tree is serialized by `ciborium`, wrapped in the self-describe
//! tag. What the output looks like follows from how `serde_json::Value`
//! serializes itself:
//!
//! - **Self-describe prefix**: every document starts with tag 55799 (`d9 d9 f7`)
//! - **Preferred encoding**: integer arguments and lengths use the shortest head,
//!   floats the narrowest of half/single/double that holds the value exactly
//! - **Integers stay integers**: `u64` → major 0, negative `i64` → major 1
//! - **Floats stay floats**: JSON floats are always major 7, so `1.0` and `1`
//!   remain distinguishable after a round-trip
//! - **Ordered maps**: definite-length, entries in insertion order
//!
//! # Example
//! ```
//! use jsonbin_core::encode;
//! let bytes = encode(r#"{"a":1}"#).unwrap();
//! assert_eq!(bytes, [0xd9, 0xd9, 0xf7, 0xa1, 0x61, b'a', 0x01]);
//! ```

use ciborium::tag::Required;

use crate::error::{ConvertError, Result};
use crate::types::{DocumentValue, SELF_DESCRIBE_TAG};

/// Encode a JSON string into a self-described CBOR document.
///
/// Returns [`ConvertError::Parse`] if the input is not valid JSON.
pub fn encode(json: &str) -> Result<Vec<u8>> {
    let value: DocumentValue = serde_json::from_str(json)?;
    encode_value(&value)
}

/// Encode an already-parsed document.
///
/// Every JSON value has a CBOR representation, so [`ConvertError::Encode`]
/// only surfaces if the serializer itself fails.
pub fn encode_value(value: &DocumentValue) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(64);
    ciborium::into_writer(&Required::<_, SELF_DESCRIBE_TAG>(value), &mut out).map_err(
        |err| match err {
            ciborium::ser::Error::Io(e) => ConvertError::Encode(e.to_string()),
            ciborium::ser::Error::Value(message) => ConvertError::Encode(message),
        },
    )?;
    Ok(out)
}
