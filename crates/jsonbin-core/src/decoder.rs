//! CBOR Decoder — converts CBOR back into JSON.
//!
//! `ciborium` parses the bytes into its own item tree, which still carries
//! tags, byte strings and non-text keys. That tree is then mapped onto JSON:
//!
//! - Tags (including the 55799 self-describe prefix) are transparent
//! - Half, single and double precision floats become JSON floats
//! - `null` and `undefined` both become JSON `null`
//! - Integers outside the `u64`/`i64` range become floats
//!
//! # Key design decisions
//!
//! - **Offsets in errors**: read failures report the byte offset where reading
//!   stopped, so a corrupt file can be inspected with `xxd`.
//! - **Bounded nesting**: the reader gives up past [`MAX_DEPTH`] levels
//!   instead of overflowing the stack.
//! - **Non-JSON items are errors**: byte strings, non-text map keys and
//!   unassigned simple values are rejected; NaN and infinities become `null`.

use ciborium::de::{from_reader_with_recursion_limit, Error as ReadError};
use ciborium::value::{Integer, Value as CborValue};
use serde_json::{Map, Number, Value};

use crate::error::{ConvertError, Result};
use crate::types::{DocumentValue, MAX_DEPTH};

/// Decode a CBOR document into compact JSON text.
///
/// The output is minified — use `serde_json::to_string_pretty` on
/// [`decode_value`]'s result if human-readable JSON is needed.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let value = decode_value(bytes)?;
    Ok(serde_json::to_string(&value)?)
}

/// Decode a CBOR document into a value tree.
///
/// Exactly one top-level item must be present; trailing bytes are an error.
pub fn decode_value(bytes: &[u8]) -> Result<DocumentValue> {
    if bytes.is_empty() {
        return Err(decode_error(Some(0), "empty input"));
    }

    let mut rest = bytes;
    let parsed: std::result::Result<CborValue, _> =
        from_reader_with_recursion_limit(&mut rest, MAX_DEPTH);
    let stopped_at = bytes.len() - rest.len();
    let item = parsed.map_err(|err| read_error(err, stopped_at))?;

    if stopped_at < bytes.len() {
        return Err(decode_error(
            Some(stopped_at),
            format!(
                "{} trailing bytes after top-level item",
                bytes.len() - stopped_at
            ),
        ));
    }
    into_json(item)
}

fn decode_error(offset: Option<usize>, message: impl Into<String>) -> ConvertError {
    ConvertError::Decode {
        offset,
        message: message.into(),
    }
}

/// Reading from a slice only fails at the end of the input, so `Io` is
/// always truncation.
fn read_error(err: ReadError<std::io::Error>, stopped_at: usize) -> ConvertError {
    match err {
        ReadError::Io(_) => decode_error(Some(stopped_at), "unexpected end of input"),
        ReadError::Syntax(offset) => decode_error(Some(offset), "malformed CBOR item"),
        ReadError::Semantic(offset, message) => {
            decode_error(Some(offset.unwrap_or(stopped_at)), message)
        }
        ReadError::RecursionLimitExceeded => decode_error(
            Some(stopped_at),
            format!("nesting exceeds {} levels", MAX_DEPTH),
        ),
    }
}

/// Map a parsed item onto JSON. Depth is already bounded by the reader.
fn into_json(item: CborValue) -> Result<Value> {
    Ok(match item {
        CborValue::Null => Value::Null,
        CborValue::Bool(b) => Value::Bool(b),
        CborValue::Integer(n) => integer_value(n),
        CborValue::Float(f) => float_value(f),
        CborValue::Text(s) => Value::String(s),
        CborValue::Tag(_, inner) => into_json(*inner)?,
        CborValue::Array(items) => Value::Array(
            items
                .into_iter()
                .map(into_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        CborValue::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                // Duplicate keys: the last value wins.
                map.insert(map_key(key)?, into_json(value)?);
            }
            Value::Object(map)
        }
        other => {
            return Err(decode_error(
                None,
                format!("{} have no JSON equivalent", item_name(&other)),
            ))
        }
    })
}

/// Map keys must be text strings (optionally tagged).
fn map_key(key: CborValue) -> Result<String> {
    match key {
        CborValue::Text(s) => Ok(s),
        CborValue::Tag(_, inner) => map_key(*inner),
        other => Err(decode_error(
            None,
            format!("map key must be a text string, found {}", item_name(&other)),
        )),
    }
}

fn item_name(item: &CborValue) -> &'static str {
    match item {
        CborValue::Integer(_) => "integers",
        CborValue::Bytes(_) => "byte strings",
        CborValue::Float(_) => "floats",
        CborValue::Text(_) => "text strings",
        CborValue::Bool(_) => "booleans",
        CborValue::Null => "nulls",
        CborValue::Tag(..) => "tags",
        CborValue::Array(_) => "arrays",
        CborValue::Map(_) => "maps",
        _ => "items",
    }
}

/// Integers that fit neither `u64` nor `i64` (major type 1 below `i64::MIN`,
/// small bignums) fall back to a float, the same way serde_json parses
/// out-of-range JSON integers.
fn integer_value(n: Integer) -> Value {
    if let Ok(u) = u64::try_from(n) {
        Value::Number(Number::from(u))
    } else if let Ok(i) = i64::try_from(n) {
        Value::Number(Number::from(i))
    } else {
        float_value(i128::from(n) as f64)
    }
}

/// NaN and infinities have no JSON representation.
fn float_value(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}
