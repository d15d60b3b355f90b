//! Value model shared by the encoder and decoder.
//!
//! Encoding and decoding go through `serde_json::Value` as the in-memory tree.
//! With serde_json's `preserve_order` feature, objects keep insertion order,
//! and `serde_json::Number` keeps integers (`i64`/`u64`) apart from floats
//! (`f64`), which is exactly the distinction CBOR major types 0/1 vs 7 make.

/// The parsed JSON document: null, bool, number, string, array or object.
pub type DocumentValue = serde_json::Value;

/// Tag 55799: "self-described CBOR". Written as `d9 d9 f7` at the start of
/// every encoded document.
pub const SELF_DESCRIBE_TAG: u64 = 55799;

/// Recursion limit handed to the CBOR reader. Arrays, maps and tags each
/// take one level.
pub(crate) const MAX_DEPTH: usize = 128;
