//! # jsonbin-core
//!
//! Pure-Rust conversion of JSON documents into **CBOR** (RFC 8949, Concise
//! Binary Object Representation) and back.
//!
//! CBOR is a self-describing binary format: every item carries its type, so a
//! file can be decoded without a schema. The wire format is handled by
//! `ciborium`; this crate decides how JSON maps onto it. Integers and floats
//! stay apart and object entries keep their original order, so a document
//! survives the round-trip structurally unchanged.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonbin_core::{decode, encode};
//!
//! // JSON → CBOR
//! let json = r#"{"a":1,"b":[true,null,"x"]}"#;
//! let cbor = encode(json).unwrap();
//! assert_eq!(&cbor[..3], &[0xd9, 0xd9, 0xf7]); // self-describe tag
//!
//! // CBOR → JSON (roundtrip)
//! let back = decode(&cbor).unwrap();
//! assert_eq!(back, json);
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — JSON → CBOR bytes
//! - [`decoder`] — CBOR bytes → JSON
//! - [`convert`](mod@convert) — file-to-file conversion in both directions
//! - [`path`] — `~` expansion and absolutization of command-line paths
//! - [`error`] — Error types for resolution, parse, I/O, encode and decode failures
//! - [`types`] — `DocumentValue` and the self-describe tag

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod path;
pub mod types;

pub use convert::{convert, restore, ConvertSummary};
pub use decoder::{decode, decode_value};
pub use encoder::{encode, encode_value};
pub use error::{ConvertError, Result};
pub use path::resolve_path;
pub use types::{DocumentValue, SELF_DESCRIBE_TAG};
