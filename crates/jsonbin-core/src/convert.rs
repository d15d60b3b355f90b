//! File-to-file conversion: JSON → CBOR ([`convert`]) and CBOR → JSON ([`restore`]).
//!
//! Effects happen in a fixed order: resolve both paths, read the input to
//! completion, parse/decode, then create the output and write it. Nothing is
//! created at the output path unless the input was read and parsed cleanly.
//! A write that fails part-way may leave a truncated output file.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::decoder::decode_value;
use crate::encoder::encode_value;
use crate::error::{ConvertError, Result};
use crate::path::resolve_path;
use crate::types::DocumentValue;

/// What a conversion read and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Resolved absolute input path.
    pub input: PathBuf,
    /// Resolved absolute output path.
    pub output: PathBuf,
    /// Size of the JSON side (input for `convert`, output for `restore`).
    pub json_bytes: usize,
    /// Size of the CBOR side.
    pub encoded_bytes: usize,
}

/// Convert the JSON document at `input` into CBOR at `output`.
///
/// Both paths may start with `~`. The output is created or truncated.
///
/// # Errors
///
/// - [`ConvertError::NotFound`] if a path cannot be resolved or opened
/// - [`ConvertError::Parse`] if the input is not valid JSON
/// - [`ConvertError::Io`] if reading or writing fails after opening
/// - [`ConvertError::Encode`] if the CBOR serializer fails
pub fn convert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConvertSummary> {
    let input = resolve_path(input)?;
    let output = resolve_path(output)?;
    debug!(input = %input.display(), output = %output.display(), "converting JSON to CBOR");

    let text = read_input(&input)?;
    let value: DocumentValue = serde_json::from_slice(&text)?;
    debug!(bytes = text.len(), "parsed JSON input");

    let encoded = encode_value(&value)?;
    write_output(&output, &encoded)?;
    debug!(bytes = encoded.len(), "wrote CBOR output");

    Ok(ConvertSummary {
        input,
        output,
        json_bytes: text.len(),
        encoded_bytes: encoded.len(),
    })
}

/// Convert the CBOR document at `input` back into pretty-printed JSON at `output`.
///
/// # Errors
///
/// Same as [`convert`], with [`ConvertError::Decode`] in place of
/// [`ConvertError::Parse`] for malformed input.
pub fn restore(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<ConvertSummary> {
    let input = resolve_path(input)?;
    let output = resolve_path(output)?;
    debug!(input = %input.display(), output = %output.display(), "converting CBOR to JSON");

    let encoded = read_input(&input)?;
    let value = decode_value(&encoded)?;
    debug!(bytes = encoded.len(), "decoded CBOR input");

    let mut json = serde_json::to_vec_pretty(&value)?;
    json.push(b'\n');
    write_output(&output, &json)?;
    debug!(bytes = json.len(), "wrote JSON output");

    Ok(ConvertSummary {
        input,
        output,
        json_bytes: json.len(),
        encoded_bytes: encoded.len(),
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| ConvertError::not_found(path, e))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(|e| ConvertError::io(path, e))?;
    Ok(buf)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::not_found(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| ConvertError::io(path, e))
}
