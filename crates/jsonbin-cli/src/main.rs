//! `json2bin` — convert a JSON file into CBOR.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a JSON document to self-described CBOR
//! json2bin data.json data.cbor
//!
//! # Paths may start with ~
//! json2bin ~/exports/data.json ~/exports/data.cbor
//!
//! # Show each step on stderr
//! RUST_LOG=debug json2bin data.json data.cbor
//! ```
//!
//! Exits non-zero with a diagnostic on stderr if the input is missing, is not
//! valid JSON, or the output cannot be written.

use anyhow::Result;
use clap::Parser;
use jsonbin_cli::{describe_failure, init_tracing, log_summary};

#[derive(Parser)]
#[command(
    name = "json2bin",
    version,
    about = "Convert a JSON document into CBOR (RFC 8949)"
)]
struct Cli {
    /// JSON file to read
    input: String,
    /// Destination file (created or overwritten)
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let summary = jsonbin_core::convert(&cli.input, &cli.output)
        .map_err(|e| describe_failure(e, "convert", &cli.input, &cli.output))?;
    log_summary(&summary);

    Ok(())
}
