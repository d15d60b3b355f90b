//! `bin2json` — convert a CBOR file written by `json2bin` back into JSON.
//!
//! ```sh
//! bin2json data.cbor data.json
//! ```
//!
//! Any well-formed CBOR with a JSON equivalent is accepted. The JSON output is
//! pretty-printed.

use anyhow::Result;
use clap::Parser;
use jsonbin_cli::{describe_failure, init_tracing, log_summary};

#[derive(Parser)]
#[command(
    name = "bin2json",
    version,
    about = "Convert a CBOR document back into JSON"
)]
struct Cli {
    /// CBOR file to read
    input: String,
    /// Destination JSON file (created or overwritten)
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let summary = jsonbin_core::restore(&cli.input, &cli.output)
        .map_err(|e| describe_failure(e, "restore", &cli.input, &cli.output))?;
    log_summary(&summary);

    Ok(())
}
