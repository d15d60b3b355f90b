//! Shared plumbing for the `json2bin` and `bin2json` binaries.

use jsonbin_core::{ConvertError, ConvertSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` selects the level; the
/// default is `warn`, so a successful run prints nothing.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Wrap a library error with the step that failed and its kind label, e.g.
/// `Failed to convert a.json to a.cbor [not-found]`.
pub fn describe_failure(err: ConvertError, action: &str, input: &str, output: &str) -> anyhow::Error {
    let kind = err.kind();
    anyhow::Error::new(err).context(format!(
        "Failed to {} {} to {} [{}]",
        action, input, output, kind
    ))
}

pub fn log_summary(summary: &ConvertSummary) {
    info!(
        input = %summary.input.display(),
        output = %summary.output.display(),
        json_bytes = summary.json_bytes,
        cbor_bytes = summary.encoded_bytes,
        "conversion complete"
    );
}
