//! Simple CLI that reads plain body text from stdin and outputs a JSON
//! analysis report to stdout.
//!
//! The classifier artifact path comes from `CONTENT_QUALITY_MODEL`
//! (default `models/quality_model.json`). Logs go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

use rs_content_quality::{analyze_with_options, Options};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Read text from stdin
    let mut text = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut text) {
        tracing::error!("failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let report = analyze_with_options(&text, &Options::from_env());

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!("failed to serialise report: {err}");
            std::process::exit(1);
        }
    }
}
