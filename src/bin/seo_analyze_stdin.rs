//! Reads one analysis request as JSON from stdin and writes the result as
//! JSON to stdout.
//!
//! Input: `{"html": "...", "url": "...", "primaryKeyword": "...", "relatedKeywords": [...]}`.
//! On failure prints `{"error": "..."}` and exits with status 1. Logs go to
//! stderr, filtered by `RUST_LOG`.

use rs_seo_analyzer::{analyze, AnalysisInput};
use serde::Serialize;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
struct ErrorOutput {
    error: String,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rs_seo_analyzer=info".into());

    // stdout carries the JSON result, so logs must stay on stderr
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false),
        )
        .init();
}

fn run() -> Result<String, String> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| format!("Failed to read from stdin: {e}"))?;

    let input: AnalysisInput =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid JSON input: {e}"))?;

    let result = analyze(&input).map_err(|e| format!("Analysis failed: {e}"))?;

    serde_json::to_string(&result).map_err(|e| format!("Failed to serialize result: {e}"))
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, "request failed");
            let output = ErrorOutput { error };
            println!("{}", serde_json::to_string(&output).unwrap_or_default());
            ExitCode::FAILURE
        }
    }
}
