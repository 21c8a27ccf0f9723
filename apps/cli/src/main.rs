//! ISO 3166-1 Generator - CLI Entry Point
//!
//! Downloads the country-codes dataset once and regenerates the Rust module
//! with the alpha-2 and alpha-3 constants.

mod logging;

use anyhow::Context;
use clap::Parser;
use iso3166_codegen::source::{DATASET_URL, DEFAULT_TIMEOUT};
use iso3166_codegen::{fetch_and_render, generate_to_file, DatasetClient, GeneratorConfig};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "iso3166-gen", version, about = "Regenerate the ISO 3166-1 country code module")]
struct Args {
    /// URL of the country-codes JSON dataset
    #[arg(long, default_value = DATASET_URL)]
    url: String,

    /// File to overwrite with the generated module
    #[arg(long, short, default_value = "../iso3166.rs")]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Name of the generated module
    #[arg(long, default_value = "iso3166")]
    module: String,

    /// Print the generated module instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(&args.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        url = %args.url,
        "Starting ISO 3166-1 code generation"
    );

    let client = DatasetClient::with_url(args.url.clone(), Duration::from_secs(args.timeout_secs))
        .context("Failed to build HTTP client")?;
    let config = GeneratorConfig {
        module_name: args.module,
        ..GeneratorConfig::default()
    };

    if args.stdout {
        let generated = fetch_and_render(&client, config)
            .await
            .context("Failed to generate country code module")?;
        std::io::stdout()
            .write_all(generated.source.as_bytes())
            .context("Failed to write to stdout")?;
        tracing::info!(records = generated.report.emitted, "Generated module");
        return Ok(());
    }

    let report = generate_to_file(&client, config, &args.output)
        .await
        .with_context(|| format!("Failed to generate {}", args.output.display()))?;

    tracing::info!(
        path = ?report.output,
        records = report.emitted,
        dropped = report.dropped,
        formatted = report.formatted,
        "Generation complete"
    );

    Ok(())
}
