//! Logging initialization for the generator binary
//!
//! Uses `RUST_LOG` when set, otherwise logs the generator crates at the
//! requested level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build environment filter
fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // reqwest/hyper are noisy at debug
        EnvFilter::new(format!(
            "iso3166_gen={level},iso3166_codegen={level},reqwest=warn,hyper=warn"
        ))
    })
}

/// Initialize human-readable logging to stderr.
///
/// Stdout is reserved for `--stdout` output.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
