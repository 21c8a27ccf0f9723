//! Error types for iso3166-codegen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Code generation errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Error building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Error reading response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("Cannot decode country dataset: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Generated source is not valid Rust: {0}")]
    Format(#[from] syn::Error),

    #[error("Error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the pipeline must abort on this error.
    ///
    /// Only a failed formatting pass is tolerated; the unformatted source is
    /// written instead.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Format(_))
    }
}
