//! ISO 3166-1 Code Generator
//!
//! Downloads the datahub country-codes dataset and generates a Rust module with
//! one constant per alpha-2 and alpha-3 code, plus ordered lists of all valid codes.
//!
//! ## Architecture
//!
//! The generator runs a single linear pipeline:
//! 1. **Source**: one HTTP GET for the raw dataset ([`source::DatasetClient`])
//! 2. **Parser**: JSON decoding and filtering of unnamed rows ([`parser`])
//! 3. **IR**: ordered country records ([`ir::CountryRegistry`])
//! 4. **Generators**: language-specific rendering from the IR ([`generators`])
//! 5. **Output**: source formatting and the file write ([`utils`])
//!
//! Every stage except formatting aborts the run on failure, so a broken
//! download never overwrites a previously generated file.
//!
//! ```rust,no_run
//! use iso3166_codegen::{generate_to_file, DatasetClient, GeneratorConfig};
//! use std::path::Path;
//!
//! # async fn example() -> iso3166_codegen::Result<()> {
//! let client = DatasetClient::new()?;
//! let report = generate_to_file(&client, GeneratorConfig::default(), Path::new("../iso3166.rs")).await?;
//! println!("wrote {} countries", report.emitted);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generators;
pub mod ir;
pub mod parser;
pub mod source;
pub mod utils;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use generators::rust::RustGenerator;
pub use generators::{Generator, GeneratorConfig};
pub use ir::{CountryRecord, CountryRegistry};
pub use source::DatasetClient;

/// Main entry point for code generation
pub struct CodeGenerator {
    registry: CountryRegistry,
    decoded: usize,
}

impl CodeGenerator {
    /// Create a code generator from a raw dataset body
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let records = parser::decode(bytes)?;
        let decoded = records.len();
        let registry = CountryRegistry::new(parser::filter_named(records));
        Ok(Self { registry, decoded })
    }

    /// Get the country registry
    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    /// Number of rows in the dataset before filtering
    pub fn decoded(&self) -> usize {
        self.decoded
    }

    /// Generate code for a specific language
    pub fn generate<G: Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.registry)
    }
}

/// Summary of one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Rows decoded from the dataset
    pub decoded: usize,
    /// Rows dropped for lacking a display name
    pub dropped: usize,
    /// Records emitted as constants
    pub emitted: usize,
    /// Whether the formatting pass succeeded
    pub formatted: bool,
    /// File the module was written to, `None` when only rendered
    pub output: Option<PathBuf>,
}

/// Generated module source together with its run summary
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    pub source: String,
    pub report: GenerationReport,
}

/// Fetch the dataset and render the formatted Rust module.
///
/// A failed formatting pass is logged and the unformatted source returned.
pub async fn fetch_and_render(
    client: &DatasetClient,
    config: GeneratorConfig,
) -> Result<GeneratedSource> {
    let bytes = client.fetch().await?;
    tracing::info!(url = %client.url(), bytes = bytes.len(), "Downloaded country dataset");

    let codegen = CodeGenerator::from_bytes(&bytes)?;
    let emitted = codegen.registry().len();
    let dropped = codegen.decoded() - emitted;
    tracing::info!(
        decoded = codegen.decoded(),
        dropped,
        records = emitted,
        "Decoded country records"
    );
    if codegen.registry().is_empty() {
        tracing::warn!("Dataset has no named records, generating an empty module");
    }

    let rendered = codegen.generate(RustGenerator::new(config)?)?;

    let (source, formatted) = match utils::format_source(&rendered) {
        Ok(source) => (source, true),
        Err(e) if !e.is_fatal() => {
            tracing::warn!(error = %e, "Error formatting generated source, writing it unformatted");
            (rendered, false)
        }
        Err(e) => return Err(e),
    };

    Ok(GeneratedSource {
        source,
        report: GenerationReport {
            decoded: codegen.decoded(),
            dropped,
            emitted,
            formatted,
            output: None,
        },
    })
}

/// Run the full pipeline and overwrite `output` with the generated module.
///
/// The file is only touched once fetching, decoding and rendering succeeded.
pub async fn generate_to_file(
    client: &DatasetClient,
    config: GeneratorConfig,
    output: &Path,
) -> Result<GenerationReport> {
    let generated = fetch_and_render(client, config).await?;

    utils::write_output(output, generated.source.as_bytes())?;
    tracing::info!(path = %output.display(), "Wrote generated module");

    Ok(GenerationReport {
        output: Some(output.to_path_buf()),
        ..generated.report
    })
}
