//! Code generators for different target languages
//!
//! Each language has its own module that implements the `Generator` trait.

pub mod rust;

use crate::error::Result;
use crate::ir::CountryRegistry;

/// Trait that all language generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code from the country registry
    fn generate(&self, registry: &CountryRegistry) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Name of the emitted module
    pub module_name: String,
    /// Tool named in the "Code generated by" header
    pub generated_by: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            module_name: "iso3166".to_string(),
            generated_by: "iso3166-gen".to_string(),
        }
    }
}
