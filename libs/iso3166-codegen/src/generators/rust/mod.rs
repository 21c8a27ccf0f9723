//! Rust code generator for ISO 3166-1 codes

use crate::error::{Error, Result};
use crate::generators::{Generator, GeneratorConfig};
use crate::ir::{CountryRecord, CountryRegistry};
use handlebars::Handlebars;
use serde::Serialize;

const TEMPLATE_NAME: &str = "iso3166";
const TEMPLATE: &str = include_str!("iso3166.rs.hbs");

/// Data handed to the template
#[derive(Serialize)]
struct TemplateData<'a> {
    generated_by: &'a str,
    module_name: &'a str,
    records: Vec<TemplateRecord<'a>>,
}

#[derive(Serialize)]
struct TemplateRecord<'a> {
    display_name: String,
    alpha2: &'a str,
    alpha3: &'a str,
}

impl<'a> From<&'a CountryRecord> for TemplateRecord<'a> {
    fn from(record: &'a CountryRecord) -> Self {
        Self {
            display_name: doc_line(&record.display_name),
            alpha2: &record.alpha2,
            alpha3: &record.alpha3,
        }
    }
}

/// Names end up in `///` comments, which stop at the first line break.
fn doc_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Rust code generator
pub struct RustGenerator {
    config: GeneratorConfig,
    handlebars: Handlebars<'static>,
}

impl RustGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Output is Rust source, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| Error::Template(e.to_string()))?;

        Ok(Self { config, handlebars })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(GeneratorConfig::default())
    }

    /// Render the module source for the given records.
    ///
    /// Pure: the same records always produce the same text.
    pub fn render(&self, records: &[CountryRecord]) -> Result<String> {
        let data = TemplateData {
            generated_by: &self.config.generated_by,
            module_name: &self.config.module_name,
            records: records.iter().map(TemplateRecord::from).collect(),
        };

        self.handlebars
            .render(TEMPLATE_NAME, &data)
            .map_err(|e| Error::Template(e.to_string()))
    }
}

impl Generator for RustGenerator {
    type Output = String;

    fn generate(&self, registry: &CountryRegistry) -> Result<Self::Output> {
        self.render(registry.records())
    }
}
