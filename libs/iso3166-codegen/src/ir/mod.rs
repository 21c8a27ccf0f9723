//! Intermediate Representation (IR)
//!
//! Country records decoded from the dataset, in source order. Generators only
//! ever see this representation, never the raw JSON.

use serde::Serialize;

/// One row of the country-codes dataset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CountryRecord {
    /// CLDR display name, e.g. "United States"
    pub display_name: String,
    /// ISO 3166-1 alpha-2 code, e.g. "US"
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code, e.g. "USA"
    pub alpha3: String,
}

impl CountryRecord {
    pub fn new(
        display_name: impl Into<String>,
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
        }
    }

    pub fn has_display_name(&self) -> bool {
        !self.display_name.is_empty()
    }
}

/// Ordered set of records that will be emitted
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    records: Vec<CountryRecord>,
}

impl CountryRegistry {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Alpha-2 codes in source order
    pub fn alpha2_codes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.alpha2.as_str())
    }

    /// Alpha-3 codes in source order
    pub fn alpha3_codes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.alpha3.as_str())
    }
}
