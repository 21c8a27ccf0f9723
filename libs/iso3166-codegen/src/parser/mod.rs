//! Parser for the country-codes dataset
//!
//! Decodes the raw JSON export into [`CountryRecord`]s and drops the rows
//! that cannot be emitted.

use crate::error::Result;
use crate::ir::CountryRecord;
use serde_json::{Map, Value};

const DISPLAY_NAME_KEY: &str = "CLDR display name";
const ALPHA2_KEY: &str = "ISO3166-1-Alpha-2";
const ALPHA3_KEY: &str = "ISO3166-1-Alpha-3";

/// Decode the dataset body into records, in source order.
///
/// The body must be a JSON array of objects. Missing keys and non-string
/// values become empty strings.
pub fn decode(bytes: &[u8]) -> Result<Vec<CountryRecord>> {
    let rows: Vec<Map<String, Value>> = serde_json::from_slice(bytes)?;
    Ok(rows.iter().map(parse_row).collect())
}

/// Keep only records with a display name, preserving order.
pub fn filter_named(records: Vec<CountryRecord>) -> Vec<CountryRecord> {
    records
        .into_iter()
        .filter(CountryRecord::has_display_name)
        .collect()
}

fn parse_row(row: &Map<String, Value>) -> CountryRecord {
    CountryRecord {
        display_name: string_field(row, DISPLAY_NAME_KEY),
        alpha2: string_field(row, ALPHA2_KEY),
        alpha3: string_field(row, ALPHA3_KEY),
    }
}

fn string_field(row: &Map<String, Value>, key: &str) -> String {
    row.get(key)
        .and_then(|v| v.as_str())
        .map(String::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_decode_reads_dataset_keys() {
        let body = br#"[
            {
                "CLDR display name": "United States",
                "ISO3166-1-Alpha-2": "US",
                "ISO3166-1-Alpha-3": "USA",
                "ISO4217-currency_alphabetic_code": "USD"
            }
        ]"#;

        let records = decode(body).unwrap();
        assert_eq!(records, vec![CountryRecord::new("United States", "US", "USA")]);
    }

    #[test]
    fn test_decode_missing_and_null_fields_are_empty() {
        let body = br#"[
            {"CLDR display name": "Antarctica", "ISO3166-1-Alpha-2": "AQ"},
            {"CLDR display name": null, "ISO3166-1-Alpha-2": 42, "ISO3166-1-Alpha-3": "XXX"},
            {}
        ]"#;

        let records = decode(body).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], CountryRecord::new("Antarctica", "AQ", ""));
        assert_eq!(records[1], CountryRecord::new("", "", "XXX"));
        assert_eq!(records[2], CountryRecord::default());
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode(br#"{"CLDR display name": "France"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_decode_rejects_array_of_scalars() {
        assert!(matches!(decode(b"[1, 2]"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_truncated_body() {
        assert!(matches!(decode(b"[{\"CLDR"), Err(Error::Decode(_))));
        assert!(matches!(decode(b""), Err(Error::Decode(_))));
    }

    #[test]
    fn test_filter_drops_only_unnamed_records() {
        let records = vec![
            CountryRecord::new("Andorra", "AD", "AND"),
            CountryRecord::new("", "ZZ", "ZZZ"),
            CountryRecord::new("", "ZY", "ZZY"),
            CountryRecord::new("Angola", "AO", "AGO"),
            CountryRecord::new("", "", ""),
        ];

        let filtered = filter_named(records);
        assert_eq!(
            filtered,
            vec![
                CountryRecord::new("Andorra", "AD", "AND"),
                CountryRecord::new("Angola", "AO", "AGO"),
            ]
        );
    }

    #[test]
    fn test_filter_keeps_records_with_empty_codes() {
        // Codes are not validated, only the display name decides
        let records = vec![CountryRecord::new("Sark", "", "")];
        assert_eq!(filter_named(records.clone()), records);
    }

    #[test]
    fn test_filter_preserves_order() {
        let names = ["Zambia", "", "Albania", "Mexico", "", "", "Chad"];
        let records: Vec<_> = names
            .iter()
            .map(|n| CountryRecord::new(*n, "XX", "XXX"))
            .collect();

        let filtered: Vec<_> = filter_named(records)
            .into_iter()
            .map(|r| r.display_name)
            .collect();
        assert_eq!(filtered, vec!["Zambia", "Albania", "Mexico", "Chad"]);
    }
}
