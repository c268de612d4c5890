//! HL7 CVX vaccine coding data
//!
//! The CDC publishes the IIS code tables as pipe-delimited flat files. The
//! vaccine-group table and the trade-name table are merged into a single
//! dictionary keyed by CVX code.

use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Vaccine group flat file
pub const VACCINE_GROUP_URL: &str =
    "https://www2a.cdc.gov/vaccines/iis/iisstandards/downloads/VG.txt";

/// Trade name flat file
pub const TRADE_NAME_URL: &str =
    "https://www2a.cdc.gov/vaccines/iis/iisstandards/downloads/TRADENAME.txt";

/// Merged CVX record as serialized into the output dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvxEntry {
    /// Vaccine group name
    pub n: String,
    /// Description
    pub d: String,
    /// Manufacturer, when a trade-name record links one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
}

/// Parse a CDC pipe-delimited flat file into trimmed records.
///
/// Fields are `|`-separated with no quoting; surrounding whitespace is
/// stripped and empty lines are dropped.
pub fn parse_flat_file(text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(records)
}

/// Index manufacturer names by CVX code from the trade-name table.
///
/// Rows without a manufacturer field are dropped.
pub fn manufacturer_index(trade_names: &[Vec<String>]) -> BTreeMap<String, String> {
    let mut index = BTreeMap::new();
    for row in trade_names {
        if row.len() < 4 || row[3].is_empty() {
            continue;
        }
        index.insert(row[2].clone(), row[3].clone());
    }
    index
}

/// Merge the vaccine-group table with the manufacturer index, keyed by CVX code
pub fn merge_tables(
    vaccine_groups: &[Vec<String>],
    manufacturers: &BTreeMap<String, String>,
) -> BTreeMap<String, CvxEntry> {
    let mut merged = BTreeMap::new();
    for row in vaccine_groups {
        if row.len() < 4 {
            continue;
        }
        let code = row[1].clone();
        let entry = CvxEntry {
            n: row[0].clone(),
            d: row[3].clone(),
            m: manufacturers.get(&code).cloned(),
        };
        merged.insert(code, entry);
    }
    merged
}
