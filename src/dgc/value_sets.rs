//! EU DGC value-set download and merge
//!
//! Value sets are published per language as a ZIP archive holding a binary
//! protocol buffer export. The first language processed forms the base
//! dictionary; other languages only contribute entries whose display text
//! actually differs, stored under a `key[lang]` suffix.

use crate::dgc::proto::ValueSets;
use crate::error::Result;
use prost::Message;
use std::collections::BTreeMap;
use std::io::Read;

/// Per-language value-set export endpoint base
pub const VALUE_SET_URL_BASE: &str = "https://svc90.main.px.t-online.de/version/v1/ehn-dgc";

/// Merged dictionaries, keyed by category then by entry key
pub type MergedValueSets = BTreeMap<String, BTreeMap<String, String>>;

/// URL of the value-set archive for one language
pub fn value_set_url(base: &str, lang: &str) -> String {
    format!("{}/{}/value-sets", base, lang)
}

/// Extract `export.bin` from a downloaded value-set archive
pub fn read_export(zip_bytes: &[u8]) -> Result<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_bytes))?;
    let mut file = archive.by_name("export.bin")?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Decode the binary export
pub fn decode_value_sets(data: &[u8]) -> Result<ValueSets> {
    Ok(ValueSets::decode(data)?)
}

/// Merge one language's export into the accumulated dictionaries.
///
/// `is_base` marks the first language: its display texts are stored under
/// the bare keys. Later languages add `key[lang]` entries only for texts
/// that differ from the base.
pub fn merge_language(merged: &mut MergedValueSets, sets: &ValueSets, lang: &str, is_base: bool) {
    for (category, items) in sets.categories() {
        let dict = merged.entry(category.to_string()).or_default();
        for item in items {
            if is_base {
                dict.insert(item.key.clone(), item.display_text.clone());
            } else if dict.get(&item.key) != Some(&item.display_text) {
                dict.insert(format!("{}[{}]", item.key, lang), item.display_text.clone());
            }
        }
    }
}
