//! EU DGC value-set download and merge command

use crate::dgc::value_sets::{self, MergedValueSets};
use crate::error::Result;
use crate::utils::{build_client, create_spinner, fetch_bytes, print_info, print_pass};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Run the dgc-value-sets command
pub async fn run_dgc_value_sets(output: &Path, langs: &[String], timeout: u64) -> Result<()> {
    fs::create_dir_all(output)?;
    let client = build_client(Duration::from_secs(timeout))?;

    let mut merged = MergedValueSets::new();
    for (i, lang) in langs.iter().enumerate() {
        let spinner = create_spinner(&format!("Downloading {} value sets...", lang));
        let url = value_sets::value_set_url(value_sets::VALUE_SET_URL_BASE, lang);
        let archive = fetch_bytes(&client, &url).await?;
        spinner.finish_and_clear();

        let export = value_sets::read_export(&archive)?;
        let sets = value_sets::decode_value_sets(&export)?;
        value_sets::merge_language(&mut merged, &sets, lang, i == 0);
        print_info(&format!("Merged {} value sets", lang));
    }

    for (category, dict) in &merged {
        let path = output.join(format!("{}.json", category));
        fs::write(path, serde_json::to_string(dict)?)?;
    }

    print_pass(&format!(
        "Wrote {} dictionaries to {}",
        merged.len(),
        output.display()
    ));
    Ok(())
}
