//! WHO ICD-11 code extraction command

use crate::error::Result;
use crate::icd11;
use crate::utils::{build_client, create_spinner, fetch_bytes, print_pass};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Run the icd11-codes command
pub async fn run_icd11_codes(output: &Path, keep_artifacts: bool, timeout: u64) -> Result<()> {
    fs::create_dir_all(output)?;
    let client = build_client(Duration::from_secs(timeout))?;

    let spinner = create_spinner("Downloading ICD-11 simple tabulation...");
    let archive = fetch_bytes(&client, icd11::SIMPLE_TABULATION_URL).await?;
    spinner.finish_and_clear();

    let scratch = tempfile::tempdir()?;
    let work_dir = if keep_artifacts { output } else { scratch.path() };

    let xlsx = icd11::extract_spreadsheet(&archive, work_dir)?;
    let spinner = create_spinner("Converting spreadsheet to CSV...");
    let csv_path = icd11::spreadsheet_to_csv(&xlsx)?;
    spinner.finish_and_clear();

    let rows = icd11::read_tabulation(&csv_path)?;
    let root = icd11::build_tree(&rows);

    let diseases = icd11::disease_codes(&root);
    let vaccines = icd11::vaccine_codes(&root);

    write_code_map(&output.join("diseases.json"), &diseases)?;
    write_code_map(&output.join("vaccines.json"), &vaccines)?;

    print_pass(&format!(
        "Wrote {} disease and {} vaccine codes to {}",
        diseases.len(),
        vaccines.len(),
        output.display()
    ));
    Ok(())
}

fn write_code_map(path: &Path, codes: &[(String, String)]) -> Result<()> {
    let map: BTreeMap<&str, &str> = codes
        .iter()
        .map(|(code, name)| (code.as_str(), name.as_str()))
        .collect();
    fs::write(path, serde_json::to_string(&map)?)?;
    Ok(())
}
