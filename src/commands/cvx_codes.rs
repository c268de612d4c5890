//! HL7 CVX coding data download and merge command

use crate::cvx;
use crate::error::Result;
use crate::utils::{build_client, create_spinner, fetch_text, print_pass};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Run the cvx-codes command
pub async fn run_cvx_codes(output: &Path, timeout: u64) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let client = build_client(Duration::from_secs(timeout))?;

    let spinner = create_spinner("Downloading CVX code tables...");
    let vaccine_groups = fetch_text(&client, cvx::VACCINE_GROUP_URL).await?;
    let trade_names = fetch_text(&client, cvx::TRADE_NAME_URL).await?;
    spinner.finish_and_clear();

    let vaccine_groups = cvx::parse_flat_file(&vaccine_groups)?;
    let trade_names = cvx::parse_flat_file(&trade_names)?;

    let manufacturers = cvx::manufacturer_index(&trade_names);
    let merged = cvx::merge_tables(&vaccine_groups, &manufacturers);

    fs::write(output, serde_json::to_string(&merged)?)?;
    print_pass(&format!(
        "Wrote {} CVX codes to {}",
        merged.len(),
        output.display()
    ));
    Ok(())
}
