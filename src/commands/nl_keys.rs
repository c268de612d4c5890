//! NL CoronaCheck verifier key download command

use crate::error::Result;
use crate::nl;
use crate::output::write_qrc;
use crate::utils::{build_client, create_spinner, fetch_text, print_pass};
use std::fs;
use std::path::Path;
use std::time::Duration;

const QRC_PREFIX: &str = "/org.kde.khealthcertificate/nl-coronacheck/keys";

/// Run the nl-keys command
pub async fn run_nl_keys(output: &Path, timeout: u64) -> Result<()> {
    fs::create_dir_all(output)?;
    let client = build_client(Duration::from_secs(timeout))?;

    let spinner = create_spinner("Downloading verifier public keys...");
    let body = fetch_text(&client, nl::PUBLIC_KEYS_URL).await?;
    spinner.finish_and_clear();

    let keys = nl::parse_public_keys(&body)?;

    let mut key_files = Vec::new();
    for key in &keys {
        let file_name = format!("{}.xml", key.id);
        fs::write(output.join(&file_name), &key.data)?;
        key_files.push(file_name);
    }

    write_qrc(&output.join("nl-public-keys.qrc"), QRC_PREFIX, &key_files)?;
    print_pass(&format!(
        "Wrote {} public keys to {}",
        key_files.len(),
        output.display()
    ));
    Ok(())
}
