//! SMART Health Card issuer key download command

use crate::error::Result;
use crate::output::write_qrc;
use crate::shc;
use crate::utils::{build_client, create_spinner, print_info, print_pass, print_warning};
use std::fs;
use std::path::Path;
use std::time::Duration;

const QRC_PREFIX: &str = "/org.kde.khealthcertificate/shc/certs";

/// Run the shc-certs command.
///
/// Issuers are fetched independently; a failing issuer is reported and
/// skipped so one broken endpoint cannot abort the whole run.
pub async fn run_shc_certs(
    output: &Path,
    vci_directory: bool,
    timeout: u64,
    verbose: bool,
) -> Result<()> {
    fs::create_dir_all(output)?;
    let client = build_client(Duration::from_secs(timeout))?;

    let mut issuers: Vec<String> = shc::BUILTIN_ISSUERS.iter().map(|s| s.to_string()).collect();
    if vci_directory {
        let spinner = create_spinner("Downloading VCI issuer directory...");
        let listed = shc::fetch_vci_issuers(&client, shc::VCI_DIRECTORY_URL).await?;
        spinner.finish_and_clear();
        print_info(&format!("VCI directory lists {} issuers", listed.len()));
        for issuer in listed {
            if !issuers.contains(&issuer) {
                issuers.push(issuer);
            }
        }
    }

    let mut jwk_files = Vec::new();
    for issuer in &issuers {
        if verbose {
            println!("  {}", issuer);
        }
        match shc::fetch_issuer_keys(&client, issuer).await {
            Ok(Some(keys)) => {
                for key in keys {
                    let file_name = format!("{}.jwk", key.kid);
                    fs::write(output.join(&file_name), &key.json)?;
                    jwk_files.push(file_name);
                }
            }
            Ok(None) => {}
            Err(e) => print_warning(&format!("Skipping issuer {}: {}", issuer, e)),
        }
    }

    write_qrc(&output.join("shc-certs.qrc"), QRC_PREFIX, &jwk_files)?;
    print_pass(&format!(
        "Wrote {} issuer keys to {}",
        jwk_files.len(),
        output.display()
    ));
    Ok(())
}
