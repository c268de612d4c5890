//! EU DGC signer certificate download command

use crate::dgc;
use crate::error::Result;
use crate::output::write_qrc;
use crate::utils::{build_client, create_spinner, print_pass, print_warning};
use std::fs;
use std::path::Path;
use std::time::Duration;

const QRC_PREFIX: &str = "/org.kde.khealthcertificate/eu-dgc/certs";

/// Run the dgc-certs command
pub async fn run_dgc_certs(output: &Path, timeout: u64, verbose: bool) -> Result<()> {
    fs::create_dir_all(output)?;
    let client = build_client(Duration::from_secs(timeout))?;

    let spinner = create_spinner("Downloading DSC trust list...");
    let entries = dgc::fetch_trust_list(&client, dgc::TRUST_LIST_URL).await?;
    spinner.finish_and_clear();

    let mut pem_files = Vec::new();
    for entry in &entries {
        match dgc::decode_entry(entry) {
            Ok(cert) => {
                let file_name = format!("{}.pem", cert.kid_hex);
                fs::write(output.join(&file_name), dgc::to_pem(&cert.der))?;
                if verbose {
                    println!("  {}", file_name);
                }
                pem_files.push(file_name);
            }
            Err(e) => print_warning(&format!("Skipping trust list entry: {}", e)),
        }
    }

    write_qrc(&output.join("certs.qrc"), QRC_PREFIX, &pem_files)?;
    print_pass(&format!(
        "Wrote {} certificates to {}",
        pem_files.len(),
        output.display()
    ));
    Ok(())
}
