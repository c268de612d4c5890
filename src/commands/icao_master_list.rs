//! ICAO CSCA master list unpacking command

use crate::error::{Result, ToolkitError};
use crate::icao;
use crate::output::write_qrc;
use crate::utils::{build_client, create_spinner, fetch_bytes, print_info, print_pass};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const QRC_PREFIX: &str = "/org.kde.khealthcertificate/icao/certs";

/// Run the icao-master-list command
pub async fn run_icao_master_list(
    output: &Path,
    ml_files: &[PathBuf],
    download: bool,
    timeout: u64,
) -> Result<()> {
    if ml_files.is_empty() && !download {
        return Err(ToolkitError::Config(
            "no master list given; pass ML_FILE arguments or --download".to_string(),
        ));
    }

    fs::create_dir_all(output)?;
    remove_existing_certs(output)?;

    // Downloaded lists land in a scratch dir and are processed like local files.
    let scratch = tempfile::tempdir()?;
    let mut inputs: Vec<PathBuf> = ml_files.to_vec();
    if download {
        let client = build_client(Duration::from_secs(timeout))?;
        let spinner = create_spinner("Downloading German master list...");
        let archive = fetch_bytes(&client, icao::GERMAN_MASTER_LIST_URL).await?;
        spinner.finish_and_clear();

        let ml = icao::extract_master_list(&archive)?;
        let path = scratch.path().join("GermanMasterList.ml");
        fs::write(&path, ml)?;
        inputs.push(path);
    }

    let mut der_files = Vec::new();
    for ml_path in &inputs {
        print_info(&format!("Processing {}", ml_path.display()));
        let content = icao::strip_cms_signature(ml_path)?;
        let certs = icao::split_master_list(&content)?;

        for (key_id, certs) in icao::group_by_key_id(certs) {
            if let [cert] = certs.as_slice() {
                let file_name = format!("{}.der", key_id);
                fs::write(output.join(&file_name), &cert.der)?;
                der_files.push(file_name);
            } else {
                fs::create_dir_all(output.join(&key_id))?;
                for cert in &certs {
                    let file_name = format!("{}/{}.der", key_id, cert.serial);
                    fs::write(output.join(&file_name), &cert.der)?;
                    der_files.push(file_name);
                }
            }
        }
    }

    write_qrc(&output.join("icao-csca-certs.qrc"), QRC_PREFIX, &der_files)?;
    print_pass(&format!(
        "Wrote {} certificates to {}",
        der_files.len(),
        output.display()
    ));
    Ok(())
}

/// Remove certificates from a previous run: `.der` files and the
/// per-key-id subdirectories.
fn remove_existing_certs(output: &Path) -> Result<()> {
    for entry in fs::read_dir(output)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else if path.extension().is_some_and(|ext| ext == "der") {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
