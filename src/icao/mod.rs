//! ICAO CSCA master list unpacking
//!
//! Master lists are CMS-signed bundles of CSCA certificates. The CMS layer
//! is stripped with the external `openssl` tool; the signed content is an
//! ASN.1 `SEQUENCE { version INTEGER, certList SET OF Certificate }` which
//! is split into individual DER certificates keyed by subject key
//! identifier.

use crate::error::{Result, ToolkitError};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::process::Command;
use tracing::warn;
use x509_parser::der_parser::asn1_rs::{FromDer as _, Integer, Sequence, Set};
use x509_parser::prelude::*;

/// German BSI master list distribution
pub const GERMAN_MASTER_LIST_URL: &str =
    "https://www.bsi.bund.de/SharedDocs/Downloads/DE/BSI/ElekAusweise/CSCA/GermanMasterList.zip";

/// A certificate extracted from a master list
#[derive(Debug, Clone)]
pub struct CscaCertificate {
    /// Subject key identifier, lowercase hex
    pub subject_key_id: String,
    /// Serial number, lowercase hex without leading zero bytes
    pub serial: String,
    pub der: Vec<u8>,
}

/// Strip the CMS signature from a master list file with the openssl CLI.
/// The signature itself is not verified.
pub fn strip_cms_signature(ml_path: &Path) -> Result<Vec<u8>> {
    let output = Command::new("openssl")
        .args(["cms", "-inform", "der", "-noverify", "-verify", "-in"])
        .arg(ml_path)
        .output()
        .map_err(|e| ToolkitError::Tool(format!("failed to run openssl: {}", e)))?;

    if !output.status.success() {
        return Err(ToolkitError::Tool(format!(
            "openssl cms failed on {}: {}",
            ml_path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(output.stdout)
}

/// Walk the signed content and split it into individual certificates.
///
/// Certificates without a subject key identifier extension cannot be filed
/// under a stable name and are skipped with a warning.
pub fn split_master_list(content: &[u8]) -> Result<Vec<CscaCertificate>> {
    let (_, outer) = Sequence::from_der(content)
        .map_err(|e| ToolkitError::Parse(format!("master list content is not a SEQUENCE: {}", e)))?;

    let (rest, _version) = Integer::from_der(outer.content.as_ref())
        .map_err(|e| ToolkitError::Parse(format!("master list has no version field: {}", e)))?;
    let (_, cert_list) = Set::from_der(rest)
        .map_err(|e| ToolkitError::Parse(format!("master list has no certificate set: {}", e)))?;

    let mut certs = Vec::new();
    let mut data = cert_list.content.as_ref();
    while !data.is_empty() {
        let (rest, cert) = X509Certificate::from_der(data).map_err(|e| {
            ToolkitError::Certificate(format!("master list certificate: {:?}", e))
        })?;
        let raw = &data[..data.len() - rest.len()];

        match subject_key_id(&cert) {
            Some(ski) => certs.push(CscaCertificate {
                subject_key_id: ski,
                serial: format_serial(cert.raw_serial()),
                der: raw.to_vec(),
            }),
            None => warn!(
                "certificate {} carries no subject key identifier, skipping",
                cert.subject()
            ),
        }
        data = rest;
    }
    Ok(certs)
}

/// Group certificates by subject key identifier
pub fn group_by_key_id(certs: Vec<CscaCertificate>) -> BTreeMap<String, Vec<CscaCertificate>> {
    let mut groups: BTreeMap<String, Vec<CscaCertificate>> = BTreeMap::new();
    for cert in certs {
        groups.entry(cert.subject_key_id.clone()).or_default().push(cert);
    }
    groups
}

/// Serial number as lowercase hex, without leading zero bytes
pub fn format_serial(raw: &[u8]) -> String {
    let mut bytes = raw;
    while bytes.len() > 1 && bytes[0] == 0 {
        bytes = &bytes[1..];
    }
    hex::encode(bytes)
}

/// Extract the `.ml` file from a downloaded master list archive
pub fn extract_master_list(zip_bytes: &[u8]) -> Result<Vec<u8>> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_bytes))?;

    let mut name = None;
    for i in 0..archive.len() {
        let file = archive.by_index(i)?;
        if file.name().ends_with(".ml") {
            name = Some(file.name().to_string());
            break;
        }
    }
    let name = name.ok_or_else(|| {
        ToolkitError::Parse("master list archive contains no .ml file".to_string())
    })?;

    let mut file = archive.by_name(&name)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

fn subject_key_id(cert: &X509Certificate) -> Option<String> {
    cert.extensions().iter().find_map(|ext| match ext.parsed_extension() {
        ParsedExtension::SubjectKeyIdentifier(ki) => Some(hex::encode(ki.0)),
        _ => None,
    })
}
