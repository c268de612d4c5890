//! SMART Health Card issuer key retrieval
//!
//! SHC issuers publish their signing keys as a JSON Web Key Set under
//! `/.well-known/jwks.json`. Issuers come from a built-in list, optionally
//! extended with the public VCI directory.

use crate::error::{Result, ToolkitError};
use crate::utils::fetch_text;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Issuers known to publish SMART Health Card signing keys
pub const BUILTIN_ISSUERS: [&str; 3] = [
    "https://covid19.quebec.ca/PreuveVaccinaleApi/issuer",
    "https://smarthealthcard.phsa.ca/v1/issuer",
    "https://myvaccinerecord.cdph.ca.gov/creds/",
];

/// Community-maintained directory of participating issuers
pub const VCI_DIRECTORY_URL: &str =
    "https://raw.githubusercontent.com/the-commons-project/vci-directory/main/vci-issuers.json";

#[derive(Debug, Deserialize)]
struct KeySet {
    keys: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct VciDirectory {
    participating_issuers: Vec<VciIssuer>,
}

#[derive(Debug, Deserialize)]
struct VciIssuer {
    iss: String,
}

/// A single issuer key, kept as raw JSON for verbatim output
#[derive(Debug, Clone)]
pub struct IssuerKey {
    pub kid: String,
    pub json: String,
}

/// JWKS location for an issuer base URL
pub fn jwks_url(issuer: &str) -> String {
    format!("{}/.well-known/jwks.json", issuer.trim_end_matches('/'))
}

/// Fetch an issuer's key set.
///
/// `Ok(None)` means the issuer publishes no keys (HTTP 404). Keys without a
/// `kid` cannot be written to a stable file name and are skipped.
pub async fn fetch_issuer_keys(client: &Client, issuer: &str) -> Result<Option<Vec<IssuerKey>>> {
    let url = jwks_url(issuer);
    let response = client.get(&url).send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !response.status().is_success() {
        return Err(ToolkitError::BadResponse {
            url,
            message: format!("status {}", response.status()),
        });
    }

    let set: KeySet = response.json().await?;
    let mut keys = Vec::new();
    for key in set.keys {
        let Some(kid) = key.get("kid").and_then(Value::as_str) else {
            warn!("issuer {} publishes a key without a kid, skipping", issuer);
            continue;
        };
        if kid.contains('/') || kid.contains('\\') || kid.contains("..") {
            warn!("issuer {} publishes an unusable kid {:?}, skipping", issuer, kid);
            continue;
        }
        keys.push(IssuerKey {
            kid: kid.to_string(),
            json: serde_json::to_string(&key)?,
        });
    }
    Ok(Some(keys))
}

/// Fetch the issuer base URLs listed in the VCI directory
pub async fn fetch_vci_issuers(client: &Client, url: &str) -> Result<Vec<String>> {
    let body = fetch_text(client, url).await?;
    let directory: VciDirectory = serde_json::from_str(&body)?;
    Ok(directory
        .participating_issuers
        .into_iter()
        .map(|issuer| issuer.iss)
        .collect())
}
