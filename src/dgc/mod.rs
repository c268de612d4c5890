//! EU DGC document signer certificate handling
//!
//! The DSC trust list is published as a detached signature line followed by
//! a JSON document listing base64 DER certificates keyed by key identifier.

pub mod proto;
pub mod value_sets;

use crate::error::{Result, ToolkitError};
use crate::utils::fetch_text;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use x509_parser::prelude::*;

/// German gateway export of the EU trust list
pub const TRUST_LIST_URL: &str = "https://de.dscg.ubirch.com/trustList/DSC/";

/// Entry in the DSC trust list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustListEntry {
    pub kid: String,
    pub raw_data: String,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrustList {
    certificates: Vec<TrustListEntry>,
}

/// A decoded signer certificate ready to be written out
pub struct SignerCertificate {
    pub kid_hex: String,
    pub der: Vec<u8>,
}

/// Download and parse the trust list
pub async fn fetch_trust_list(client: &Client, url: &str) -> Result<Vec<TrustListEntry>> {
    let body = fetch_text(client, url).await?;
    parse_trust_list(&body)
}

/// Strip the detached signature line and parse the JSON trust list.
/// The signature at the start of the response is not validated.
pub fn parse_trust_list(body: &str) -> Result<Vec<TrustListEntry>> {
    let start = body.find('{').ok_or_else(|| {
        ToolkitError::Parse("trust list response contains no JSON document".to_string())
    })?;
    let list: TrustList = serde_json::from_str(body[start..].trim_end())?;
    Ok(list.certificates)
}

/// Decode a trust-list entry into key identifier and DER bytes.
/// Entries that do not carry a valid X.509 certificate are rejected.
pub fn decode_entry(entry: &TrustListEntry) -> Result<SignerCertificate> {
    let kid = BASE64.decode(&entry.kid)?;
    let der = BASE64.decode(&entry.raw_data)?;
    X509Certificate::from_der(&der).map_err(|e| {
        ToolkitError::Certificate(format!("kid {}: {:?}", hex::encode(&kid), e))
    })?;
    Ok(SignerCertificate {
        kid_hex: hex::encode(kid),
        der,
    })
}

/// PEM-encode a DER certificate
pub fn to_pem(der: &[u8]) -> String {
    ::pem::encode(&::pem::Pem::new("CERTIFICATE", der.to_vec()))
}
