//! NL CoronaCheck verifier key retrieval
//!
//! The verifier API wraps its response in a signed JSON envelope; the
//! payload is base64-encoded JSON carrying IRMA public keys in XML form.
//! The envelope signature is not validated here.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

/// Verifier public key endpoint
pub const PUBLIC_KEYS_URL: &str = "https://verifier-api.coronacheck.nl/v6/verifier/public_keys";

#[derive(Debug, Deserialize)]
struct Envelope {
    payload: String,
}

#[derive(Debug, Deserialize)]
struct KeyPayload {
    cl_keys: Vec<ClKey>,
}

#[derive(Debug, Deserialize)]
struct ClKey {
    id: String,
    public_key: String,
}

/// A verifier public key: identifier plus decoded XML bytes
#[derive(Debug, Clone)]
pub struct VerifierKey {
    pub id: String,
    pub data: Vec<u8>,
}

/// Unwrap the envelope and decode the keys
pub fn parse_public_keys(body: &str) -> Result<Vec<VerifierKey>> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let payload = BASE64.decode(&envelope.payload)?;
    let keys: KeyPayload = serde_json::from_slice(&payload)?;

    keys.cl_keys
        .into_iter()
        .map(|key| {
            Ok(VerifierKey {
                id: key.id,
                data: BASE64.decode(&key.public_key)?,
            })
        })
        .collect()
}
