//! Shared HTTP client construction and fetch helpers

use crate::error::{Result, ToolkitError};
use reqwest::Client;
use std::time::Duration;

/// User-Agent header sent with every request
pub const USER_AGENT: &str = concat!("hcert-toolkit/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used by the download commands
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// GET a URL and return the response body, failing on non-success status
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ToolkitError::BadResponse {
            url: url.to_string(),
            message: format!("status {}", response.status()),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

/// GET a URL and return the response body as text, failing on non-success status
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ToolkitError::BadResponse {
            url: url.to_string(),
            message: format!("status {}", response.status()),
        });
    }
    Ok(response.text().await?)
}
