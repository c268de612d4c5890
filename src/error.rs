//! Unified error types for hcert-toolkit

use thiserror::Error;

/// Main error type for hcert-toolkit operations
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Value-set decode error: {0}")]
    Proto(#[from] prost::DecodeError),

    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("External tool error: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected response from {url}: {message}")]
    BadResponse { url: String, message: String },
}

impl From<base64::DecodeError> for ToolkitError {
    fn from(err: base64::DecodeError) -> Self {
        ToolkitError::Parse(format!("invalid base64: {}", err))
    }
}

impl From<x509_parser::error::X509Error> for ToolkitError {
    fn from(err: x509_parser::error::X509Error) -> Self {
        ToolkitError::Certificate(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
