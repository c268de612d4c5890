//! hcert-toolkit library
//!
//! Batch downloaders that fetch public certificate material and coded
//! reference data used for validating digital health certificates, and
//! repackage the payloads as flat files:
//! - EU DGC document signer certificates and value-set dictionaries
//! - SMART Health Card issuer keys
//! - NL CoronaCheck verifier public keys
//! - HL7 CVX vaccine coding data
//! - ICAO CSCA master list certificates
//! - WHO ICD-11 disease and vaccine codes
//!
//! Each job is a fetch → parse → transform → write procedure with no state
//! shared between runs.

pub mod cli;
pub mod commands;
pub mod cvx;
pub mod dgc;
pub mod error;
pub mod icao;
pub mod icd11;
pub mod nl;
pub mod output;
pub mod shc;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use error::{Result, ToolkitError};
