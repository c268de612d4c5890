//! Utility modules for hcert-toolkit
//!
//! Shared HTTP client construction and console progress helpers.

pub mod http;
pub mod progress;

pub use http::{build_client, fetch_bytes, fetch_text};
pub use progress::{create_spinner, print_fail, print_info, print_pass, print_warning};
