//! Command implementations for hcert-toolkit

pub mod cvx_codes;
pub mod dgc_certs;
pub mod dgc_value_sets;
pub mod icao_master_list;
pub mod icd11_codes;
pub mod nl_keys;
pub mod shc_certs;

pub use cvx_codes::run_cvx_codes;
pub use dgc_certs::run_dgc_certs;
pub use dgc_value_sets::run_dgc_value_sets;
pub use icao_master_list::run_icao_master_list;
pub use icd11_codes::run_icd11_codes;
pub use nl_keys::run_nl_keys;
pub use shc_certs::run_shc_certs;
