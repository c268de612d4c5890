//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hcert-toolkit")]
#[command(version)]
#[command(about = "Fetches trust material and code lists for health certificate validation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download EU DGC document signer certificates
    DgcCerts(DgcCertsArgs),

    /// Download and merge the EU DGC value-set dictionaries
    DgcValueSets(DgcValueSetsArgs),

    /// Download SMART Health Card issuer keys
    ShcCerts(ShcCertsArgs),

    /// Download NL CoronaCheck verifier public keys
    NlKeys(NlKeysArgs),

    /// Download and merge HL7 CVX vaccine coding data
    CvxCodes(CvxCodesArgs),

    /// Unpack ICAO CSCA master lists into per-key certificate files
    IcaoMasterList(IcaoMasterListArgs),

    /// Extract disease and vaccine codes from the WHO ICD-11 tabulation
    Icd11Codes(Icd11CodesArgs),
}

#[derive(Args)]
pub struct DgcCertsArgs {
    /// Directory the certificates and manifest are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct DgcValueSetsArgs {
    /// Directory the dictionaries are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Languages to merge; the first one is the base dictionary
    #[arg(long, value_delimiter = ',', default_values_t = vec!["en".to_string(), "de".to_string()])]
    pub langs: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct ShcCertsArgs {
    /// Directory the issuer keys and manifest are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Also fetch issuers from the VCI directory
    #[arg(long)]
    pub vci_directory: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct NlKeysArgs {
    /// Directory the public keys and manifest are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct CvxCodesArgs {
    /// File the merged dictionary is written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct IcaoMasterListArgs {
    /// Master list files to unpack
    #[arg(value_name = "ML_FILE")]
    pub ml_files: Vec<PathBuf>,

    /// Directory the certificates and manifest are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Download and unpack the German BSI master list as well
    #[arg(long)]
    pub download: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct Icd11CodesArgs {
    /// Directory the code dictionaries are written to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Keep the downloaded spreadsheet and CSV next to the output
    #[arg(long)]
    pub keep_artifacts: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,
}
