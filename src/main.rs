//! hcert-toolkit - batch downloaders for health-certificate trust material
//!
//! Each subcommand is an independent job:
//! - Fetching EU DGC signer certificates and value-set dictionaries
//! - Fetching SMART Health Card issuer keys
//! - Fetching NL CoronaCheck verifier public keys
//! - Merging HL7 CVX vaccine coding data
//! - Unpacking ICAO CSCA master lists
//! - Extracting WHO ICD-11 disease and vaccine codes

use clap::Parser;
use console::style;
use hcert_toolkit::cli::{Cli, Commands};
use hcert_toolkit::commands;
use hcert_toolkit::error::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Commands::DgcCerts(args) => {
            commands::run_dgc_certs(&args.output, args.timeout, cli.verbose).await
        }
        Commands::DgcValueSets(args) => {
            commands::run_dgc_value_sets(&args.output, &args.langs, args.timeout).await
        }
        Commands::ShcCerts(args) => {
            commands::run_shc_certs(&args.output, args.vci_directory, args.timeout, cli.verbose)
                .await
        }
        Commands::NlKeys(args) => commands::run_nl_keys(&args.output, args.timeout).await,
        Commands::CvxCodes(args) => commands::run_cvx_codes(&args.output, args.timeout).await,
        Commands::IcaoMasterList(args) => {
            commands::run_icao_master_list(&args.output, &args.ml_files, args.download, args.timeout)
                .await
        }
        Commands::Icd11Codes(args) => {
            commands::run_icd11_codes(&args.output, args.keep_artifacts, args.timeout).await
        }
    }
}
