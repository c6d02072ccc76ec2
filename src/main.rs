//! Settings inspection binary
//!
//! Loads a dataset settings file and prints the resolved scenario, frame
//! range and per-camera paths.
//!
//! # Usage
//!
//! ```bash
//! mctrack-settings settings/PETS_S2L1.txt --verbose
//! ```

use clap::Parser;
use mctrack_settings::cli::{InspectArgs, init_logging, run_inspect};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "mctrack-settings")]
struct Cli {
    /// Path to the settings file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Fail on unknown DATASET_SCENARIO codes instead of falling back to L1
    #[arg(long)]
    strict_scenario: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let args = InspectArgs {
        config: cli.config,
        strict_scenario: cli.strict_scenario,
    };

    match run_inspect(&args) {
        Ok(summary) => print!("{}", summary),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
