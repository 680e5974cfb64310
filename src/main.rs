//! Stemsplit CLI - Audio Source Separation
//!
//! Command-line interface for the stemsplit separation pipeline.

use clap::Parser;
use env_logger::Env;
use log::info;

use stemsplit::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Every failure exits with code 1, usage errors included; help and
    // version requests still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    info!("stemsplit v{}", env!("CARGO_PKG_VERSION"));

    commands::separate_file(&cli)
}
