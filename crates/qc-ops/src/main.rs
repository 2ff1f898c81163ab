//! # QC-Ops
//!
//! Operator command line for Quantum-Chain deployments.
//!
//! ```text
//! qc-ops check-genesis --genesis ./genesis.json [--registry ./registry/genesis]
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use qc_ops::cli::{self, Args};

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let code = cli::run(args, &mut io::stdout().lock(), &mut io::stderr().lock())
        .context("failed to write command output")?;
    Ok(ExitCode::from(code))
}
