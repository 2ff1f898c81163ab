//! # Command Line
//!
//! Argument model and command dispatch for the `qc-ops` binary. Output goes
//! through caller-supplied writers so the whole surface runs in tests.
//!
//! Exit codes: 0 success, 1 mismatch, 2 read error, 3 parse error,
//! 4 lookup error.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{error, info};

use crate::adapters::{JsonTreeComparator, RegistryGenesisProvider};
use crate::application::GenesisChecker;
use crate::config::{OpsConfig, REGISTRY_ENV};
use crate::ports::GenesisCheckApi;
use crate::SUCCESS_MESSAGE;

/// QC-Ops: Quantum-Chain operator tooling
#[derive(Parser, Debug)]
#[command(name = "qc-ops", version)]
#[command(about = "Operator tooling for Quantum-Chain deployments")]
pub struct Args {
    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sanity check genesis (genesis.json) is reproducible
    CheckGenesis {
        /// Path to the local genesis.json
        #[arg(long, value_name = "PATH")]
        genesis: PathBuf,

        /// Directory of canonical `<chain_id>.json` genesis files
        #[arg(long, value_name = "DIR", env = REGISTRY_ENV)]
        registry: Option<PathBuf>,
    },
}

/// Run a parsed command line. Progress and success lines go to `out`, the
/// failure message to `err`. Returns the process exit code.
pub fn run(args: Args, out: &mut impl Write, err: &mut impl Write) -> io::Result<u8> {
    match args.command {
        Command::CheckGenesis { genesis, registry } => {
            let config = OpsConfig::from_env().with_registry_dir(registry);
            check_genesis(&genesis, &config, out, err)
        }
    }
}

fn check_genesis(
    genesis: &Path,
    config: &OpsConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    info!(registry = %config.registry_dir.display(), "Using canonical genesis registry");

    let checker = GenesisChecker::new(
        RegistryGenesisProvider::from_config(config),
        JsonTreeComparator::new(),
    );

    writeln!(out, "Attempting to read from {}", genesis.display())?;
    match checker.check_file(genesis) {
        Ok(report) => {
            info!(chain_id = report.chain_id, "Genesis check passed");
            writeln!(out, "{SUCCESS_MESSAGE}")?;
            Ok(0)
        }
        Err(failure) => {
            error!(kind = ?failure.kind(), "Genesis check failed");
            writeln!(err, "Error: {failure}")?;
            Ok(failure.kind().exit_code())
        }
    }
}
