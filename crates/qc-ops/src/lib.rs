//! # QC-Ops
//!
//! Operator tooling for Quantum-Chain deployments.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! `check-genesis` proves that a local `genesis.json` is reproducible from
//! canonical sources:
//!
//! 1. Read the local file
//! 2. Decode it into [`Genesis`] (the `alloy-genesis` schema)
//! 3. Extract `config.chainId`
//! 4. Look up the canonical genesis for that chain
//! 5. Compare both structurally, by value
//! 6. Report success, or the field-level diff (local `-`, canonical `+`)
//!
//! Every failure maps onto one [`ErrorKind`]: Read, Parse, Lookup or
//! Mismatch.
//!
//! ## Module Structure
//!
//! ```text
//! qc-ops/
//! ├── domain/          # Genesis decoding, diff report, errors
//! ├── ports/           # API trait (inbound) + provider/comparator traits (outbound)
//! ├── adapters/        # Registry directory, in-memory provider, JSON tree comparator
//! ├── application/     # GenesisChecker orchestrating the pipeline
//! ├── cli.rs           # clap arguments and exit codes for the binary
//! └── config.rs        # OpsConfig
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{InMemoryGenesisProvider, JsonTreeComparator, RegistryGenesisProvider};
pub use application::GenesisChecker;
pub use config::{OpsConfig, DEFAULT_REGISTRY_DIR, REGISTRY_ENV};
pub use domain::{
    decode_genesis, ChainConfig, CheckError, DiffReport, Difference, ErrorKind, Genesis,
    GenesisAccount, ProviderError,
};
pub use ports::{CheckReport, GenesisCheckApi, GenesisComparator, GenesisProvider};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed once the local genesis is confirmed reproducible.
pub const SUCCESS_MESSAGE: &str = "👌 Regenerated genesis config matches existing one";
