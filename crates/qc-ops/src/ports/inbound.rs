//! # Inbound Ports
//!
//! API exposed by the genesis check service.

use std::path::Path;

use crate::domain::{CheckError, Genesis};

/// Outcome of a successful check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    /// Chain ID shared by the local and canonical genesis.
    pub chain_id: u64,
}

/// Genesis reproducibility check - inbound port.
pub trait GenesisCheckApi {
    /// Read, decode and verify a local genesis file.
    fn check_file(&self, path: &Path) -> Result<CheckReport, CheckError>;

    /// Verify an already-decoded genesis against its canonical counterpart.
    fn check_genesis(&self, local: &Genesis) -> Result<CheckReport, CheckError>;
}
