//! # Genesis Check Service
//!
//! Linear pipeline: read, decode, extract chain ID, look up the canonical
//! genesis, compare. Each stage maps its failure onto exactly one
//! [`CheckError`] variant and stops the pipeline.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{decode_genesis, CheckError, DiffReport, Genesis};
use crate::ports::{CheckReport, GenesisCheckApi, GenesisComparator, GenesisProvider};

/// Genesis check service.
pub struct GenesisChecker<P: GenesisProvider, C: GenesisComparator> {
    /// Canonical genesis source.
    provider: P,
    /// Structural comparison.
    comparator: C,
}

impl<P: GenesisProvider, C: GenesisComparator> GenesisChecker<P, C> {
    /// Create a new checker.
    pub fn new(provider: P, comparator: C) -> Self {
        Self {
            provider,
            comparator,
        }
    }

    /// Canonical genesis source.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Decode local genesis bytes.
    pub fn parse(bytes: &[u8]) -> Result<Genesis, CheckError> {
        Ok(decode_genesis(bytes)?)
    }
}

impl<P: GenesisProvider, C: GenesisComparator> GenesisCheckApi for GenesisChecker<P, C> {
    fn check_file(&self, path: &Path) -> Result<CheckReport, CheckError> {
        debug!(path = %path.display(), "Reading local genesis");
        let bytes = fs::read(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let local = Self::parse(&bytes)?;
        self.check_genesis(&local)
    }

    fn check_genesis(&self, local: &Genesis) -> Result<CheckReport, CheckError> {
        let chain_id = local.config.chain_id;
        debug!(chain_id, "Looking up canonical genesis");

        let canonical = self
            .provider
            .lookup(chain_id)
            .map_err(|source| CheckError::Lookup { chain_id, source })?;

        let report = DiffReport::new(self.comparator.compare(local, &canonical));
        if !report.is_empty() {
            warn!(
                chain_id,
                differences = report.len(),
                "Local genesis diverges from canonical genesis"
            );
            return Err(CheckError::Mismatch(report));
        }

        info!(chain_id, "Local genesis matches canonical genesis");
        Ok(CheckReport { chain_id })
    }
}
