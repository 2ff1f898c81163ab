//! # Registry Provider
//!
//! Canonical genesis documents stored in a registry directory, one file per
//! chain: `<registry_dir>/<chain_id>.json`.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::OpsConfig;
use crate::domain::{decode_genesis, Genesis, ProviderError};
use crate::ports::GenesisProvider;

/// Directory-backed canonical genesis provider.
#[derive(Clone, Debug)]
pub struct RegistryGenesisProvider {
    root: PathBuf,
}

impl RegistryGenesisProvider {
    /// Provider reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Provider reading from the configured registry directory.
    pub fn from_config(config: &OpsConfig) -> Self {
        Self::new(config.registry_dir.clone())
    }

    /// Path of the entry for `chain_id`.
    pub fn entry_path(&self, chain_id: u64) -> PathBuf {
        self.root.join(format!("{chain_id}.json"))
    }
}

impl GenesisProvider for RegistryGenesisProvider {
    fn lookup(&self, chain_id: u64) -> Result<Genesis, ProviderError> {
        let path = self.entry_path(chain_id);
        debug!(path = %path.display(), chain_id, "Loading canonical genesis");

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ProviderError::NotRegistered(chain_id));
            }
            Err(source) => return Err(ProviderError::Unreadable { path, source }),
        };

        let genesis = decode_genesis(&bytes)
            .map_err(|source| ProviderError::Malformed { chain_id, source })?;

        if genesis.config.chain_id != chain_id {
            return Err(ProviderError::ChainIdMismatch {
                requested: chain_id,
                found: genesis.config.chain_id,
            });
        }

        info!(chain_id, accounts = genesis.alloc.len(), "Canonical genesis loaded");
        Ok(genesis)
    }
}
