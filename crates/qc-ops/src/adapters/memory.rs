//! # In-Memory Provider
//!
//! Fixed set of canonical genesis documents held in memory.

use std::collections::BTreeMap;

use crate::domain::{Genesis, ProviderError};
use crate::ports::GenesisProvider;

/// Canonical genesis provider backed by a map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryGenesisProvider {
    entries: BTreeMap<u64, Genesis>,
}

impl InMemoryGenesisProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `genesis` under `chain_id`, replacing any previous entry.
    pub fn with(mut self, chain_id: u64, genesis: Genesis) -> Self {
        self.entries.insert(chain_id, genesis);
        self
    }
}

impl GenesisProvider for InMemoryGenesisProvider {
    fn lookup(&self, chain_id: u64) -> Result<Genesis, ProviderError> {
        self.entries
            .get(&chain_id)
            .cloned()
            .ok_or(ProviderError::NotRegistered(chain_id))
    }
}
