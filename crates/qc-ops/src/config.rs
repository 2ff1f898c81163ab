//! # Ops Configuration
//!
//! Where the canonical genesis registry lives.
//!
//! Resolution order: CLI flag, then `QC_GENESIS_REGISTRY`, then the default
//! `./registry/genesis`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable overriding the registry directory.
pub const REGISTRY_ENV: &str = "QC_GENESIS_REGISTRY";

/// Default registry directory, relative to the working directory.
pub const DEFAULT_REGISTRY_DIR: &str = "./registry/genesis";

/// Configuration for operator commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpsConfig {
    /// Directory holding `<chain_id>.json` canonical genesis files.
    pub registry_dir: PathBuf,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            registry_dir: PathBuf::from(DEFAULT_REGISTRY_DIR),
        }
    }
}

impl OpsConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(REGISTRY_ENV).filter(|v| !v.trim().is_empty()) {
            info!(registry = %dir, "Loaded registry directory from environment");
            config.registry_dir = PathBuf::from(dir);
        }

        config
    }

    /// Create a config for testing rooted at `registry_dir`.
    pub fn for_testing(registry_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry_dir: registry_dir.into(),
        }
    }

    /// Apply a CLI override, if any.
    pub fn with_registry_dir(mut self, registry_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = registry_dir {
            self.registry_dir = dir;
        }
        self
    }
}
