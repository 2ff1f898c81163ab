//! # Domain Errors
//!
//! Error types for the genesis check.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::diff::DiffReport;

/// Failure category of a check, one per pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Local file could not be read.
    Read,
    /// Local file is not a valid genesis document.
    Parse,
    /// Canonical genesis could not be obtained.
    Lookup,
    /// Local and canonical genesis differ.
    Mismatch,
}

impl ErrorKind {
    /// Process exit code reported by the `qc-ops` binary.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Mismatch => 1,
            ErrorKind::Read => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Lookup => 4,
        }
    }
}

/// Genesis check error.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Local genesis file missing or unreadable.
    #[error("failed to read from local genesis file {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Local genesis bytes are malformed, do not match the schema, or carry a
    /// chain ID that is missing or wider than 64 bits.
    #[error("failed to unmarshal local genesis into Genesis: {0}")]
    Parse(#[from] serde_json::Error),

    /// Canonical genesis unavailable for the chain ID.
    #[error(
        "failed to load canonical genesis: ensure chain {chain_id} has already been added to the registry: {source}"
    )]
    Lookup {
        /// Chain ID read from the local file.
        chain_id: u64,
        /// Provider failure.
        #[source]
        source: ProviderError,
    },

    /// Local genesis diverges from the canonical one.
    #[error("local genesis (-) does not match canonical genesis (+):\n{0}")]
    Mismatch(DiffReport),
}

impl CheckError {
    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::Read { .. } => ErrorKind::Read,
            CheckError::Parse(_) => ErrorKind::Parse,
            CheckError::Lookup { .. } => ErrorKind::Lookup,
            CheckError::Mismatch(_) => ErrorKind::Mismatch,
        }
    }
}

/// Errors raised by a canonical genesis provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No canonical genesis registered for the chain ID.
    #[error("chain {0} is not registered")]
    NotRegistered(u64),

    /// Registry entry exists but cannot be read.
    #[error("registry entry {} is unreadable: {source}", .path.display())]
    Unreadable {
        /// Registry file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Registry entry is not a valid genesis document.
    #[error("registry entry for chain {chain_id} is malformed: {source}")]
    Malformed {
        /// Requested chain ID.
        chain_id: u64,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Registry entry describes a different chain.
    #[error("registry entry for chain {requested} declares chain {found}")]
    ChainIdMismatch {
        /// Requested chain ID.
        requested: u64,
        /// Chain ID declared by the entry.
        found: u64,
    },
}
