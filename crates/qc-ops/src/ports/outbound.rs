//! # Outbound Ports
//!
//! Traits for the collaborators of the check: the canonical genesis source
//! and the structural comparison.

use crate::domain::{Difference, Genesis, ProviderError};

/// Canonical genesis source - outbound port.
pub trait GenesisProvider: Send + Sync {
    /// Canonical genesis registered for `chain_id`.
    fn lookup(&self, chain_id: u64) -> Result<Genesis, ProviderError>;
}

/// Structural comparison - outbound port.
pub trait GenesisComparator: Send + Sync {
    /// Every field-level difference between `local` and `canonical`, in path
    /// order. Empty when the two are equal by value.
    fn compare(&self, local: &Genesis, canonical: &Genesis) -> Vec<Difference>;
}

impl<P: GenesisProvider + ?Sized> GenesisProvider for &P {
    fn lookup(&self, chain_id: u64) -> Result<Genesis, ProviderError> {
        (**self).lookup(chain_id)
    }
}

impl<P: GenesisProvider + ?Sized> GenesisProvider for Box<P> {
    fn lookup(&self, chain_id: u64) -> Result<Genesis, ProviderError> {
        (**self).lookup(chain_id)
    }
}
