//! # Adapters
//!
//! Implementations of the outbound ports.

pub mod comparator;
pub mod memory;
pub mod registry;

pub use comparator::JsonTreeComparator;
pub use memory::InMemoryGenesisProvider;
pub use registry::RegistryGenesisProvider;
