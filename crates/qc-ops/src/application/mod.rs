//! # Application Layer
//!
//! Service orchestrating the genesis check.

pub mod service;

pub use service::GenesisChecker;
