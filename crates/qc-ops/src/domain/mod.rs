//! # Domain Module
//!
//! Core types for the genesis check.

pub mod diff;
pub mod errors;
pub mod genesis;

pub use diff::*;
pub use errors::*;
pub use genesis::*;
