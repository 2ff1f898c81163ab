//! # Genesis Document
//!
//! The `genesis.json` schema is [`alloy_genesis::Genesis`]. This module only
//! adds what the check needs on top of it: a decoder that requires the chain
//! ID and treats `null` members as absent, and the canonical JSON tree the
//! comparator walks.
//!
//! Chain-config keys that alloy has no typed field for (rollup forks, future
//! timestamps, `optimism` parameters) are kept in
//! [`ChainConfig::extra_fields`] and serialize back into `config`, so they
//! take part in the comparison.

use serde::de::Error as _;
use serde_json::Value;

pub use alloy_genesis::{ChainConfig, Genesis, GenesisAccount};

/// Decode a genesis document from JSON bytes.
///
/// Object members set to `null` take their default value, as if they were
/// absent. `config.chainId` is required.
pub fn decode_genesis(bytes: &[u8]) -> Result<Genesis, serde_json::Error> {
    let mut doc: Value = serde_json::from_slice(bytes)?;
    strip_nulls(&mut doc);

    let config = doc
        .get("config")
        .ok_or_else(|| serde_json::Error::missing_field("config"))?;
    if config.get("chainId").is_none() {
        return Err(serde_json::Error::missing_field("chainId"));
    }

    serde_json::from_value(doc)
}

/// Canonical JSON tree of `genesis`: quantities and hex fields re-encoded,
/// object keys sorted.
pub fn genesis_tree(genesis: &Genesis) -> Result<Value, serde_json::Error> {
    serde_json::to_value(genesis)
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
