//! # JSON Tree Comparator
//!
//! Compares two genesis documents through their canonical JSON trees.
//! Serialization re-encodes every typed quantity and hex field, so the walk
//! sees values rather than representations: `0x01`, `1` and `0x0001`
//! balances are the same leaf. Chain-config keys without a typed field are
//! compared as written.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{genesis_tree, Difference, Genesis};
use crate::ports::GenesisComparator;

/// Path label for a difference at the document root.
const ROOT: &str = "(root)";

/// Deep structural comparator over canonical JSON trees.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonTreeComparator;

impl JsonTreeComparator {
    /// Create a comparator.
    pub fn new() -> Self {
        Self
    }

    /// Compare two arbitrary JSON trees.
    pub fn compare_values(&self, local: &Value, canonical: &Value) -> Vec<Difference> {
        let mut out = Vec::new();
        walk("", local, canonical, &mut out);
        out
    }

    /// Compare two trees that may have failed to serialize. A side that has
    /// no tree is never equal to the other one: the result is a single root
    /// difference carrying the serializer error.
    fn compare_trees(
        &self,
        local: Result<Value, serde_json::Error>,
        canonical: Result<Value, serde_json::Error>,
    ) -> Vec<Difference> {
        match (local, canonical) {
            (Ok(local), Ok(canonical)) => self.compare_values(&local, &canonical),
            (local, canonical) => {
                warn!("Genesis could not be serialized for comparison");
                vec![Difference::changed(
                    ROOT,
                    tree_or_error(local),
                    tree_or_error(canonical),
                )]
            }
        }
    }
}

impl GenesisComparator for JsonTreeComparator {
    fn compare(&self, local: &Genesis, canonical: &Genesis) -> Vec<Difference> {
        // Typed equality is exact; skip the tree walk in the common case.
        if local == canonical {
            return Vec::new();
        }
        let differences = self.compare_trees(genesis_tree(local), genesis_tree(canonical));
        debug!(count = differences.len(), "Structural comparison finished");
        differences
    }
}

fn tree_or_error(tree: Result<Value, serde_json::Error>) -> Value {
    tree.unwrap_or_else(|err| Value::String(format!("<unserializable: {err}>")))
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn walk(path: &str, local: &Value, canonical: &Value, out: &mut Vec<Difference>) {
    match (local, canonical) {
        (Value::Object(l), Value::Object(c)) => {
            let mut keys: Vec<&String> = l.keys().chain(c.keys()).collect();
            keys.sort();
            keys.dedup();
            for key in keys {
                let next = child_path(path, key);
                match (l.get(key), c.get(key)) {
                    (Some(lv), Some(cv)) => walk(&next, lv, cv, out),
                    (Some(lv), None) => out.push(Difference::removed(next, lv.clone())),
                    (None, Some(cv)) => out.push(Difference::added(next, cv.clone())),
                    (None, None) => {}
                }
            }
        }
        (Value::Array(l), Value::Array(c)) => {
            for index in 0..l.len().max(c.len()) {
                let next = format!("{path}[{index}]");
                match (l.get(index), c.get(index)) {
                    (Some(lv), Some(cv)) => walk(&next, lv, cv, out),
                    (Some(lv), None) => out.push(Difference::removed(next, lv.clone())),
                    (None, Some(cv)) => out.push(Difference::added(next, cv.clone())),
                    (None, None) => {}
                }
            }
        }
        (l, c) if l == c => {}
        (l, c) => {
            let label = if path.is_empty() { ROOT } else { path };
            out.push(Difference::changed(label, l.clone(), c.clone()));
        }
    }
}
