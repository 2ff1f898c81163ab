//! # Structural Differences
//!
//! Value objects describing how a local genesis diverges from the canonical
//! one. Local values are rendered with `-`, canonical values with `+`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One field-level divergence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Difference {
    /// Dotted path from the document root, e.g. `alloc.0x…01.balance`.
    pub path: String,
    /// Value in the local document; `None` when the field is absent there.
    pub local: Option<Value>,
    /// Value in the canonical document; `None` when the field is absent there.
    pub canonical: Option<Value>,
}

impl Difference {
    /// Field present on both sides with different values.
    pub fn changed(path: impl Into<String>, local: Value, canonical: Value) -> Self {
        Self {
            path: path.into(),
            local: Some(local),
            canonical: Some(canonical),
        }
    }

    /// Field present only in the local document.
    pub fn removed(path: impl Into<String>, local: Value) -> Self {
        Self {
            path: path.into(),
            local: Some(local),
            canonical: None,
        }
    }

    /// Field present only in the canonical document.
    pub fn added(path: impl Into<String>, canonical: Value) -> Self {
        Self {
            path: path.into(),
            local: None,
            canonical: Some(canonical),
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}:", self.path)?;
        if let Some(local) = &self.local {
            writeln!(f, "-     {}", local)?;
        }
        if let Some(canonical) = &self.canonical {
            writeln!(f, "+     {}", canonical)?;
        }
        Ok(())
    }
}

/// Ordered list of differences between two genesis documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    differences: Vec<Difference>,
}

impl DiffReport {
    /// Wrap a comparator's output.
    pub fn new(differences: Vec<Difference>) -> Self {
        Self { differences }
    }

    /// No differences at all.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of differing fields.
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// Differences in path order.
    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    /// Paths of every differing field.
    pub fn paths(&self) -> Vec<&str> {
        self.differences.iter().map(|d| d.path.as_str()).collect()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for difference in &self.differences {
            write!(f, "{}", difference)?;
        }
        Ok(())
    }
}
