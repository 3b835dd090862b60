//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Value used for a childless node that carries no static value,
    /// e.g. `(A (B) 3)`. Such nodes are leaves, never errors.
    pub missing_leaf_value: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { missing_leaf_value: 0 }
    }
}

impl SearchConfig {
    /// Create a new config with a custom fallback leaf value.
    pub fn with_missing_leaf_value(mut self, value: i64) -> Self {
        self.missing_leaf_value = value;
        self
    }
}
