//! Random input trees.
//!
//! Leaves are drawn from a seeded [`TreeRng`] and hung, left to right, under
//! a complete binary tree whose internal nodes are labelled `A`, `B`, `C`,
//! ... in breadth-first order. The result is bracketed text ready for the
//! parser.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::TreeRng;

/// Shape of a generated tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of leaves.
    pub leaves: usize,
    /// Smallest leaf value (inclusive).
    pub min: i64,
    /// Largest leaf value (inclusive).
    pub max: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            leaves: 16,
            min: 1,
            max: 15,
        }
    }
}

impl GeneratorConfig {
    pub fn with_leaves(mut self, leaves: usize) -> Self {
        self.leaves = leaves;
        self
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// Draw `count` leaf values from `range`.
pub fn random_leaves(rng: &mut TreeRng, count: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    let (low, high) = range.into_inner();
    (0..count).map(|_| rng.gen_value(low, high)).collect()
}

/// Generate a random tree as bracketed text.
///
/// Returns `None` when `config.leaves` is zero.
pub fn random_tree_text(rng: &mut TreeRng, config: &GeneratorConfig) -> Option<String> {
    let values = random_leaves(rng, config.leaves, config.min..=config.max);
    balanced_tree_text(&values)
}

/// Lay `values` out as the leaves of a complete binary tree.
///
/// Leaves sit at depth `ceil(log2(n))`, filled left to right; internal nodes
/// with no leaves beneath them are omitted. A single value becomes `(A v)`.
/// Returns `None` for an empty slice.
#[must_use]
pub fn balanced_tree_text(values: &[i64]) -> Option<String> {
    match values.len() {
        0 => None,
        1 => Some(format!("({} {})", label(0), values[0])),
        n => {
            let layout = Layout::new(n);
            let mut out = String::with_capacity(n * 6);
            layout.render(values, 0, 0, &mut out);
            Some(out)
        }
    }
}

/// Spreadsheet-style labels: `A`..`Z`, then `AA`, `AB`, ...
#[must_use]
pub fn label(mut index: usize) -> String {
    let mut bytes = Vec::new();
    loop {
        bytes.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    bytes.reverse();
    String::from_utf8_lossy(&bytes).into_owned()
}

struct Layout {
    leaves: usize,
    leaf_depth: u32,
    /// Breadth-first label offset of the first node on each internal level.
    offsets: Vec<usize>,
}

impl Layout {
    fn new(leaves: usize) -> Self {
        let leaf_depth = usize::BITS - (leaves - 1).leading_zeros();
        let mut offsets = Vec::with_capacity(leaf_depth as usize);
        let mut next = 0;
        for depth in 0..leaf_depth {
            offsets.push(next);
            next += leaves.div_ceil(1 << (leaf_depth - depth));
        }
        Self {
            leaves,
            leaf_depth,
            offsets,
        }
    }

    /// Whether the node at `(depth, position)` has any leaf beneath it.
    fn occupied(&self, depth: u32, position: usize) -> bool {
        (position << (self.leaf_depth - depth)) < self.leaves
    }

    fn render(&self, values: &[i64], depth: u32, position: usize, out: &mut String) {
        if depth == self.leaf_depth {
            out.push_str(&values[position].to_string());
            return;
        }

        out.push('(');
        out.push_str(&label(self.offsets[depth as usize] + position));
        for child in [position * 2, position * 2 + 1] {
            if self.occupied(depth + 1, child) {
                out.push(' ');
                self.render(values, depth + 1, child, out);
            }
        }
        out.push(')');
    }
}
