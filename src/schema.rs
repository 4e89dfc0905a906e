use serde::{Deserialize, Serialize};

use crate::position::SourceRange;

/// One declared block: its kind, labels, and where it was written.
///
/// Blocks are handed to rules already expanded for repetition constructs;
/// expanded instances share the `def_range` of the textual declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: String,
    pub labels: Vec<String>,
    pub def_range: SourceRange,
}

impl Block {
    #[must_use]
    pub fn new(kind: impl Into<String>, labels: &[&str], def_range: SourceRange) -> Self {
        Self {
            kind: kind.into(),
            labels: labels.iter().map(ToString::to_string).collect(),
            def_range,
        }
    }
}

/// Request for blocks of one kind carrying at least `label_count` labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSchema {
    pub kind: String,
    pub label_count: usize,
}

/// The set of block kinds a rule wants from the module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodySchema {
    pub blocks: Vec<BlockSchema>,
}

impl BodySchema {
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    #[must_use]
    pub fn block(mut self, kind: &str, label_count: usize) -> Self {
        self.blocks.push(BlockSchema {
            kind: kind.to_string(),
            label_count,
        });
        self
    }

    /// Whether a block satisfies any entry of this schema.
    #[must_use]
    pub fn matches(&self, block: &Block) -> bool {
        self.blocks
            .iter()
            .any(|s| s.kind == block.kind && block.labels.len() >= s.label_count)
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
