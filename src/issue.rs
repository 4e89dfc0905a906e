use serde::{Deserialize, Serialize};

use crate::position::SourceRange;
use crate::rules::Severity;

/// One reported rule violation. Produced at emission time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub range: SourceRange,
}

impl Issue {
    /// Sort key for stable output: position first, then rule name.
    #[must_use]
    pub fn sort_key(&self) -> (&str, usize, usize, &str) {
        (
            &self.range.filename,
            self.range.start.line,
            self.range.start.column,
            &self.rule,
        )
    }
}
