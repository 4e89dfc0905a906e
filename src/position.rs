use serde::{Deserialize, Serialize};

/// A 1-based (line, column) position in a source file.
///
/// `(0, 0)` is the "no position" sentinel used when a finding cannot be
/// anchored to any file (e.g. a module with no files at all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    pub line: usize,
    pub column: usize,
}

impl SourcePos {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A span in a named source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub filename: String,
    pub start: SourcePos,
    pub end: SourcePos,
}

impl SourceRange {
    #[must_use]
    pub fn new(filename: impl Into<String>, start: SourcePos, end: SourcePos) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }

    /// Range pointing at line 1, column 1 of a file.
    #[must_use]
    pub fn file_start(filename: impl Into<String>) -> Self {
        let pos = SourcePos::new(1, 1);
        Self::new(filename, pos, pos)
    }

    /// Zero-width range at a single position.
    #[must_use]
    pub fn at(filename: impl Into<String>, line: usize, column: usize) -> Self {
        let pos = SourcePos::new(line, column);
        Self::new(filename, pos, pos)
    }

    /// True for the "no position" sentinel (no filename, zero positions).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filename.is_empty()
    }

    /// The declaration identity of this range.
    #[must_use]
    pub fn def_pos(&self) -> DefPos {
        DefPos {
            filename: self.filename.clone(),
            line: self.start.line,
            column: self.start.column,
        }
    }
}

/// Identity of a textual declaration: where it was written.
///
/// Repetition constructs (count/for_each) expand one textual declaration into
/// many logical instances that all share this position. Two declarations are
/// the same logical declaration iff their `DefPos` values are equal; labels
/// and object identity play no part.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefPos {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod tests;
