//! Module loading: directory walk plus block header scanning.
//!
//! This is the bundled convenience host, not an HCL parser. It recognizes
//! top-level block headers of the form `kind "label" "label" {` written at
//! column 1 and records their def ranges. It performs no expression
//! evaluation and no count/for_each expansion.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;
use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScannerConfig;
use crate::error::{ModularityError, Result};
use crate::position::{SourcePos, SourceRange};
use crate::schema::Block;

const TF_EXTENSION: &str = "tf";

const HEADER_PATTERN: &str = r#"^([A-Za-z_][A-Za-z0-9_-]*)((?:[ \t]+"[^"]*")*)[ \t]*\{"#;
const LABEL_PATTERN: &str = r#""([^"]*)""#;

/// A loaded module: raw files plus the scanned block catalog.
#[derive(Debug, Clone, Default)]
pub struct ScannedModule {
    pub files: IndexMap<String, Vec<u8>>,
    pub blocks: Vec<Block>,
}

/// Recognizes top-level block headers and their positions.
#[derive(Debug)]
pub struct BlockScanner {
    header: Regex,
    label: Regex,
}

impl BlockScanner {
    /// # Errors
    /// Returns an error if the header patterns fail to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(HEADER_PATTERN)?,
            label: Regex::new(LABEL_PATTERN)?,
        })
    }

    /// Scan one file's source for block headers, in line order.
    #[must_use]
    pub fn scan(&self, filename: &str, source: &str) -> Vec<Block> {
        let mut blocks = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            let Some(caps) = self.header.captures(line) else {
                continue;
            };

            let kind = &caps[1];
            let labels: Vec<String> = self
                .label
                .captures_iter(&caps[2])
                .map(|c| c[1].to_string())
                .collect();

            // Def range covers the header through its last label, matching
            // how block definitions are reported by HCL-based hosts.
            let header_end = caps
                .get(2)
                .filter(|m| !m.as_str().is_empty())
                .or_else(|| caps.get(1))
                .map_or(0, |m| m.end());

            let line_no = idx + 1;
            blocks.push(Block {
                kind: kind.to_string(),
                labels,
                def_range: SourceRange::new(
                    filename,
                    SourcePos::new(line_no, 1),
                    SourcePos::new(line_no, header_end + 1),
                ),
            });
        }

        blocks
    }
}

/// Walks a module directory collecting `.tf` files and their blocks.
#[derive(Debug)]
pub struct ModuleScanner {
    excludes: GlobSet,
    block_scanner: BlockScanner,
}

impl ModuleScanner {
    /// # Errors
    /// Returns an error if an exclude pattern is invalid.
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|source| ModularityError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let excludes = builder
            .build()
            .map_err(|source| ModularityError::InvalidPattern {
                pattern: config.exclude.join(", "),
                source,
            })?;

        Ok(Self {
            excludes,
            block_scanner: BlockScanner::new()?,
        })
    }

    /// Load the module rooted at `root`.
    ///
    /// Files are keyed by their path relative to `root` and inserted in
    /// lexicographic order; hidden directories (`.terraform`, `.git`) are
    /// skipped.
    ///
    /// # Errors
    /// Returns an error if the walk or a file read fails.
    pub fn scan(&self, root: &Path) -> Result<ScannedModule> {
        // BTreeMap keeps the inventory in lexicographic order.
        let mut entries: BTreeMap<String, Vec<u8>> = BTreeMap::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TF_EXTENSION) {
                continue;
            }

            let rel = path.strip_prefix(root).unwrap_or(path);
            if self.excludes.is_match(rel) {
                continue;
            }

            let content = fs::read(path).map_err(|source| ModularityError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            entries.insert(rel.to_string_lossy().into_owned(), content);
        }

        let mut module = ScannedModule::default();
        for (name, content) in entries {
            let source = String::from_utf8_lossy(&content);
            module.blocks.extend(self.block_scanner.scan(&name, &source));
            module.files.insert(name, content);
        }

        Ok(module)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
