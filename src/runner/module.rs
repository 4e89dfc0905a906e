use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;

use crate::error::{ModularityError, Result};
use crate::issue::Issue;
use crate::position::SourceRange;
use crate::rules::Rule;
use crate::scanner::BlockScanner;
use crate::schema::{Block, BodySchema};

use super::Runner;

/// In-memory [`Runner`] over a loaded module.
///
/// Holds read-only snapshots of files, blocks, and per-rule config tables,
/// and collects emitted issues. [`ModuleRunner::snapshot`] produces a view
/// sharing the same snapshots with a fresh issue sink, so each rule can be
/// evaluated in parallel against its own runner.
pub struct ModuleRunner {
    files: Arc<IndexMap<String, Vec<u8>>>,
    blocks: Arc<Vec<Block>>,
    rule_configs: Arc<HashMap<String, toml::Value>>,
    issues: Mutex<Vec<Issue>>,
}

impl ModuleRunner {
    /// Build a runner from raw files and an already-expanded block catalog.
    ///
    /// Files are reordered lexicographically and blocks by (file, line,
    /// column) so "first encountered" is deterministic.
    #[must_use]
    pub fn new(mut files: IndexMap<String, Vec<u8>>, mut blocks: Vec<Block>) -> Self {
        files.sort_keys();
        blocks.sort_by_key(|b| b.def_range.def_pos());
        Self {
            files: Arc::new(files),
            blocks: Arc::new(blocks),
            rule_configs: Arc::new(HashMap::new()),
            issues: Mutex::new(Vec::new()),
        }
    }

    /// Build a runner from (name, source) pairs, scanning block headers.
    ///
    /// # Errors
    /// Returns an error if the block scanner cannot be constructed.
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self> {
        let scanner = BlockScanner::new()?;
        let mut files = IndexMap::new();
        let mut blocks = Vec::new();
        for (name, source) in sources {
            files.insert((*name).to_string(), source.as_bytes().to_vec());
            blocks.extend(scanner.scan(name, source));
        }
        Ok(Self::new(files, blocks))
    }

    /// Attach a user configuration table for one rule.
    #[must_use]
    pub fn with_rule_config(mut self, rule: &str, value: toml::Value) -> Self {
        Arc::make_mut(&mut self.rule_configs).insert(rule.to_string(), value);
        self
    }

    /// A view over the same module snapshots with an empty issue sink.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            files: Arc::clone(&self.files),
            blocks: Arc::clone(&self.blocks),
            rule_configs: Arc::clone(&self.rule_configs),
            issues: Mutex::new(Vec::new()),
        }
    }

    /// Issues emitted so far, in emission order.
    #[must_use]
    pub fn issues(&self) -> Vec<Issue> {
        self.issues.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Consume the runner, yielding the emitted issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues.into_inner().unwrap_or_default()
    }

    fn validate_range(&self, rule: &dyn Rule, range: &SourceRange) -> Result<()> {
        if range.is_empty() {
            return Ok(());
        }
        if !self.files.contains_key(&range.filename) {
            return Err(ModularityError::IssueRejected {
                rule: rule.name().to_string(),
                reason: format!("range names unknown file: {}", range.filename),
            });
        }
        if range.start.line == 0 || range.start.column == 0 {
            return Err(ModularityError::IssueRejected {
                rule: rule.name().to_string(),
                reason: format!(
                    "range has zero position: {}:{}:{}",
                    range.filename, range.start.line, range.start.column
                ),
            });
        }
        Ok(())
    }
}

impl Runner for ModuleRunner {
    fn files(&self) -> Result<&IndexMap<String, Vec<u8>>> {
        Ok(&self.files)
    }

    fn module_content(&self, schema: &BodySchema) -> Result<Vec<Block>> {
        Ok(self
            .blocks
            .iter()
            .filter(|b| schema.matches(b))
            .cloned()
            .collect())
    }

    fn rule_config(&self, rule: &str) -> Result<Option<toml::Value>> {
        Ok(self.rule_configs.get(rule).cloned())
    }

    fn emit_issue(&self, rule: &dyn Rule, message: &str, range: SourceRange) -> Result<()> {
        self.validate_range(rule, &range)?;
        let mut issues = self
            .issues
            .lock()
            .map_err(|_| ModularityError::HostQuery {
                what: "issue sink poisoned".to_string(),
            })?;
        issues.push(Issue {
            rule: rule.name().to_string(),
            severity: rule.severity(),
            message: message.to_string(),
            range,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
