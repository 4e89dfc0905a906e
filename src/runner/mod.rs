//! The host contract consumed by rules.
//!
//! A [`Runner`] supplies read-only snapshots of the module under analysis
//! (files and declared blocks), per-rule configuration, and the issue sink.
//! Any failure from these queries is fatal for the calling rule's run: no
//! retry, no partial reporting.

mod module;

pub use module::ModuleRunner;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::error::{ModularityError, Result};
use crate::position::SourceRange;
use crate::rules::Rule;
use crate::schema::{Block, BodySchema};

pub trait Runner: Sync {
    /// Snapshot of module files: name -> raw bytes.
    ///
    /// Iteration order is the host's insertion order. The bundled host
    /// inserts in lexicographic file-name order, so "first encountered"
    /// is deterministic.
    ///
    /// # Errors
    /// Fails when the host cannot supply the file snapshot.
    fn files(&self) -> Result<&IndexMap<String, Vec<u8>>>;

    /// Declarations of the requested kinds, already expanded for repetition
    /// constructs, each carrying its originating def range.
    ///
    /// # Errors
    /// Fails when the host cannot supply the block catalog.
    fn module_content(&self, schema: &BodySchema) -> Result<Vec<Block>>;

    /// Raw user-supplied configuration for a rule, if any.
    ///
    /// # Errors
    /// Fails when the host cannot access its configuration source.
    fn rule_config(&self, rule: &str) -> Result<Option<toml::Value>>;

    /// Deliver one finding. The host may reject a malformed range; the error
    /// aborts the remaining findings of that rule's evaluation.
    ///
    /// # Errors
    /// Fails when the host rejects the issue.
    fn emit_issue(&self, rule: &dyn Rule, message: &str, range: SourceRange) -> Result<()>;
}

/// Decode a rule's user configuration over its defaults.
///
/// Absent configuration yields `T::default()`; a present table must match
/// the rule's shape.
///
/// # Errors
/// Returns [`ModularityError::ConfigDecode`] when the supplied table does
/// not deserialize into `T`.
pub fn decode_rule_config<T>(runner: &dyn Runner, rule: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match runner.rule_config(rule)? {
        Some(value) => value
            .try_into()
            .map_err(|e: toml::de::Error| ModularityError::ConfigDecode {
                rule: rule.to_string(),
                message: e.to_string(),
            }),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
