//! The modularity ruleset: rule identity surface and the four policies.

mod file_line_limit;
mod policy_doc_location;
mod required_files;
mod resource_file_limit;

pub use file_line_limit::FileLineLimit;
pub use policy_doc_location::PolicyDocLocation;
pub use required_files::RequiredFiles;
pub use resource_file_limit::ResourceFileLimit;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::runner::Runner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
        };
        f.write_str(s)
    }
}

/// A stateless structural-convention policy.
///
/// Each run is a pure function of the runner's snapshots: a rule pulls files
/// and/or blocks, applies its policy, and emits findings. Rules carry no
/// state across invocations; per-run tunables are decoded into an immutable
/// value at the start of `check`.
pub trait Rule: Send + Sync {
    /// Stable rule name, also the key of its `[rule.<name>]` config table.
    fn name(&self) -> &'static str;

    /// Whether the rule runs when the user has not enabled or disabled it.
    fn enabled_by_default(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Documentation link, empty when none exists.
    fn link(&self) -> &'static str {
        ""
    }

    /// Evaluate the rule over one module.
    ///
    /// # Errors
    /// Any host-query, config-decode, or emission failure aborts the run;
    /// findings already emitted stand, nothing further is reported.
    fn check(&self, runner: &dyn Runner) -> Result<()>;
}

/// The ruleset advertised to hosts: a name, a version, and the rules.
pub struct Ruleset {
    pub name: &'static str,
    pub version: &'static str,
    rules: Vec<Box<dyn Rule>>,
}

impl Ruleset {
    #[must_use]
    pub fn modularity() -> Self {
        Self {
            name: "modularity",
            version: env!("CARGO_PKG_VERSION"),
            rules: vec![
                Box::new(FileLineLimit::new()),
                Box::new(ResourceFileLimit::new()),
                Box::new(RequiredFiles::new()),
                Box::new(PolicyDocLocation::new()),
            ],
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .map(AsRef::as_ref)
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::modularity()
    }
}

/// Base name of a path-like file name, for user-facing messages.
pub(crate) fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
