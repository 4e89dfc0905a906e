use std::collections::HashSet;

use serde::Deserialize;

use crate::error::Result;
use crate::position::SourceRange;
use crate::runner::{Runner, decode_rule_config};

use super::{Rule, base_name};

/// Checks that the module contains a configured set of files.
pub struct RequiredFiles {
    required: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RequiredFilesConfig {
    required_files: Option<Vec<String>>,
}

impl RequiredFiles {
    #[must_use]
    pub fn new() -> Self {
        Self {
            required: vec!["variables.tf".to_string(), "outputs.tf".to_string()],
        }
    }

    #[must_use]
    pub fn with_required(required: &[&str]) -> Self {
        Self {
            required: required.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for RequiredFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RequiredFiles {
    fn name(&self) -> &'static str {
        "terraform_required_files"
    }

    fn check(&self, runner: &dyn Runner) -> Result<()> {
        let config: RequiredFilesConfig = decode_rule_config(runner, self.name())?;
        let required = config.required_files.as_deref().unwrap_or(&self.required);

        let files = runner.files()?;

        let existing: HashSet<&str> = files.keys().map(|name| base_name(name)).collect();

        // Missing-file findings have no file of their own to point at; anchor
        // them to the first inventory file, or the empty range for a module
        // with no files at all.
        let anchor = files.keys().next().map_or_else(SourceRange::default, |name| {
            SourceRange::file_start(name.as_str())
        });

        for name in required {
            if !existing.contains(name.as_str()) {
                runner.emit_issue(
                    self,
                    &format!("missing required file: {name}"),
                    anchor.clone(),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "required_files_tests.rs"]
mod tests;
