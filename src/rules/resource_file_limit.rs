use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use crate::error::Result;
use crate::position::{DefPos, SourceRange};
use crate::runner::{Runner, decode_rule_config};
use crate::schema::BodySchema;

use super::{Rule, base_name};

const DEFAULT_MAX_RESOURCES: usize = 5;

/// Checks that no single file declares more than a maximum number of
/// resource/data blocks.
pub struct ResourceFileLimit {
    max_resources: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ResourceFileLimitConfig {
    max_resources: Option<usize>,
}

impl ResourceFileLimit {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_resources: DEFAULT_MAX_RESOURCES,
        }
    }

    #[must_use]
    pub const fn with_max_resources(max_resources: usize) -> Self {
        Self { max_resources }
    }
}

impl Default for ResourceFileLimit {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for ResourceFileLimit {
    fn name(&self) -> &'static str {
        "terraform_resource_file_limit"
    }

    fn check(&self, runner: &dyn Runner) -> Result<()> {
        let config: ResourceFileLimitConfig = decode_rule_config(runner, self.name())?;
        let max_resources = config.max_resources.unwrap_or(self.max_resources);

        let schema = BodySchema::new().block("resource", 2).block("data", 2);
        let blocks = runner.module_content(&schema)?;

        // The catalog arrives expanded for count/for_each: one entry per
        // logical instance, all sharing the def range of the textual
        // declaration. Unique declarations are what count, and host order
        // decides which declaration anchors a file's finding.
        let mut seen: IndexSet<DefPos> = IndexSet::new();
        let mut file_counts: IndexMap<String, usize> = IndexMap::new();
        let mut file_first_range: IndexMap<String, SourceRange> = IndexMap::new();

        for block in blocks {
            if !seen.insert(block.def_range.def_pos()) {
                continue;
            }

            let filename = block.def_range.filename.clone();
            *file_counts.entry(filename.clone()).or_insert(0) += 1;
            file_first_range.entry(filename).or_insert(block.def_range);
        }

        for (filename, count) in &file_counts {
            if *count > max_resources
                && let Some(range) = file_first_range.get(filename)
            {
                runner.emit_issue(
                    self,
                    &format!(
                        "{} has {count} resource/data blocks, exceeding the limit of {max_resources}",
                        base_name(filename)
                    ),
                    range.clone(),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "resource_file_limit_tests.rs"]
mod tests;
