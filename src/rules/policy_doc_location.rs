use crate::error::Result;
use crate::runner::Runner;
use crate::schema::BodySchema;

use super::{Rule, base_name};

const POLICY_DOC_TYPE: &str = "aws_iam_policy_document";
const CANONICAL_FILE: &str = "policies.tf";

/// Checks that `aws_iam_policy_document` data sources live in `policies.tf`.
///
/// Disabled by default: this encodes an organization-specific convention,
/// not a universal structural rule.
pub struct PolicyDocLocation;

impl PolicyDocLocation {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PolicyDocLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PolicyDocLocation {
    fn name(&self) -> &'static str {
        "terraform_policy_doc_location"
    }

    fn enabled_by_default(&self) -> bool {
        false
    }

    fn check(&self, runner: &dyn Runner) -> Result<()> {
        let schema = BodySchema::new().block("data", 2);
        let blocks = runner.module_content(&schema)?;

        for block in blocks {
            if block.labels.len() < 2 || block.labels[0] != POLICY_DOC_TYPE {
                continue;
            }

            let basename = base_name(&block.def_range.filename);
            if basename != CANONICAL_FILE {
                runner.emit_issue(
                    self,
                    &format!(
                        "{POLICY_DOC_TYPE} \"{}\" should be in {CANONICAL_FILE}, found in {basename}",
                        block.labels[1]
                    ),
                    block.def_range.clone(),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "policy_doc_location_tests.rs"]
mod tests;
