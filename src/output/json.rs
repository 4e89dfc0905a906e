use serde::Serialize;

use crate::error::Result;
use crate::issue::Issue;
use crate::rules::Severity;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    issues: &'a [Issue],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    errors: usize,
    warnings: usize,
    notices: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let (errors, warnings, notices) =
            issues
                .iter()
                .fold((0, 0, 0), |(e, w, n), issue| match issue.severity {
                    Severity::Error => (e + 1, w, n),
                    Severity::Warning => (e, w + 1, n),
                    Severity::Notice => (e, w, n + 1),
                });

        let output = JsonOutput {
            summary: Summary {
                total: issues.len(),
                errors,
                warnings,
                notices,
            },
            issues,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
