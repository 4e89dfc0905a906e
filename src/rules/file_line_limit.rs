use serde::Deserialize;

use crate::error::Result;
use crate::position::SourceRange;
use crate::runner::{Runner, decode_rule_config};

use super::{Rule, base_name};

const DEFAULT_MAX_LINES: usize = 500;

/// Checks that no module file exceeds a maximum line count.
pub struct FileLineLimit {
    max_lines: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileLineLimitConfig {
    max_lines: Option<usize>,
}

impl FileLineLimit {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    #[must_use]
    pub const fn with_max_lines(max_lines: usize) -> Self {
        Self { max_lines }
    }
}

impl Default for FileLineLimit {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of newline bytes, plus one when content is non-empty and does not
/// end in a newline. An empty file has zero lines.
fn line_count(content: &[u8]) -> usize {
    let newlines = content.iter().filter(|&&b| b == b'\n').count();
    if content.is_empty() || content.ends_with(b"\n") {
        newlines
    } else {
        newlines + 1
    }
}

impl Rule for FileLineLimit {
    fn name(&self) -> &'static str {
        "terraform_file_line_limit"
    }

    fn check(&self, runner: &dyn Runner) -> Result<()> {
        let config: FileLineLimitConfig = decode_rule_config(runner, self.name())?;
        let max_lines = config.max_lines.unwrap_or(self.max_lines);

        for (name, content) in runner.files()? {
            let lines = line_count(content);
            if lines > max_lines {
                runner.emit_issue(
                    self,
                    &format!(
                        "{} has {lines} lines, exceeding the limit of {max_lines}",
                        base_name(name)
                    ),
                    SourceRange::file_start(name.as_str()),
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "file_line_limit_tests.rs"]
mod tests;
