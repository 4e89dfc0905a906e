use std::fmt::Write;
use std::io::IsTerminal;

use crate::error::Result;
use crate::issue::Issue;
use crate::rules::Severity;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Notice => ansi::CYAN,
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, issues: &[Issue]) -> Result<String> {
        let mut out = String::new();

        for issue in issues {
            let location = if issue.range.is_empty() {
                "(module)".to_string()
            } else {
                format!(
                    "{}:{}:{}",
                    issue.range.filename, issue.range.start.line, issue.range.start.column
                )
            };
            let severity = self.paint(
                Self::severity_color(issue.severity),
                &issue.severity.to_string(),
            );
            let _ = writeln!(
                out,
                "{location}: {severity}: {}: {}",
                issue.rule, issue.message
            );
        }

        let errors = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        if issues.is_empty() {
            let _ = writeln!(out, "{}", self.paint(ansi::GREEN, "No issues found."));
        } else {
            let _ = writeln!(
                out,
                "\n{} issue(s) found ({errors} error(s), {warnings} warning(s))",
                issues.len()
            );
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
