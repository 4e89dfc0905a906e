use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModularityError, Result};

use super::Config;

/// Recognized config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["tfmod.toml", ".tfmod.toml"];

/// Template written by `tf-modularity init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tf-modularity configuration

[scanner]
# Glob patterns (relative to the module root) to skip entirely.
exclude = []

[rule.terraform_file_line_limit]
enabled = true
max_lines = 500

[rule.terraform_resource_file_limit]
enabled = true
max_resources = 5

[rule.terraform_required_files]
enabled = true
required_files = ["variables.tf", "outputs.tf"]

# Organization-specific convention, opt-in.
[rule.terraform_policy_doc_location]
enabled = false
"#;

/// Find a config file in `dir`, if one exists.
#[must_use]
pub fn discover(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load a config file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Config> {
    let source = fs::read_to_string(path).map_err(|source| ModularityError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&source)
}

/// Resolve the effective config: an explicit path must exist; otherwise a
/// discovered file in `dir` is used, falling back to defaults.
///
/// # Errors
/// Returns an error if an explicitly given path is missing or invalid, or a
/// discovered file fails to parse.
pub fn resolve(dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load(path),
        None => discover(dir).map_or_else(|| Ok(Config::default()), |path| load(&path)),
    }
}
