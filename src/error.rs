use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModularityError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Host query failed: {what}")]
    HostQuery { what: String },

    #[error("Decoding config for rule {rule}: {message}")]
    ConfigDecode { rule: String, message: String },

    #[error("Issue rejected for rule {rule}: {reason}")]
    IssueRejected { rule: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ModularityError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
