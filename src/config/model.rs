use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModularityError, Result};
use crate::rules::Ruleset;

/// User configuration: scanner settings plus per-rule `[rule.<name>]` tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Per-rule overrides, keyed by rule name.
    #[serde(default, rename = "rule")]
    pub rules: BTreeMap<String, RuleOverride>,
}

/// Scanner configuration for module file discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Glob patterns (relative to the module root) to skip entirely.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// One `[rule.<name>]` table: an enabled flag plus rule-specific options
/// that are handed to the rule's own config decoder untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(flatten)]
    pub options: toml::Table,
}

impl Config {
    /// # Errors
    /// Returns an error if the source is not valid TOML of this shape.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The user's enabled/disabled choice for a rule, if stated.
    #[must_use]
    pub fn rule_enabled(&self, name: &str) -> Option<bool> {
        self.rules.get(name).and_then(|r| r.enabled)
    }

    /// Rule-specific options as a TOML table, if any were given.
    #[must_use]
    pub fn rule_options(&self, name: &str) -> Option<toml::Value> {
        self.rules
            .get(name)
            .filter(|r| !r.options.is_empty())
            .map(|r| toml::Value::Table(r.options.clone()))
    }

    /// Reject config tables naming rules the ruleset does not carry.
    ///
    /// # Errors
    /// Returns a configuration error for the first unknown rule name.
    pub fn validate(&self, ruleset: &Ruleset) -> Result<()> {
        for name in self.rules.keys() {
            if ruleset.find(name).is_none() {
                return Err(ModularityError::Config(format!(
                    "unknown rule in config: {name}"
                )));
            }
        }
        Ok(())
    }
}
