mod loader;
mod model;

pub use loader::{CONFIG_FILE_NAMES, DEFAULT_CONFIG_TEMPLATE, discover, load, resolve};
pub use model::{Config, RuleOverride, ScannerConfig};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
