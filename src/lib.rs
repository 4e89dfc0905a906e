pub mod cli;
pub mod config;
pub mod error;
pub mod issue;
pub mod output;
pub mod position;
pub mod rules;
pub mod runner;
pub mod scanner;
pub mod schema;

pub use error::{ModularityError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
