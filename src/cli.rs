use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "tf-modularity")]
#[command(author, version, about = "Enforce Terraform module structure conventions")]
#[command(long_about = "Checks a Terraform module against structural conventions:\n\
    file line limits, resource/data block counts per file, required files,\n\
    and aws_iam_policy_document placement.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Issues found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to a config file (default: tfmod.toml or .tfmod.toml in the module)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a module against the ruleset
    Check(CheckArgs),

    /// List the rules in the ruleset
    Rules,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Module directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
