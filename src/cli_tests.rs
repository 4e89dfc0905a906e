use clap::CommandFactory;
use clap::Parser;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn check_defaults_to_the_current_directory() {
    let cli = Cli::parse_from(["tf-modularity", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.path, PathBuf::from("."));
            assert_eq!(args.format, "text");
        }
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn check_accepts_path_and_format() {
    let cli = Cli::parse_from(["tf-modularity", "check", "modules/vpc", "--format", "json"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.path, PathBuf::from("modules/vpc"));
            assert_eq!(args.format, "json");
        }
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn global_flags_parse_after_the_subcommand() {
    let cli = Cli::parse_from(["tf-modularity", "check", "--quiet", "--config", "custom.toml"]);
    assert!(cli.quiet);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn init_parses_force() {
    let cli = Cli::parse_from(["tf-modularity", "init", "--force"]);
    match cli.command {
        Commands::Init(args) => assert!(args.force),
        other => panic!("expected init, got {other:?}"),
    }
}
