use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use tf_modularity::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use tf_modularity::config::{self, DEFAULT_CONFIG_TEMPLATE};
use tf_modularity::error::ModularityError;
use tf_modularity::issue::Issue;
use tf_modularity::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use tf_modularity::rules::Ruleset;
use tf_modularity::runner::ModuleRunner;
use tf_modularity::scanner::ModuleScanner;
use tf_modularity::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules => run_rules(),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> tf_modularity::Result<i32> {
    let format: OutputFormat = args.format.parse().map_err(ModularityError::Config)?;

    let config = config::resolve(&args.path, cli.config.as_deref())?;
    let ruleset = Ruleset::modularity();
    config.validate(&ruleset)?;

    let scanner = ModuleScanner::new(&config.scanner)?;
    let module = scanner.scan(&args.path)?;

    let mut base = ModuleRunner::new(module.files, module.blocks);
    for rule in ruleset.rules() {
        if let Some(options) = config.rule_options(rule.name()) {
            base = base.with_rule_config(rule.name(), options);
        }
    }

    let enabled: Vec<_> = ruleset
        .rules()
        .iter()
        .filter(|rule| {
            config
                .rule_enabled(rule.name())
                .unwrap_or_else(|| rule.enabled_by_default())
        })
        .collect();

    // Rules run in parallel, each against its own view of the shared module
    // snapshots; a single rule's evaluation stays sequential.
    let outcomes: Vec<_> = enabled
        .par_iter()
        .map(|rule| {
            let runner = base.snapshot();
            let result = rule.check(&runner).map(|()| runner.into_issues());
            (rule.name(), result)
        })
        .collect();

    let mut issues: Vec<Issue> = Vec::new();
    let mut any_failed = false;
    for (name, result) in outcomes {
        match result {
            Ok(found) => issues.extend(found),
            Err(e) => {
                any_failed = true;
                eprintln!("Error: rule {name}: {e}");
            }
        }
    }

    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let rendered = match format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color)).format(&issues)?,
        OutputFormat::Json => JsonFormatter.format(&issues)?,
    };
    if format == OutputFormat::Json || !issues.is_empty() || !cli.quiet {
        print!("{rendered}");
    }

    if any_failed {
        Ok(EXIT_CONFIG_ERROR)
    } else if issues.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_ISSUES_FOUND)
    }
}

fn run_rules() -> i32 {
    let ruleset = Ruleset::modularity();
    println!("{} ruleset v{}", ruleset.name, ruleset.version);
    for rule in ruleset.rules() {
        let default = if rule.enabled_by_default() {
            "enabled"
        } else {
            "disabled"
        };
        println!(
            "  {} ({}, {} by default)",
            rule.name(),
            rule.severity(),
            default
        );
    }
    EXIT_SUCCESS
}

fn run_init(args: &InitArgs) -> i32 {
    let path = Path::new(config::CONFIG_FILE_NAMES[0]);
    if path.exists() && !args.force {
        eprintln!("Error: {} already exists (use --force to overwrite)", path.display());
        return EXIT_CONFIG_ERROR;
    }

    match fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        Ok(()) => {
            println!("Created {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to write {}: {e}", path.display());
            EXIT_CONFIG_ERROR
        }
    }
}
