use crate::issue::Issue;
use crate::runner::ModuleRunner;

use super::Rule;

pub(crate) fn options(source: &str) -> toml::Value {
    toml::from_str(source).expect("test options")
}

pub(crate) fn runner_for(files: &[(&str, &str)]) -> ModuleRunner {
    ModuleRunner::from_sources(files).expect("build runner")
}

pub(crate) fn run_rule(rule: &dyn Rule, files: &[(&str, &str)]) -> Vec<Issue> {
    let runner = runner_for(files);
    rule.check(&runner).expect("rule check");
    runner.into_issues()
}

pub(crate) fn run_rule_with_config(
    rule: &dyn Rule,
    files: &[(&str, &str)],
    config: toml::Value,
) -> Vec<Issue> {
    let runner = runner_for(files).with_rule_config(rule.name(), config);
    rule.check(&runner).expect("rule check");
    runner.into_issues()
}
