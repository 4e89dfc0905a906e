use indexmap::IndexMap;

use super::*;
use crate::rules::test_support::{options, run_rule, run_rule_with_config, runner_for};
use crate::runner::ModuleRunner;
use crate::schema::Block;

fn run_with_blocks(
    rule: &ResourceFileLimit,
    files: &[(&str, &str)],
    blocks: Vec<Block>,
) -> Vec<crate::issue::Issue> {
    let files: IndexMap<String, Vec<u8>> = files
        .iter()
        .map(|(name, source)| ((*name).to_string(), source.as_bytes().to_vec()))
        .collect();
    let runner = ModuleRunner::new(files, blocks);
    rule.check(&runner).expect("rule check");
    runner.into_issues()
}

#[test]
fn single_resource_produces_no_issue() {
    let rule = ResourceFileLimit::new();
    let issues = run_rule(&rule, &[("main.tf", "resource \"aws_instance\" \"a\" {}\n")]);
    assert!(issues.is_empty());
}

#[test]
fn resources_at_limit_produce_no_issue() {
    let rule = ResourceFileLimit::with_max_resources(2);
    let source = "resource \"aws_instance\" \"a\" {}\nresource \"aws_instance\" \"b\" {}\n";
    assert!(run_rule(&rule, &[("main.tf", source)]).is_empty());
}

#[test]
fn resources_over_limit_produce_one_issue() {
    let rule = ResourceFileLimit::with_max_resources(2);
    let source = "\
resource \"aws_instance\" \"a\" {}
resource \"aws_instance\" \"b\" {}
resource \"aws_instance\" \"c\" {}
";
    let issues = run_rule(&rule, &[("main.tf", source)]);

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "main.tf has 3 resource/data blocks, exceeding the limit of 2"
    );
}

#[test]
fn data_sources_count_toward_limit() {
    let rule = ResourceFileLimit::with_max_resources(2);
    let source = "\
resource \"aws_instance\" \"a\" {}
data \"aws_ami\" \"b\" {}
data \"aws_vpc\" \"c\" {}
";
    assert_eq!(run_rule(&rule, &[("main.tf", source)]).len(), 1);
}

#[test]
fn other_block_kinds_are_ignored() {
    let rule = ResourceFileLimit::with_max_resources(1);
    let source = "\
variable \"name\" {}
module \"vpc\" {}
provider \"aws\" {}
resource \"aws_instance\" \"a\" {}
";
    assert!(run_rule(&rule, &[("main.tf", source)]).is_empty());
}

#[test]
fn resources_split_across_files_stay_under_limit() {
    let rule = ResourceFileLimit::with_max_resources(2);
    let issues = run_rule(
        &rule,
        &[
            (
                "instances.tf",
                "resource \"aws_instance\" \"a\" {}\nresource \"aws_instance\" \"b\" {}\n",
            ),
            (
                "networking.tf",
                "resource \"aws_vpc\" \"a\" {}\nresource \"aws_subnet\" \"b\" {}\n",
            ),
        ],
    );
    assert!(issues.is_empty());
}

#[test]
fn expanded_instances_sharing_a_position_count_once() {
    // A for_each expansion hands the rule five instances of one textual
    // declaration plus two independent resources: three unique declarations.
    let shared = SourceRange::at("main.tf", 1, 1);
    let mut blocks: Vec<Block> = (0..5)
        .map(|_| Block::new("resource", &["aws_budgets_budget", "account"], shared.clone()))
        .collect();
    blocks.push(Block::new(
        "resource",
        &["aws_instance", "a"],
        SourceRange::at("main.tf", 8, 1),
    ));
    blocks.push(Block::new(
        "resource",
        &["aws_instance", "b"],
        SourceRange::at("main.tf", 12, 1),
    ));

    let rule = ResourceFileLimit::with_max_resources(3);
    let issues = run_with_blocks(&rule, &[("main.tf", "")], blocks);
    assert!(issues.is_empty());
}

#[test]
fn unique_count_over_limit_still_flagged_after_dedup() {
    let shared = SourceRange::at("main.tf", 1, 1);
    let mut blocks: Vec<Block> = (0..3)
        .map(|_| Block::new("resource", &["aws_s3_bucket", "b"], shared.clone()))
        .collect();
    for line in [5, 9] {
        blocks.push(Block::new(
            "data",
            &["aws_ami", "x"],
            SourceRange::at("main.tf", line, 1),
        ));
    }

    let rule = ResourceFileLimit::with_max_resources(2);
    let issues = run_with_blocks(&rule, &[("main.tf", "")], blocks);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("has 3 resource/data blocks"));
}

#[test]
fn issue_is_anchored_at_first_declaration_in_file() {
    let rule = ResourceFileLimit::with_max_resources(1);
    let source = "\
# header comment
resource \"aws_instance\" \"a\" {}
resource \"aws_instance\" \"b\" {}
";
    let issues = run_rule(&rule, &[("main.tf", source)]);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].range.start.line, 2);
    assert_eq!(issues[0].range.start.column, 1);
}

#[test]
fn config_override_replaces_default() {
    let rule = ResourceFileLimit::new();
    let source = "\
resource \"aws_instance\" \"a\" {}
resource \"aws_instance\" \"b\" {}
";
    let config = options("max_resources = 1");
    let issues = run_rule_with_config(&rule, &[("main.tf", source)], config);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("limit of 1"));
}

#[test]
fn misspelled_config_key_is_a_decode_error() {
    let rule = ResourceFileLimit::new();
    let config = options("max_resource = 1");
    let runner = runner_for(&[("main.tf", "")]).with_rule_config(rule.name(), config);

    let err = rule.check(&runner).unwrap_err();
    assert!(matches!(
        err,
        crate::error::ModularityError::ConfigDecode { .. }
    ));
}

#[test]
fn files_with_no_qualifying_blocks_never_flagged() {
    let rule = ResourceFileLimit::with_max_resources(0);
    let issues = run_rule(&rule, &[("variables.tf", "variable \"name\" {}\n")]);
    assert!(issues.is_empty());
}
