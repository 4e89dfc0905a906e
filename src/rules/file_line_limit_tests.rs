use super::*;
use crate::rules::test_support::{options, run_rule, run_rule_with_config, runner_for};

#[test]
fn line_count_empty_is_zero() {
    assert_eq!(line_count(b""), 0);
}

#[test]
fn line_count_with_trailing_newline_counts_newlines() {
    assert_eq!(line_count(b"a\nb\n"), 2);
    assert_eq!(line_count(b"\n"), 1);
}

#[test]
fn line_count_without_trailing_newline_adds_one() {
    assert_eq!(line_count(b"a\nb"), 2);
    assert_eq!(line_count(b"a"), 1);
}

#[test]
fn file_at_limit_produces_no_issue() {
    let rule = FileLineLimit::with_max_lines(2);
    let issues = run_rule(&rule, &[("main.tf", "# one\n# two\n")]);
    assert!(issues.is_empty());
}

#[test]
fn file_over_limit_produces_one_issue() {
    let rule = FileLineLimit::with_max_lines(2);
    let issues = run_rule(&rule, &[("main.tf", "# one\n# two\n# three\n")]);

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].message,
        "main.tf has 3 lines, exceeding the limit of 2"
    );
    assert_eq!(issues[0].range.filename, "main.tf");
    assert_eq!(issues[0].range.start.line, 1);
    assert_eq!(issues[0].range.start.column, 1);
}

#[test]
fn comment_only_lines_count() {
    // 11 comment-only lines against a limit of 10.
    let source = "# filler\n".repeat(11);
    let rule = FileLineLimit::with_max_lines(10);
    let issues = run_rule(&rule, &[("main.tf", &source)]);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("11 lines"));
}

#[test]
fn each_offending_file_gets_its_own_issue() {
    let rule = FileLineLimit::with_max_lines(1);
    let issues = run_rule(
        &rule,
        &[("a.tf", "x\ny\n"), ("b.tf", "x\n"), ("c.tf", "x\ny\nz\n")],
    );

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].range.filename, "a.tf");
    assert_eq!(issues[1].range.filename, "c.tf");
}

#[test]
fn message_uses_base_name_for_nested_files() {
    let rule = FileLineLimit::with_max_lines(1);
    let issues = run_rule(&rule, &[("modules/vpc/main.tf", "x\ny\n")]);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.starts_with("main.tf has 2 lines"));
    assert_eq!(issues[0].range.filename, "modules/vpc/main.tf");
}

#[test]
fn config_override_replaces_default() {
    let rule = FileLineLimit::new();
    let config = options("max_lines = 1");
    let issues = run_rule_with_config(&rule, &[("main.tf", "x\ny\n")], config);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("limit of 1"));
}

#[test]
fn malformed_config_is_a_decode_error() {
    let rule = FileLineLimit::new();
    let config = options("max_lines = \"ten\"");
    let runner = runner_for(&[("main.tf", "x\n")]).with_rule_config(rule.name(), config);

    let err = rule.check(&runner).unwrap_err();
    assert!(matches!(
        err,
        crate::error::ModularityError::ConfigDecode { .. }
    ));
    assert!(runner.issues().is_empty());
}

#[test]
fn misspelled_config_key_is_a_decode_error() {
    let rule = FileLineLimit::new();
    let config = options("max_line = 10");
    let runner = runner_for(&[("main.tf", "x\n")]).with_rule_config(rule.name(), config);

    let err = rule.check(&runner).unwrap_err();
    assert!(matches!(
        err,
        crate::error::ModularityError::ConfigDecode { .. }
    ));
}

#[test]
fn default_limit_is_500() {
    let rule = FileLineLimit::new();
    let at_limit = "x\n".repeat(500);
    let over_limit = "x\n".repeat(501);

    assert!(run_rule(&rule, &[("main.tf", &at_limit)]).is_empty());
    assert_eq!(run_rule(&rule, &[("main.tf", &over_limit)]).len(), 1);
}
