use super::*;

#[test]
fn schema_matches_kind_and_label_count() {
    let schema = BodySchema::new().block("resource", 2).block("data", 2);

    let resource = Block::new("resource", &["aws_instance", "a"], SourceRange::default());
    let module = Block::new("module", &["vpc"], SourceRange::default());
    let bare_data = Block::new("data", &["aws_ami"], SourceRange::default());

    assert!(schema.matches(&resource));
    assert!(!schema.matches(&module));
    assert!(!schema.matches(&bare_data));
}

#[test]
fn extra_labels_still_match() {
    let schema = BodySchema::new().block("data", 2);
    let block = Block::new("data", &["aws_ami", "u", "extra"], SourceRange::default());
    assert!(schema.matches(&block));
}
