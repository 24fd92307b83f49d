use tabrs::{Dataset, Error, Value};

#[test]
fn test_classifier_order_matches_declaration_order() {
    let ds = Dataset::from_records(vec![vec![
        ("Zeta".to_string(), Value::Int(1)),
        ("Alpha".to_string(), Value::Int(2)),
        ("Mid".to_string(), Value::Int(3)),
    ]])
    .unwrap();
    // Declaration order, not alphabetical.
    assert_eq!(
        ds.numeric_columns(),
        vec!["Zeta".to_string(), "Alpha".to_string(), "Mid".to_string()]
    );
}

#[test]
fn test_classifier_case_insensitive_exclusions() {
    let ds = Dataset::from_records(vec![vec![
        ("ID Year".to_string(), Value::Int(2019)),
        ("YEARLY".to_string(), Value::Int(3)),
        ("slug_state".to_string(), Value::Text("1".into())),
        ("Rapid".to_string(), Value::Int(7)),
        ("Population".to_string(), Value::Int(100)),
    ]])
    .unwrap();
    // "Rapid" contains "id" as a substring and is excluded too; the match
    // is a plain substring test, exactly as the consumer expects.
    assert_eq!(ds.numeric_columns(), vec!["Population".to_string()]);
}

#[test]
fn test_classifier_only_inspects_first_row() {
    let ds = Dataset::from_records(vec![
        vec![("Metric".to_string(), Value::Text("12.5".into()))],
        vec![("Metric".to_string(), Value::Text("broken".into()))],
    ])
    .unwrap();
    // Still classified; downstream projections drop the bad row.
    assert_eq!(ds.numeric_columns(), vec!["Metric".to_string()]);
    assert_eq!(ds.numeric_values("Metric"), vec![12.5]);
}

#[test]
fn test_rows_are_not_mutated_by_analysis() {
    let ds = Dataset::from_records(vec![
        vec![
            ("A".to_string(), Value::Int(1)),
            ("B".to_string(), Value::Int(2)),
        ],
        vec![
            ("A".to_string(), Value::Int(3)),
            ("B".to_string(), Value::Int(4)),
        ],
    ])
    .unwrap();
    let before = ds.clone();
    let _ = ds.numeric_columns();
    let _ = ds.numeric_values("A");
    let _ = ds.paired_numeric("A", "B");
    assert_eq!(ds, before);
}

#[test]
fn test_duplicate_column_rejected() {
    let result = Dataset::with_columns(["A", "B", "A"]);
    assert!(matches!(result, Err(Error::DuplicateColumnName(name)) if name == "A"));
}

#[test]
fn test_unknown_column_projections_are_empty() {
    let ds = Dataset::from_records(vec![vec![("A".to_string(), Value::Int(1))]]).unwrap();
    assert!(ds.numeric_values("Missing").is_empty());
    assert!(ds.paired_numeric("A", "Missing").is_empty());
    assert_eq!(ds.column_index("Missing"), None);
}
