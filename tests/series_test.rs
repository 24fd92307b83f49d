use tabrs::{build_series, Dataset, Value};

fn state_record(state: &str, year: i64, population: Value) -> Vec<(String, Value)> {
    vec![
        ("State".to_string(), Value::from(state)),
        ("Year".to_string(), Value::Int(year)),
        ("Population".to_string(), population),
    ]
}

#[test]
fn test_series_from_unsorted_rows() {
    let ds = Dataset::from_records(vec![
        state_record("Alabama", 2021, Value::Int(5024279)),
        state_record("Alabama", 2018, Value::Int(4887871)),
        state_record("Alabama", 2020, Value::Int(4921532)),
        state_record("Alabama", 2019, Value::Int(4903185)),
    ])
    .unwrap();

    let series = build_series(&ds, "Population", "Year", "State", None);
    let keys: Vec<i64> = series.iter().map(|p| p.ordering_key).collect();
    assert_eq!(keys, vec![2018, 2019, 2020, 2021]);
    assert_eq!(series[3].value, 5024279.0);
}

#[test]
fn test_series_filters_then_caps() {
    let mut records = Vec::new();
    for i in 0..30 {
        let population = if i % 3 == 0 {
            Value::Null
        } else {
            Value::Int(1000 + i)
        };
        records.push(state_record("s", 2000 + i, population));
    }
    let ds = Dataset::from_records(records).unwrap();

    let series = build_series(&ds, "Population", "Year", "State", Some(12));
    assert_eq!(series.len(), 12);
    for pair in series.windows(2) {
        assert!(pair[0].ordering_key <= pair[1].ordering_key);
    }
    // Nulls were dropped before the cap was applied.
    assert!(series.iter().all(|p| p.value >= 1000.0));
}

#[test]
fn test_series_value_column_not_in_classifier_output() {
    // A "Year"-named column is excluded by the classifier but can still be
    // plotted directly.
    let ds = Dataset::from_records(vec![
        state_record("Alabama", 2019, Value::Int(1)),
        state_record("Alabama", 2020, Value::Int(2)),
    ])
    .unwrap();
    let series = build_series(&ds, "Year", "Year", "State", None);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].value, 2019.0);
}

#[test]
fn test_series_from_empty_dataset_is_empty() {
    let ds = Dataset::new();
    assert!(build_series(&ds, "Population", "Year", "State", Some(12)).is_empty());
}

#[test]
fn test_series_stable_on_equal_keys() {
    let ds = Dataset::from_records(vec![
        state_record("First", 2019, Value::Int(1)),
        state_record("Second", 2019, Value::Int(2)),
        state_record("Third", 2019, Value::Int(3)),
    ])
    .unwrap();
    let series = build_series(&ds, "Population", "Year", "State", None);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["First", "Second", "Third"]);
}
