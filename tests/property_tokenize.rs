//! Property-based tokenizer tests (proptest).

use proptest::prelude::*;

use query_highlight::syntax::{tokenize, DialectRegistry, Segment};

/// Fragments that exercise every rule of both dialects
const FRAGMENTS: &[&str] = &[
    "SELECT", "select", "FROM", "WHERE", "AND", "or", "NOT", "COUNT", "date", "SELECTED",
    "severity", "resource.type", "jsonPayload", ".", "insertId", "x", "_", "5", " ", "\t",
    "\"", "'", "`", "=", ">=", "!", "<", "(", ")", ",", "*", "é", "日本",
];

/// Query-like text built from dialect fragments
fn query_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.concat())
}

/// Check concatenation, contiguity and repeatability for one dialect
fn check_partition(dialect: &str, input: &str) -> Result<(), TestCaseError> {
    let registry = DialectRegistry::default();
    let table = registry.get(dialect).expect("built-in dialect");
    let segments: Vec<Segment<'_>> = tokenize(table, input);

    let joined: String = segments.iter().map(|s| s.text).collect();
    prop_assert_eq!(joined.as_str(), input, "text must be reproduced exactly");

    let mut expected_start = 0;
    for segment in &segments {
        prop_assert_eq!(segment.range.start, expected_start, "ranges must be contiguous");
        prop_assert!(segment.range.start < segment.range.end, "ranges must be non-empty");
        prop_assert_eq!(&input[segment.range.clone()], segment.text);
        expected_start = segment.range.end;
    }
    prop_assert_eq!(expected_start, input.len());

    prop_assert_eq!(&tokenize(table, input), &segments, "repeated calls must agree");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_sql_partitions_any_string(input in any::<String>()) {
        check_partition("sql", &input)?;
    }

    #[test]
    fn prop_log_partitions_any_string(input in any::<String>()) {
        check_partition("log", &input)?;
    }

    #[test]
    fn prop_sql_partitions_query_text(input in query_text()) {
        check_partition("sql", &input)?;
    }

    #[test]
    fn prop_log_partitions_query_text(input in query_text()) {
        check_partition("log", &input)?;
    }
}
