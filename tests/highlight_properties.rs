//! End-to-end checks of the built-in dialects

use query_highlight::syntax::{tokenize, Category, DialectRegistry, Segment};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "SELECT",
    "SELECTED",
    r#""SELECT" FROM"#,
    "select FROM",
    "a >= 5",
    "x != y AND NOT z <> 'w'",
    r#"severity="CRITICAL" AND resource.type="gce_instance""#,
    "jsonPayload.a.b.c =~ \"x\" OR logName:\"y\"",
    "SELECT COUNT(*), `proj.ds.t` FROM `proj.ds.t` WHERE ts > TIMESTAMP('2024-01-01')",
    "\"unterminated SELECT",
    "'also unterminated",
    "`tick",
    "é日本 select 'ü' FROM ✓",
    "\n\tWHERE\r\n",
    "!!!===<<<>>>",
    "ANDOR NOTAND severity.severity",
];

fn segments_for<'a>(registry: &'a DialectRegistry, name: &str, input: &'a str) -> Vec<Segment<'a>> {
    tokenize(registry.get(name).unwrap(), input)
}

fn summary<'a>(segments: &[Segment<'a>]) -> Vec<(&'a str, Option<Category>, bool)> {
    segments
        .iter()
        .map(|s| (s.text, s.category, s.is_plain()))
        .collect()
}

#[test]
fn test_segments_cover_input() {
    let registry = DialectRegistry::default();
    for dialect in ["sql", "log"] {
        for input in SAMPLES {
            let segments = segments_for(&registry, dialect, input);
            let joined: String = segments.iter().map(|s| s.text).collect();
            assert_eq!(&joined, input, "{} / {:?}", dialect, input);
        }
    }
}

#[test]
fn test_segments_partition_input() {
    let registry = DialectRegistry::default();
    for dialect in ["sql", "log"] {
        for input in SAMPLES {
            let mut expected_start = 0;
            for segment in segments_for(&registry, dialect, input) {
                assert_eq!(segment.range.start, expected_start, "{:?}", input);
                assert!(segment.range.start < segment.range.end, "{:?}", input);
                assert_eq!(&input[segment.range.clone()], segment.text);
                expected_start = segment.range.end;
            }
            assert_eq!(expected_start, input.len());
        }
    }
}

#[test]
fn test_idempotent() {
    let registry = DialectRegistry::default();
    for dialect in ["sql", "log"] {
        for input in SAMPLES {
            assert_eq!(
                segments_for(&registry, dialect, input),
                segments_for(&registry, dialect, input)
            );
        }
    }
}

#[test]
fn test_empty_input() {
    let registry = DialectRegistry::default();
    assert!(segments_for(&registry, "sql", "").is_empty());
    assert!(segments_for(&registry, "log", "").is_empty());
}

#[test]
fn test_string_beats_keyword() {
    let registry = DialectRegistry::default();
    let segments = segments_for(&registry, "sql", r#""SELECT" FROM"#);
    assert_eq!(
        summary(&segments),
        vec![
            (r#""SELECT""#, Some(Category::StringLiteral), false),
            (" ", None, true),
            ("FROM", Some(Category::Keyword), false),
        ]
    );
}

#[test]
fn test_keywords_ignore_case_and_keep_text() {
    let registry = DialectRegistry::default();
    let segments = segments_for(&registry, "sql", "select FROM");
    assert_eq!(
        summary(&segments),
        vec![
            ("select", Some(Category::Keyword), false),
            (" ", None, true),
            ("FROM", Some(Category::Keyword), false),
        ]
    );
}

#[test]
fn test_keyword_needs_word_boundary() {
    let registry = DialectRegistry::default();
    let segments = segments_for(&registry, "sql", "SELECTED");
    assert_eq!(summary(&segments), vec![("SELECTED", None, true)]);
}

#[test]
fn test_log_field_paths() {
    let registry = DialectRegistry::default();
    let input = r#"severity="CRITICAL" AND resource.type="gce_instance""#;
    let segments = segments_for(&registry, "log", input);
    let expected: Vec<(&str, bool)> = vec![
        ("severity", false),
        ("=", true),
        (r#""CRITICAL""#, false),
        (" ", true),
        ("AND", false),
        (" ", true),
        ("resource.type", false),
        ("=", true),
        (r#""gce_instance""#, false),
    ];
    let actual: Vec<(&str, bool)> = segments.iter().map(|s| (s.text, s.is_plain())).collect();
    assert_eq!(actual, expected);

    assert_eq!(segments[0].category, Some(Category::FieldReference));
    assert_eq!(segments[2].category, Some(Category::StringLiteral));
    assert_eq!(segments[4].category, Some(Category::LogicalOperator));
    assert_eq!(segments[6].category, Some(Category::FieldReference));
    assert_eq!(segments[8].category, Some(Category::StringLiteral));
}

#[test]
fn test_comparison_operator_is_one_segment() {
    let registry = DialectRegistry::default();
    let segments = segments_for(&registry, "sql", "a >= 5");
    assert_eq!(
        summary(&segments),
        vec![
            ("a ", None, true),
            (">=", Some(Category::ComparisonOperator), false),
            (" 5", None, true),
        ]
    );
}

#[test]
fn test_unterminated_quote_falls_back() {
    let registry = DialectRegistry::default();
    let segments = segments_for(&registry, "sql", "\"unterminated SELECT");
    assert_eq!(
        summary(&segments),
        vec![
            ("\"unterminated ", None, true),
            ("SELECT", Some(Category::Keyword), false),
        ]
    );
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = DialectRegistry::default();
    let sql = registry.get("sql").unwrap();
    let expected = tokenize(sql, "SELECT a FROM b");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(tokenize(sql, "SELECT a FROM b"), expected));
        }
    });
}
