//! Structured log-filter dialect definition

use super::{add_rule, add_string_rules, comparison_rule, logical_rule};
use crate::syntax::dialect::RuleTable;
use crate::syntax::palette::Palette;
use crate::syntax::rules::{PatternRule, StyleRule};
use crate::syntax::tokens::Category;

/// Root names of log entry fields. Case-sensitive.
pub const FIELD_ROOTS: &[&str] = &[
    "severity",
    "resource.type",
    "insertId",
    "timestamp",
    "logName",
    "textPayload",
    "protoPayload",
    "jsonPayload",
];

/// Pattern for a field root plus any `.sub.path` after it
fn field_pattern() -> String {
    let roots: Vec<String> = FIELD_ROOTS.iter().map(|r| regex::escape(r)).collect();
    format!(r"\b(?:{})(?:\.[A-Za-z0-9_]+)*\b", roots.join("|"))
}

/// Create the log-filter dialect
///
/// Comparison operators are recognized but drawn in the base style.
pub fn log_filter_dialect(palette: &Palette) -> RuleTable {
    let mut table = RuleTable::new("log", palette.clone());

    add_string_rules(&mut table);
    add_rule(&mut table, logical_rule());
    add_rule(
        &mut table,
        PatternRule::new("field", &field_pattern(), Category::FieldReference),
    );
    add_rule(
        &mut table,
        comparison_rule().map(|rule| rule.with_style_rule(StyleRule::Inherit)),
    );

    table
}
