//! BigQuery-style SQL dialect definition

use super::{add_rule, add_string_rules, comparison_rule, logical_rule};
use crate::syntax::dialect::RuleTable;
use crate::syntax::palette::Palette;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::Category;

/// SQL keywords, matched case-insensitively on word boundaries
pub const KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "AND", "OR", "NOT", "AS", "JOIN", "LEFT", "RIGHT", "INNER",
    "OUTER", "FULL", "CROSS", "ON", "USING", "GROUP", "BY", "ORDER", "DESC", "ASC", "LIMIT",
    "OFFSET", "HAVING", "WITH", "IN", "IS", "NULL", "UNION", "ALL", "EXCEPT", "INTERSECT",
    "TRUE", "FALSE", "CAST", "EXTRACT", "BETWEEN", "CASE", "WHEN", "THEN", "ELSE", "END", "LIKE",
];

/// SQL function names, matched like keywords
pub const FUNCTIONS: &[&str] = &[
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "ARRAY_AGG",
    "STRING_AGG",
    "COALESCE",
    "IFNULL",
    "TIMESTAMP",
    "DATE",
    "DATETIME",
    "JSON_EXTRACT_SCALAR",
    "REGEXP_CONTAINS",
];

/// Create the SQL dialect
///
/// AND, OR and NOT are in the keyword list but are claimed first by the
/// logical operator rule.
pub fn sql_dialect(palette: &Palette) -> RuleTable {
    let mut table = RuleTable::new("sql", palette.clone());

    // Literals first so nothing inside them is matched
    add_string_rules(&mut table);
    add_rule(
        &mut table,
        PatternRule::new("backtick", r"`[^`]*`", Category::QuotedIdentifier),
    );

    add_rule(&mut table, logical_rule());
    add_rule(
        &mut table,
        PatternRule::vocabulary("keyword", KEYWORDS, Category::Keyword),
    );
    add_rule(
        &mut table,
        PatternRule::vocabulary("function", FUNCTIONS, Category::FunctionName),
    );
    add_rule(&mut table, comparison_rule());

    table
}
