//! Built-in dialect definitions
//!
//! This module provides the rule tables for the query languages the
//! dashboard's text fields accept out of the box.

pub mod log_filter;
pub mod sql;

use super::dialect::RuleTable;
use super::palette::Palette;
use super::rules::PatternRule;
use super::tokens::Category;
use crate::error::Result;

/// Get all built-in dialects, styled with `palette`
pub fn all_dialects(palette: &Palette) -> Vec<RuleTable> {
    vec![sql::sql_dialect(palette), log_filter::log_filter_dialect(palette)]
}

/// Add a built-in rule, logging it if it fails to compile
fn add_rule(table: &mut RuleTable, rule: Result<PatternRule>) {
    match rule {
        Ok(rule) => table.add_rule(rule),
        Err(e) => log::warn!("dialect '{}': skipping rule: {}", table.name(), e),
    }
}

/// Double- and single-quoted strings, no escapes
fn add_string_rules(table: &mut RuleTable) {
    add_rule(table, PatternRule::new("double_string", r#""[^"]*""#, Category::StringLiteral));
    add_rule(table, PatternRule::new("single_string", r"'[^']*'", Category::StringLiteral));
}

/// Runs of comparison characters
fn comparison_rule() -> Result<PatternRule> {
    PatternRule::new("comparison", r"[<>=!]+", Category::ComparisonOperator)
}

/// AND, OR, NOT as whole words in any case
fn logical_rule() -> Result<PatternRule> {
    PatternRule::vocabulary("logical", &["AND", "OR", "NOT"], Category::LogicalOperator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dialects() {
        let names: Vec<_> = all_dialects(&Palette::default())
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["sql", "log"]);
    }
}
