//! Dialect rule tables
//!
//! A `RuleTable` is everything the tokenizer knows about one query language:
//! its rules in precedence order and the palette their matches are drawn
//! with. Tables are built once and never change afterwards.

use super::palette::Palette;
use super::rules::{vocabulary_pattern, PatternRule, StyleRule};
use super::style::Style;
use super::tokenizer::{self, Match, Segment, Segments};
use super::tokens::Category;
use crate::error::{HighlightError, Result};

/// The rules and palette of one query dialect
#[derive(Debug, Clone)]
pub struct RuleTable {
    /// Dialect name (e.g., "sql", "log")
    name: String,
    /// Rules in precedence order (earlier wins ties)
    rules: Vec<PatternRule>,
    /// Styles for each category
    palette: Palette,
}

impl RuleTable {
    /// Create a new table with no rules
    pub fn new(name: &str, palette: Palette) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
            palette,
        }
    }

    /// Append a rule. Rules added earlier take precedence.
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.rules.push(rule);
    }

    /// Dialect name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in precedence order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Distinct categories in the order they are first declared
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for rule in &self.rules {
            if !categories.contains(&rule.category) {
                categories.push(rule.category);
            }
        }
        categories
    }

    /// Resolve the style for a match on top of the host's base style.
    ///
    /// Total over every category: the palette falls back to the keyword
    /// style for categories it has no entry for.
    pub fn style_for(&self, m: &Match<'_>, base: Style) -> Style {
        match m.style_rule {
            StyleRule::Inherit => base,
            StyleRule::Palette => base.patch(self.palette.style(m.category)),
        }
    }

    /// Tokenize `text` against this table with the default base style
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Vec<Segment<'a>> {
        tokenizer::tokenize(self, text)
    }

    /// Lazily tokenize `text` against this table
    pub fn segments<'a>(&'a self, text: &'a str, base: Style) -> Segments<'a> {
        tokenizer::segments(self, text, base)
    }

    /// Build a table from a TOML dialect definition.
    ///
    /// ```toml
    /// name = "kql"
    ///
    /// [[rules]]
    /// name = "string"
    /// category = "string"
    /// pattern = '"[^"]*"'
    ///
    /// [[rules]]
    /// name = "keywords"
    /// category = "keyword"
    /// words = ["where", "project", "summarize"]
    /// ```
    ///
    /// A rule has either `pattern` or `words`. `words` match whole words and
    /// ignore case unless `case-sensitive = true`. `style = "inherit"` draws
    /// the rule's matches in the base style.
    pub fn from_toml_table(table: &toml::Table, palette: &Palette) -> Result<Self> {
        let name = table
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| HighlightError::Config("dialect is missing a name".to_string()))?;

        let mut dialect = RuleTable::new(name, palette.clone());

        let rules = match table.get("rules") {
            Some(value) => value.as_array().ok_or_else(|| {
                HighlightError::Config(format!("dialect '{}': rules must be an array", name))
            })?,
            None => return Ok(dialect),
        };

        for (idx, value) in rules.iter().enumerate() {
            let rule_table = value.as_table().ok_or_else(|| {
                HighlightError::Config(format!("dialect '{}': rule {} is not a table", name, idx))
            })?;
            dialect.add_rule(rule_from_toml(name, idx, rule_table)?);
        }

        Ok(dialect)
    }
}

/// Compile one `[[rules]]` entry
fn rule_from_toml(dialect: &str, idx: usize, table: &toml::Table) -> Result<PatternRule> {
    let rule_name = table
        .get("name")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("{}-rule-{}", dialect, idx));

    let category_name = table.get("category").and_then(|v| v.as_str()).ok_or_else(|| {
        HighlightError::Config(format!("rule '{}' is missing a category", rule_name))
    })?;
    let category = Category::from_name(category_name)
        .ok_or_else(|| HighlightError::UnknownCategory(category_name.to_string()))?;

    let pattern = match (table.get("pattern"), table.get("words")) {
        (Some(pattern), None) => pattern
            .as_str()
            .ok_or_else(|| {
                HighlightError::Config(format!("rule '{}': pattern must be a string", rule_name))
            })?
            .to_string(),
        (None, Some(words)) => {
            let words = words
                .as_array()
                .and_then(|arr| arr.iter().map(|w| w.as_str()).collect::<Option<Vec<_>>>())
                .ok_or_else(|| {
                    HighlightError::Config(format!(
                        "rule '{}': words must be an array of strings",
                        rule_name
                    ))
                })?;
            if words.iter().all(|w| w.is_empty()) {
                return Err(HighlightError::Config(format!(
                    "rule '{}': words must not be empty",
                    rule_name
                )));
            }
            let case_sensitive = table
                .get("case-sensitive")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            vocabulary_pattern(&words, !case_sensitive)
        }
        _ => {
            return Err(HighlightError::Config(format!(
                "rule '{}' needs exactly one of pattern or words",
                rule_name
            )))
        }
    };

    let style_rule = match table.get("style").and_then(|v| v.as_str()) {
        None | Some("palette") => StyleRule::Palette,
        Some("inherit") => StyleRule::Inherit,
        Some(other) => {
            return Err(HighlightError::Config(format!(
                "rule '{}': unknown style '{}'",
                rule_name, other
            )))
        }
    };

    let rule = PatternRule::new(&rule_name, &pattern, category)?.with_style_rule(style_rule);
    // An empty match would hide the rule's other alternatives at that offset
    if rule.pattern.is_match("") {
        return Err(HighlightError::Config(format!(
            "rule '{}': pattern matches empty text",
            rule_name
        )));
    }
    Ok(rule)
}
