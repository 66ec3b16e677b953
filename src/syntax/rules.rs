//! Pattern rules for query highlighting
//!
//! A rule pairs a matcher with the category it produces and the way that
//! category is styled, so matching and styling can never disagree.

use regex::Regex;

use super::tokens::Category;
use crate::error::{HighlightError, Result};

/// How a rule's matches are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleRule {
    /// Use the dialect palette's style for the rule's category
    #[default]
    Palette,
    /// Recognize the text but draw it in the base style
    Inherit,
}

/// A single pattern rule
///
/// Rules are tried in declaration order; the first declared rule wins when
/// two rules match at the same position.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category assigned to matches
    pub category: Category,
    /// How matches are styled
    pub style_rule: StyleRule,
}

impl PatternRule {
    /// Create a new pattern rule from a regex
    pub fn new(name: &str, pattern: &str, category: Category) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            category,
            style_rule: StyleRule::Palette,
        })
    }

    /// Create a rule matching any word of a fixed vocabulary.
    ///
    /// Matching is case-insensitive and only on whole words, so `SELECTED`
    /// never matches `SELECT`.
    pub fn vocabulary(name: &str, words: &[&str], category: Category) -> Result<Self> {
        Self::new(name, &vocabulary_pattern(words, true), category)
    }

    /// Builder: set how matches are styled
    pub fn with_style_rule(mut self, style_rule: StyleRule) -> Self {
        self.style_rule = style_rule;
        self
    }

    /// Find the first non-empty match at or after `start`.
    ///
    /// The search sees the whole text, so `\b` and `^` behave the same no
    /// matter where the search starts.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let mut from = start;
        while from <= text.len() {
            let m = self.pattern.find_at(text, from)?;
            if m.start() < m.end() {
                return Some((m.start(), m.end()));
            }
            // Empty match: retry from the next char boundary
            from = m.start() + 1;
            while from < text.len() && !text.is_char_boundary(from) {
                from += 1;
            }
        }
        None
    }
}

/// Build a whole-word alternation over `words`.
///
/// Longer words come first so no alternative can shadow a longer one.
pub fn vocabulary_pattern(words: &[&str], case_insensitive: bool) -> String {
    let mut sorted: Vec<&str> = words.iter().copied().filter(|w| !w.is_empty()).collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted.dedup();

    let alternatives: Vec<String> = sorted.iter().map(|w| regex::escape(w)).collect();
    let flags = if case_insensitive { "(?i)" } else { "" };
    format!(r"{}\b(?:{})\b", flags, alternatives.join("|"))
}
