//! Category palettes
//!
//! The palette is the only place category styles come from. Hosts build one
//! (or load it from config) and hand it to the dialect constructors.

use std::collections::HashMap;

use super::style::{Color, Style};
use super::tokens::Category;
use crate::error::{HighlightError, Result};

/// Mapping from category to the style it is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: HashMap<Category, Style>,
}

impl Palette {
    /// Create a palette with no entries.
    ///
    /// Every lookup falls back to the keyword entry, and then to the
    /// default style.
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Builder: set the style for a category
    pub fn with(mut self, category: Category, style: Style) -> Self {
        self.set(category, style);
        self
    }

    /// Set the style for a category
    pub fn set(&mut self, category: Category, style: Style) {
        self.styles.insert(category, style);
    }

    /// Style for a category.
    ///
    /// Categories without their own entry are drawn like keywords.
    pub fn style(&self, category: Category) -> Style {
        self.styles
            .get(&category)
            .or_else(|| self.styles.get(&Category::Keyword))
            .copied()
            .unwrap_or_default()
    }

    /// Override entries from a `[palette]` TOML table.
    ///
    /// Keys are category names, values are style descriptions understood by
    /// [`Style::parse`].
    pub fn apply_toml(&mut self, table: &toml::Table) -> Result<()> {
        for (key, value) in table {
            let category = Category::from_name(key)
                .ok_or_else(|| HighlightError::UnknownCategory(key.clone()))?;
            let text = value.as_str().ok_or_else(|| {
                HighlightError::Config(format!("palette entry '{}' must be a string", key))
            })?;
            self.set(category, Style::parse(text)?);
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::empty()
            .with(Category::StringLiteral, Style::fg(Color::Green))
            .with(Category::QuotedIdentifier, Style::fg(Color::Yellow))
            .with(Category::Keyword, Style::fg(Color::Blue).with_bold())
            .with(Category::FunctionName, Style::fg(Color::Magenta))
            .with(Category::FieldReference, Style::fg(Color::Cyan))
            .with(Category::LogicalOperator, Style::fg(Color::BrightMagenta).with_bold())
            .with(Category::ComparisonOperator, Style::fg(Color::BrightRed))
    }
}
