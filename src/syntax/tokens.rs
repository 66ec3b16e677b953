//! Lexeme categories for query highlighting
//!
//! A category names what a matched run of query text is. Which category
//! wins when two could match is decided by rule order in the dialect, not
//! here.

/// Semantic categories a rule can assign to matched text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Quoted string literals ("..." or '...')
    StringLiteral,
    /// Backtick-quoted identifiers (`project.dataset.table`)
    QuotedIdentifier,
    /// Query keywords (SELECT, FROM, WHERE, etc.)
    Keyword,
    /// Built-in function names (COUNT, COALESCE, etc.)
    FunctionName,
    /// Log entry field paths (severity, jsonPayload.message, etc.)
    FieldReference,
    /// AND, OR, NOT
    LogicalOperator,
    /// Runs of `<`, `>`, `=`, `!`
    ComparisonOperator,
}

impl Category {
    /// Every category, in a stable order
    pub const ALL: [Category; 7] = [
        Category::StringLiteral,
        Category::QuotedIdentifier,
        Category::Keyword,
        Category::FunctionName,
        Category::FieldReference,
        Category::LogicalOperator,
        Category::ComparisonOperator,
    ];

    /// Get the config name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::StringLiteral => "string",
            Category::QuotedIdentifier => "quoted-identifier",
            Category::Keyword => "keyword",
            Category::FunctionName => "function",
            Category::FieldReference => "field",
            Category::LogicalOperator => "logical-operator",
            Category::ComparisonOperator => "comparison-operator",
        }
    }

    /// Parse a category from its config name (for TOML loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
