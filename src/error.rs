//! Error types for query-highlight
//!
//! Tokenizing never fails. These errors come from the layers around it:
//! reading configuration, compiling custom dialects, and driving the terminal.

use thiserror::Error;

/// Result type alias for query-highlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid pattern in rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Invalid style '{0}'")]
    InvalidStyle(String),

    #[error("Invalid config: {0}")]
    Config(String),
}
