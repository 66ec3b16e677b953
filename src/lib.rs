//! query-highlight - live highlighting for SQL and log-filter query fields
//!
//! Hosts bind a text field to a [`RuleTable`] and re-run [`tokenize`] on
//! every edit. The result is a gap-free list of segments, each carrying the
//! style to draw it with.
//!
//! ```
//! use query_highlight::{tokenize, Category, DialectRegistry};
//!
//! let registry = DialectRegistry::default();
//! let sql = registry.get("sql").unwrap();
//! let segments = tokenize(sql, "select * FROM t");
//! assert_eq!(segments[0].category, Some(Category::Keyword));
//! assert_eq!(segments[0].text, "select");
//! ```

pub mod config;
pub mod error;
pub mod line;
pub mod syntax;
pub mod terminal;

pub use error::{HighlightError, Result};
pub use syntax::{
    tokenize, Category, Color, DialectRegistry, Palette, RuleTable, Segment, Style,
};
