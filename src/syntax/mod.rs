//! Syntax highlighting for query fields
//!
//! This module provides the tokenizer and the dialects it runs against:
//! - Rule tables describing a dialect's lexemes in precedence order
//! - The tokenizer turning query text into styled segments
//! - Palettes and a registry for hosts to pick dialects by name

mod style;
mod tokens;
mod rules;
mod palette;
mod dialect;
mod tokenizer;
mod registry;
pub mod builtin;

pub use style::{Color, Style};
pub use tokens::Category;
pub use rules::{PatternRule, StyleRule};
pub use palette::Palette;
pub use dialect::RuleTable;
pub use tokenizer::{segments, tokenize, tokenize_with_base, Match, Segment, Segments};
pub use registry::DialectRegistry;
