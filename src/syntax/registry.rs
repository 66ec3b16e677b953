//! Dialect registry
//!
//! This module provides the DialectRegistry that owns the dialects a host
//! can bind its text fields to, built-in and custom.

use std::collections::HashMap;

use super::builtin;
use super::dialect::RuleTable;
use super::palette::Palette;
use crate::error::{HighlightError, Result};

/// Built-in aliases, by dialect name
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("sql", &["bigquery", "bq"]),
    ("log", &["logging", "log-filter"]),
];

/// Named collection of dialects
pub struct DialectRegistry {
    /// Dialects by lowercase name
    dialects: HashMap<String, RuleTable>,
    /// Lowercase alias to dialect name
    aliases: HashMap<String, String>,
}

impl DialectRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            dialects: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create a registry with the built-in dialects styled by `palette`
    pub fn new(palette: &Palette) -> Self {
        let mut registry = Self::empty();

        for dialect in builtin::all_dialects(palette) {
            let aliases = BUILTIN_ALIASES
                .iter()
                .find(|(name, _)| *name == dialect.name())
                .map(|(_, aliases)| *aliases)
                .unwrap_or(&[]);
            registry.add(dialect, aliases);
        }

        registry
    }

    /// Add a dialect, replacing any dialect with the same name
    pub fn add(&mut self, dialect: RuleTable, aliases: &[&str]) {
        let name = dialect.name().to_lowercase();
        log::debug!(
            "registering dialect '{}' ({} rules)",
            name,
            dialect.rules().len()
        );
        for alias in aliases {
            self.aliases.insert(alias.to_lowercase(), name.clone());
        }
        self.dialects.insert(name, dialect);
    }

    /// Add custom dialects from `[[dialects]]` config entries.
    ///
    /// Each entry may carry an `aliases` array next to the fields
    /// [`RuleTable::from_toml_table`] reads.
    pub fn add_from_toml(&mut self, entries: &[toml::Table], palette: &Palette) -> Result<()> {
        for entry in entries {
            let dialect = RuleTable::from_toml_table(entry, palette)?;
            let aliases: Vec<&str> = entry
                .get("aliases")
                .and_then(|v| v.as_array())
                .map(|arr| arr.iter().filter_map(|a| a.as_str()).collect())
                .unwrap_or_default();
            self.add(dialect, &aliases);
        }
        Ok(())
    }

    /// Look up a dialect by name or alias, ignoring case.
    ///
    /// Dialect names shadow aliases.
    pub fn get(&self, name: &str) -> Option<&RuleTable> {
        let key = name.to_lowercase();
        self.dialects.get(&key).or_else(|| {
            self.aliases
                .get(&key)
                .and_then(|target| self.dialects.get(target))
        })
    }

    /// Look up a dialect, failing with `UnknownDialect`
    pub fn require(&self, name: &str) -> Result<&RuleTable> {
        self.get(name)
            .ok_or_else(|| HighlightError::UnknownDialect(name.to_string()))
    }

    /// List available dialect names
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.dialects.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new(&Palette::default())
    }
}
