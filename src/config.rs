//! Configuration file support
//!
//! Loads settings from ~/.qhl.toml (or %USERPROFILE%\.qhl.toml on Windows)
//!
//! Example:
//! ```text
//! # query-highlight configuration
//! dialect = "log"
//! color = true
//!
//! [palette]
//! keyword = "bright-blue bold"
//! string = "green italic"
//!
//! [[dialects]]
//! name = "promql"
//! aliases = ["prom"]
//!
//! [[dialects.rules]]
//! category = "function"
//! words = ["rate", "sum", "histogram_quantile"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{HighlightError, Result};
use crate::syntax::{DialectRegistry, Palette};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Dialect used when none is given on the command line
    pub dialect: String,
    /// Whether to emit colors
    pub color: bool,
    /// Category styles
    pub palette: Palette,
    /// Custom dialect definitions, in file order
    pub dialects: Vec<toml::Table>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: "sql".to_string(),
            color: true,
            palette: Palette::default(),
            dialects: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".qhl.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".qhl.toml"))
        }
    }

    /// Load configuration from the default path.
    ///
    /// A missing file gives the defaults. An unreadable or broken one is
    /// logged and also gives the defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from a specific file, with the same fallbacks as
    /// [`Config::load`]
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
            Err(e) => {
                log::warn!("cannot read {}: {}", path.display(), e);
                return Config::default();
            }
        };

        match Self::parse(&contents) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed config table
    fn apply(&mut self, settings: &toml::Table) -> Result<()> {
        if let Some(value) = settings.get("dialect") {
            self.dialect = value
                .as_str()
                .ok_or_else(|| HighlightError::Config("dialect must be a string".to_string()))?
                .to_string();
        }

        if let Some(value) = settings.get("color") {
            self.color = match value {
                toml::Value::Boolean(b) => *b,
                toml::Value::String(s) => parse_bool(s),
                _ => return Err(HighlightError::Config("color must be a boolean".to_string())),
            };
        }

        if let Some(value) = settings.get("palette") {
            let table = value
                .as_table()
                .ok_or_else(|| HighlightError::Config("palette must be a table".to_string()))?;
            self.palette.apply_toml(table)?;
        }

        if let Some(value) = settings.get("dialects") {
            let entries = value
                .as_array()
                .ok_or_else(|| HighlightError::Config("dialects must be an array".to_string()))?;
            for entry in entries {
                let table = entry.as_table().ok_or_else(|| {
                    HighlightError::Config("dialects entries must be tables".to_string())
                })?;
                self.dialects.push(table.clone());
            }
        }

        for key in settings.keys() {
            if !matches!(key.as_str(), "dialect" | "color" | "palette" | "dialects") {
                log::warn!("unknown config key '{}'", key);
            }
        }

        Ok(())
    }

    /// Build the registry of built-in and custom dialects
    pub fn registry(&self) -> Result<DialectRegistry> {
        let mut registry = DialectRegistry::new(&self.palette);
        registry.add_from_toml(&self.dialects, &self.palette)?;
        Ok(registry)
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Category, Color, Style};

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
dialect = "log"
color = false

[palette]
field = "yellow bold"
"#;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.dialect, "log");
        assert!(!config.color);
        assert_eq!(
            config.palette.style(Category::FieldReference),
            Style::fg(Color::Yellow).with_bold()
        );
        assert_eq!(
            config.palette.style(Category::StringLiteral),
            Style::fg(Color::Green)
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.dialect, "sql");
        assert!(config.color);
        assert_eq!(config.palette, Palette::default());
        assert!(config.dialects.is_empty());
    }

    #[test]
    fn test_color_accepts_strings() {
        assert!(Config::parse("color = \"on\"").unwrap().color);
        assert!(!Config::parse("color = \"off\"").unwrap().color);
        assert!(Config::parse("color = 3").is_err());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::parse("dialect = "),
            Err(HighlightError::Toml(_))
        ));
        assert!(matches!(
            Config::parse("[palette]\nkeyword = \"plaid\""),
            Err(HighlightError::InvalidStyle(_))
        ));
        assert!(Config::parse("dialect = 5").is_err());
    }

    #[test]
    fn test_registry_with_custom_dialect() {
        let contents = r#"
[[dialects]]
name = "kql"

[[dialects.rules]]
category = "keyword"
words = ["where", "project"]
"#;
        let config = Config::parse(contents).unwrap();
        let registry = config.registry().unwrap();
        assert_eq!(registry.names(), vec!["kql", "log", "sql"]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("qhl-no-such-config.toml");
        let config = Config::load_from(&path);
        assert_eq!(config.dialect, "sql");
    }

    #[test]
    fn test_load_from_unreadable_file() {
        // A directory cannot be read as a file, and is not NotFound
        let config = Config::load_from(&std::env::temp_dir());
        assert_eq!(config.dialect, "sql");
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("qhl-config-{}.toml", std::process::id()));
        fs::write(&path, "dialect = \"log\"\n").unwrap();
        let config = Config::load_from(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.dialect, "log");
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(parse_bool("yes"));
        assert!(parse_bool("on"));
        assert!(parse_bool("1"));

        assert!(!parse_bool("false"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool("anything"));
    }
}
