//! Configuration file support
//!
//! Loads settings from ~/.tagtint.toml (or %USERPROFILE%\.tagtint.toml
//! on Windows).
//!
//! Example:
//! ```text
//! # tagtint configuration
//! only-color-tag-name = true
//! excluded-extensions = [".rs"]
//! ```
//!
//! A missing or malformed file leaves the defaults in place; only
//! recognized keys are applied.

use std::fs;
use std::path::PathBuf;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Highlight only the tag name instead of the whole tag
    pub only_color_tag_name: bool,
    /// File name suffixes that are never decorated
    pub excluded_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            only_color_tag_name: false,
            // Skip this tool's own source language when open for
            // development
            excluded_extensions: vec![".rs".to_string()],
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
                .map(|home| PathBuf::from(home).join(".tagtint.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".tagtint.toml"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                if let Ok(table) = contents.parse::<toml::Table>() {
                    config.apply(&table);
                }
            }
        }

        config
    }

    /// Apply recognized settings from a parsed table
    fn apply(&mut self, table: &toml::Table) {
        if let Some(value) = table.get("only-color-tag-name").and_then(toml::Value::as_bool) {
            self.only_color_tag_name = value;
        }

        if let Some(items) = table.get("excluded-extensions").and_then(toml::Value::as_array) {
            self.excluded_extensions = items
                .iter()
                .filter_map(toml::Value::as_str)
                .map(str::to_string)
                .collect();
        }
    }

    /// Check whether a file name is excluded from decoration
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_extensions
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.only_color_tag_name);
        assert_eq!(config.excluded_extensions, [".rs"]);
    }

    #[test]
    fn test_apply_settings() {
        let contents = r#"
# comment
only-color-tag-name = true
excluded-extensions = [".rs", ".lock"]
        "#;
        let table = contents.parse::<toml::Table>().unwrap();

        let mut config = Config::default();
        config.apply(&table);

        assert!(config.only_color_tag_name);
        assert_eq!(config.excluded_extensions, [".rs", ".lock"]);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let table = "some-future-option = 3\n".parse::<toml::Table>().unwrap();
        let mut config = Config::default();
        config.apply(&table);
        assert!(!config.only_color_tag_name);
    }

    #[test]
    fn test_wrong_types_ignored() {
        let table = "only-color-tag-name = \"yes\"\n".parse::<toml::Table>().unwrap();
        let mut config = Config::default();
        config.apply(&table);
        assert!(!config.only_color_tag_name);
    }

    #[test]
    fn test_is_excluded() {
        let config = Config::default();
        assert!(config.is_excluded("src/main.rs"));
        assert!(!config.is_excluded("index.html"));

        let mut config = Config::default();
        config.excluded_extensions = vec![".min.html".to_string()];
        assert!(config.is_excluded("bundle.min.html"));
        assert!(!config.is_excluded("index.html"));
    }
}
