//! Converter configuration.
//!
//! Handles loading, validating, and merging `scriptorium.toml`. Stock
//! defaults are the base layer; a user config file overrides only the keys it
//! names, and CLI flags override both.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input_dir = "data_input"     # Folder scanned for *.json records
//! output_dir = "."             # Root of the generated Markdown tree
//!
//! [folders]
//! prayers = "молитвы"          # Root for prayers
//! psalter = "псалтирь"         # Root for psalms and psalter-tagged items
//! bible = "библия"             # Root for Bible books
//!
//! [naming]
//! psalter_category = "псалтирь" # Category (any case) that routes to the psalter
//! chapter_prefix = "chapter"    # Chapter folder: <prefix>-01, <prefix>-02, ...
//! default_testament = "other"   # Testament folder when a book omits it
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "scriptorium.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Converter configuration.
///
/// All fields have defaults matching the historical folder layout, so an
/// empty config file (or none at all) reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Folder scanned (non-recursively) for `*.json` inputs.
    pub input_dir: PathBuf,
    /// Root under which the content tree is written.
    pub output_dir: PathBuf,
    /// Top-level folder names inside `output_dir`.
    pub folders: FoldersConfig,
    /// Label matching and path segment naming.
    pub naming: NamingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data_input"),
            output_dir: PathBuf::from("."),
            folders: FoldersConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoldersConfig {
    pub prayers: String,
    pub psalter: String,
    pub bible: String,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            prayers: "молитвы".to_string(),
            psalter: "псалтирь".to_string(),
            bible: "библия".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Category label that reroutes an item to the psalter. Compared against
    /// lower-cased categories, so it is stored lower-cased.
    pub psalter_category: String,
    /// Prefix of the per-chapter folder, joined to the number with `-`.
    pub chapter_prefix: String,
    /// Testament folder used when a book has no `testament_slug`.
    pub default_testament: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            psalter_category: "псалтирь".to_string(),
            chapter_prefix: "chapter".to_string(),
            default_testament: "other".to_string(),
        }
    }
}

impl Config {
    /// Validate that every folder name is a single, non-empty path segment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let segments = [
            ("folders.prayers", &self.folders.prayers),
            ("folders.psalter", &self.folders.psalter),
            ("folders.bible", &self.folders.bible),
            ("naming.chapter_prefix", &self.naming.chapter_prefix),
            ("naming.default_testament", &self.naming.default_testament),
        ];
        for (key, value) in segments {
            if !crate::route::is_safe_segment(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single non-empty path segment, got {value:?}"
                )));
            }
        }
        if self.naming.psalter_category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "naming.psalter_category must not be empty".into(),
            ));
        }
        if self.naming.psalter_category != self.naming.psalter_category.to_lowercase() {
            return Err(ConfigError::Validation(
                "naming.psalter_category must be lower-case".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Parse a sparse config file's contents over the stock defaults.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let overlay: toml::Value = toml::from_str(content)?;
    let config: Config = merge_toml(stock_defaults_value(), overlay).try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a file path.
///
/// A missing file yields the stock defaults; a present but invalid file is
/// an error.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// A documented stock config, printed by `scriptorium gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# scriptorium configuration
# All options are optional. Values shown are the defaults.
# Unknown keys will cause an error.

# Folder scanned (non-recursively) for *.json record files.
input_dir = "data_input"

# Root of the generated Markdown tree.
output_dir = "."

[folders]
# Individual prayers: <output_dir>/<prayers>/<id>/<lang>.md
prayers = "молитвы"
# Psalms, and prayers tagged with the psalter category.
psalter = "псалтирь"
# Bible books: <output_dir>/<bible>/<testament>/<book>/<chapter>/<lang>.md
bible = "библия"

[naming]
# Category label (matched case-insensitively) that routes an item to the psalter.
psalter_category = "псалтирь"
# Chapter folder prefix: chapter-01, chapter-02, ..., chapter-150
chapter_prefix = "chapter"
# Testament folder for books without a testament_slug.
default_testament = "other"
"#
}
