//! Configuration of a [`crate::TranslationStore`] and options for CSV imports.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::formats::{CatalogFormat, DEFAULT_DELIMITER};

/// Where the catalog lives and how its namespace files look.
///
/// Deserializes from a partial document; missing fields keep their defaults.
///
/// ```rust
/// use langtable::{Config, formats::CatalogFormat};
///
/// let config: Config = serde_json::from_str(r#"{ "exclude": ["validation"] }"#)?;
/// assert_eq!(config.lang_path, std::path::PathBuf::from("lang"));
/// assert_eq!(config.format, CatalogFormat::Json);
/// assert!(config.is_excluded("validation"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Catalog root used when an operation is not given an explicit base path.
    pub lang_path: PathBuf,
    /// Namespaces (relative path without extension, `/`-separated) skipped when loading.
    pub exclude: Vec<String>,
    /// Format of persisted namespace files.
    pub format: CatalogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang_path: PathBuf::from("lang"),
            exclude: Vec::new(),
            format: CatalogFormat::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lang_path(mut self, lang_path: impl Into<PathBuf>) -> Self {
        self.lang_path = lang_path.into();
        self
    }

    pub fn with_exclude<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: CatalogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn is_excluded(&self, namespace: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == namespace)
    }

    /// Resolves the catalog root: `base` when given, the configured path otherwise.
    pub fn base_path<'a>(&'a self, base: Option<&'a Path>) -> &'a Path {
        base.unwrap_or(self.lang_path.as_path())
    }
}

/// Options for CSV imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter, `;` by default.
    pub delimiter: u8,
    /// Index of the header record; earlier records are ignored.
    pub header_offset: usize,
    /// Whether imported values replace values already present in the store.
    pub overwrite: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header_offset: 0,
            overwrite: true,
        }
    }
}

impl CsvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header_offset(mut self, header_offset: usize) -> Self {
        self.header_offset = header_offset;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
