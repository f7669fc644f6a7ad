//! All error types for the langtable crate.
//!
//! These are returned from all fallible operations (loading catalogs, parsing CSV,
//! flattening, persisting, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("the key `{key}` is invalid: it must contain a separator character (`-`)")]
    KeyFormat { key: String },

    #[error("key conflict at `{key}`: a value cannot also hold nested keys")]
    KeyConflict { key: String },

    #[error("unsupported {kind} value at `{key}`")]
    UnsupportedValue { key: String, kind: &'static str },

    #[error("invalid namespace `{0}`: expected a relative `/`-separated path with non-empty segments and no `-`")]
    InvalidNamespace(String),

    #[error("CSV header has no `key` column")]
    MissingKeyColumn,

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a key format error for `key`.
    pub fn key_format(key: impl Into<String>) -> Self {
        Error::KeyFormat { key: key.into() }
    }

    /// Creates a key conflict error for `key`.
    pub fn key_conflict(key: impl Into<String>) -> Self {
        Error::KeyConflict { key: key.into() }
    }
}
