use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use langtable::{Config, Locales, formats::CatalogFormat};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "langtable.toml";

/// Reads the TOML config at `path`, or `langtable.toml` when present, or falls back to defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                return Ok(Config::default());
            }
            default
        }
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!("Loaded configuration from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Key order applied before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Ascending lexicographic order
    Asc,
    /// Descending lexicographic order
    Desc,
}

impl SortOrder {
    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }
}

/// Trims the comma-separated locale arguments and drops duplicates.
pub fn parse_locales(values: &[String]) -> anyhow::Result<Locales> {
    let locales: Locales = values
        .iter()
        .map(|locale| locale.trim())
        .filter(|locale| !locale.is_empty())
        .collect();
    anyhow::ensure!(!locales.is_empty(), "at least one locale is required");
    Ok(locales)
}

/// Parses a single-byte CSV delimiter. `tab` and `\t` stand for a tab character.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(format!(
                "delimiter must be a single ASCII character, got `{}`",
                value
            )),
        },
    }
}

pub fn parse_format(value: &str) -> Result<CatalogFormat, String> {
    value.parse().map_err(|e: langtable::Error| e.to_string())
}
