//! File formats understood by langtable.
//!
//! Namespace files of a catalog are JSON or YAML trees, selected through [`CatalogFormat`].
//! The translator-facing side is the multi-locale [`CsvTable`].

pub mod csv;
pub mod json;
pub mod yaml;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub use self::csv::{CsvTable, DEFAULT_DELIMITER};
pub use json::Format as JsonFormat;
pub use yaml::Format as YamlFormat;

use crate::{
    Error,
    traits::{Parser, TreeFile},
    types::NestedTree,
};

/// The on-disk format of namespace files inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// `<namespace>.json`
    #[default]
    Json,
    /// `<namespace>.yaml`, `.yml` is accepted when loading.
    Yaml,
}

impl Display for CatalogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFormat::Json => write!(f, "json"),
            CatalogFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Accepts `json`, `yaml` and `yml`, case-insensitively.
///
/// ```rust
/// use langtable::formats::CatalogFormat;
/// use std::str::FromStr;
/// assert_eq!(CatalogFormat::from_str("JSON").unwrap(), CatalogFormat::Json);
/// assert_eq!(CatalogFormat::from_str("yml").unwrap(), CatalogFormat::Yaml);
/// assert!(CatalogFormat::from_str("php").is_err());
/// ```
impl FromStr for CatalogFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl CatalogFormat {
    /// Extension used when persisting a namespace file.
    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }

    /// Infers the format of a namespace file from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        CatalogFormat::from_str(extension).ok()
    }

    /// Reads the tree of a namespace file; `None` when its root is not an object.
    pub fn read_tree<P: AsRef<Path>>(&self, path: P) -> Result<Option<NestedTree>, Error> {
        match self {
            CatalogFormat::Json => Ok(JsonFormat::read_from(path)?.into_tree()),
            CatalogFormat::Yaml => Ok(YamlFormat::read_from(path)?.into_tree()),
        }
    }

    /// Writes `tree` as a namespace file, replacing any existing file.
    pub fn write_tree<P: AsRef<Path>>(&self, tree: NestedTree, path: P) -> Result<(), Error> {
        match self {
            CatalogFormat::Json => JsonFormat::from(tree).write_to(path),
            CatalogFormat::Yaml => YamlFormat::from(tree).write_to(path),
        }
    }
}
