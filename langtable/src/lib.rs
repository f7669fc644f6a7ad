#![forbid(unsafe_code)]
//! Convert nested, per-locale translation catalogs to and from translator-friendly CSV tables.
//!
//! A catalog lives on disk as `<lang_path>/<locale>/<namespace>.json` (or `.yaml`), each file
//! holding a nested tree of strings. Inside the [`TranslationStore`] every locale is a flat map
//! whose keys join the namespace and the dotted path within it: `b2b/ticket-summary.title`.
//! The CSV side has one row per key and one column per locale.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langtable::{CsvOptions, TranslationStore};
//!
//! // Catalog → CSV for translators
//! let mut store = TranslationStore::new();
//! store.load(["en", "fr"], None)?.sort(true);
//! store.export_to_csv_file("translations.csv", ["en", "fr"], b';')?;
//!
//! // CSV → catalog
//! let mut store = TranslationStore::new();
//! store
//!     .parse_file("translations.csv", "fr", &CsvOptions::default())?
//!     .persist("fr", None)?;
//! # Ok::<(), langtable::Error>(())
//! ```
//!
//! # Keys
//!
//! - The first `-` separates the namespace (a file path relative to the locale directory,
//!   without extension) from the sub-path.
//! - `.` separates nesting levels inside the namespace file.
//! - Keys without a namespace can be imported and exported, but not persisted.

pub mod catalog;
pub mod config;
pub mod error;
pub mod formats;
pub mod keypath;
pub mod persist;
pub mod store;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::{Config, CsvOptions},
    error::Error,
    formats::{CatalogFormat, CsvTable},
    keypath::{flatten, unflatten},
    store::TranslationStore,
    types::{FlatMap, Locales, NestedTree, Translations},
};
