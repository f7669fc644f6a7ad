use std::path::PathBuf;

use anyhow::Context;
use langtable::{Config, CsvOptions, TranslationStore};
use tracing::info;

use crate::config::{SortOrder, parse_locales};

/// Arguments of `langtable import`.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub input: PathBuf,
    pub locales: Vec<String>,
    pub delimiter: u8,
    pub header_offset: usize,
    /// Keep values already present instead of replacing them with the CSV cells.
    pub keep_existing: bool,
    /// Load the current catalog first so its keys survive the rewrite.
    pub merge: bool,
    pub sort: Option<SortOrder>,
}

/// Run the import command: read the CSV, optionally on top of the current catalog, and
/// persist the result.
pub fn run_import_command(config: Config, options: &ImportOptions) -> anyhow::Result<()> {
    let locales = parse_locales(&options.locales)?;
    let lang_path = config.lang_path.clone();
    let csv_options = CsvOptions::new()
        .with_delimiter(options.delimiter)
        .with_header_offset(options.header_offset)
        .with_overwrite(!options.keep_existing);

    let mut store = TranslationStore::with_config(config);
    if options.merge {
        store
            .load(locales.clone(), None)
            .with_context(|| format!("failed to load catalog from {}", lang_path.display()))?;
    }
    store
        .parse_file(&options.input, locales.clone(), &csv_options)
        .with_context(|| format!("failed to import {}", options.input.display()))?;
    if let Some(order) = options.sort {
        store.sort(order.is_ascending());
    }
    store
        .persist(locales.clone(), None)
        .with_context(|| format!("failed to persist catalog to {}", lang_path.display()))?;

    for locale in &locales {
        let count = store.locale(locale).map_or(0, |values| values.len());
        info!("Wrote {} keys for `{}`", count, locale);
    }
    Ok(())
}
