use std::{io, path::PathBuf};

use anyhow::Context;
use langtable::{Config, TranslationStore};
use tracing::info;

use crate::config::{SortOrder, parse_locales};

/// Arguments of `langtable export`.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub locales: Vec<String>,
    /// Destination CSV file; stdout when absent.
    pub output: Option<PathBuf>,
    pub delimiter: u8,
    pub sort: Option<SortOrder>,
}

/// Run the export command: load the catalog of each locale and write one CSV table.
pub fn run_export_command(config: Config, options: &ExportOptions) -> anyhow::Result<()> {
    let locales = parse_locales(&options.locales)?;
    let lang_path = config.lang_path.clone();

    let mut store = TranslationStore::with_config(config);
    store
        .load(locales.clone(), None)
        .with_context(|| format!("failed to load catalog from {}", lang_path.display()))?;
    if let Some(order) = options.sort {
        store.sort(order.is_ascending());
    }

    match &options.output {
        Some(path) => {
            store
                .export_to_csv_file(path, locales, options.delimiter)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Exported catalog to {}", path.display());
        }
        None => {
            store
                .write_csv(io::stdout().lock(), locales, options.delimiter)
                .context("failed to write CSV to stdout")?;
        }
    }
    Ok(())
}
