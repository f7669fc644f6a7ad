//! The [`TranslationStore`]: flat, per-locale translations gathered from catalogs and CSV
//! tables, ready to be exported again or persisted as a catalog.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use indexmap::IndexSet;
use tracing::{debug, info, trace};

use crate::{
    catalog::CatalogLoader,
    config::{Config, CsvOptions},
    error::Error,
    formats::CsvTable,
    persist::persist_locale,
    types::{FlatMap, KEY_COLUMN, Locales, Translations},
};

/// In-memory `locale → (key → value)` translations.
///
/// Every mutation is a merge: loading or importing adds keys and, depending on the
/// overwrite policy, updates values, but never removes anything.
///
/// # Example
///
/// ```rust
/// use langtable::{CsvOptions, TranslationStore};
///
/// let csv = "key;nl;es\nb2b/ticket-summary;Overzicht;Resumen\n";
///
/// let mut store = TranslationStore::new();
/// store.parse_string(csv, "nl", &CsvOptions::default())?;
///
/// assert_eq!(store.get("nl", "b2b/ticket-summary"), Some("Overzicht"));
/// assert_eq!(store.to_csv_string("nl", b';')?, "key;nl\nb2b/ticket-summary;Overzicht\n");
/// # Ok::<(), langtable::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationStore {
    translations: Translations,
    config: Config,
}

impl TranslationStore {
    /// Creates an empty store with the default [`Config`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that resolves catalog paths and formats through `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            translations: Translations::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads the catalog of each locale from `base`, or from the configured `lang_path`.
    ///
    /// Loaded values replace values already held for the same key; other keys are kept.
    pub fn load(
        &mut self,
        locales: impl Into<Locales>,
        base: Option<&Path>,
    ) -> Result<&mut Self, Error> {
        let locales = locales.into();
        locales.validate()?;

        let base = self.config.base_path(base).to_path_buf();
        let loader = CatalogLoader::new(&self.config);
        for locale in &locales {
            let loaded = loader.load_locale(&base, locale)?;
            info!("Loaded {} keys for `{}` from {:?}", loaded.len(), locale, base);
            self.translations
                .entry(locale.clone())
                .or_default()
                .extend(loaded);
        }
        Ok(self)
    }

    /// Imports a CSV file. See [`TranslationStore::parse_reader`].
    pub fn parse_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        locales: impl Into<Locales>,
        options: &CsvOptions,
    ) -> Result<&mut Self, Error> {
        let path = path.as_ref();
        debug!("Importing CSV file {:?}", path);
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file), locales, options)
    }

    /// Imports CSV text. See [`TranslationStore::parse_reader`].
    pub fn parse_string(
        &mut self,
        content: &str,
        locales: impl Into<Locales>,
        options: &CsvOptions,
    ) -> Result<&mut Self, Error> {
        self.parse_reader(content.as_bytes(), locales, options)
    }

    /// Imports the given locales from CSV read from `reader`.
    ///
    /// See [`TranslationStore::import_table`] for the per-row rules.
    pub fn parse_reader<R: Read>(
        &mut self,
        reader: R,
        locales: impl Into<Locales>,
        options: &CsvOptions,
    ) -> Result<&mut Self, Error> {
        let table = CsvTable::from_reader(reader, options.delimiter, options.header_offset)?;
        self.import_table(&table, locales, options.overwrite)
    }

    /// Merges the given locales of `table` into the store.
    ///
    /// Requested locales are registered even when the table holds no rows. For each row the
    /// key is trimmed and rows without a key are skipped. Then, per locale:
    ///
    /// - no column for the locale (or a row too short to reach it): the key is registered
    ///   with an empty value unless it already exists;
    /// - key already present and `overwrite` is off: the existing value is kept;
    /// - otherwise the trimmed cell becomes the value.
    ///
    /// Locales are handled independently: a missing column for one locale does not stop the
    /// pass from filling the locales after it, unlike an import that stops at the first
    /// missing column.
    pub fn import_table(
        &mut self,
        table: &CsvTable,
        locales: impl Into<Locales>,
        overwrite: bool,
    ) -> Result<&mut Self, Error> {
        let locales = locales.into();
        locales.validate()?;

        for locale in &locales {
            self.translations.entry(locale.clone()).or_default();
        }
        if table.is_empty() {
            debug!("CSV source has no header row, nothing to import");
            return Ok(self);
        }

        let key_column = table.key_column()?;
        let columns: Vec<(&str, Option<usize>)> = locales
            .iter()
            .map(|locale| (locale, table.column(locale)))
            .collect();

        for (index, row) in table.rows.iter().enumerate() {
            let key = row.get(key_column).map(|k| k.trim()).unwrap_or_default();
            if key.is_empty() {
                trace!("Skipping row {} without a {}", index, KEY_COLUMN);
                continue;
            }

            for (locale, column) in &columns {
                let Some(values) = self.translations.get_mut(*locale) else {
                    continue;
                };
                match column.and_then(|c| row.get(c)) {
                    None => {
                        values.entry(key.to_string()).or_default();
                    }
                    Some(_) if !overwrite && values.contains_key(key) => {
                        trace!("Keeping existing `{}` for `{}`", key, locale);
                    }
                    Some(cell) => {
                        values.insert(key.to_string(), cell.trim().to_string());
                    }
                }
            }
        }

        debug!(
            "Imported {} rows for {}",
            table.rows.len(),
            locales.as_slice().join(", ")
        );
        Ok(self)
    }

    /// Orders the keys of every locale lexicographically.
    pub fn sort(&mut self, ascending: bool) -> &mut Self {
        for values in self.translations.values_mut() {
            if ascending {
                values.sort_keys();
            } else {
                values.sort_by(|a, _, b, _| b.cmp(a));
            }
        }
        self
    }

    /// Writes the given locales as a catalog under `base`, or under the configured `lang_path`.
    ///
    /// Locales the store does not hold are skipped. A locale with an invalid key fails before
    /// any of its files are written; locales persisted earlier in the same call stay on disk.
    pub fn persist(
        &self,
        locales: impl Into<Locales>,
        base: Option<&Path>,
    ) -> Result<&Self, Error> {
        let locales = locales.into();
        locales.validate()?;

        let base = self.config.base_path(base);
        for locale in &locales {
            let Some(values) = self.translations.get(locale) else {
                debug!("No translations for `{}`, nothing to persist", locale);
                continue;
            };
            let written = persist_locale(base, locale, values, self.config.format)?;
            info!("Persisted {} files for `{}` under {:?}", written.len(), locale, base);
        }
        Ok(self)
    }

    /// Builds the CSV table of the given locales.
    ///
    /// Keys are listed in the order they first appear, walking the locales in the given order.
    /// Locales the store does not hold produce an empty column.
    pub fn to_csv_table(&self, locales: impl Into<Locales>) -> CsvTable {
        let locales = locales.into();

        let mut keys: IndexSet<&str> = IndexSet::new();
        for locale in &locales {
            if let Some(values) = self.translations.get(locale) {
                keys.extend(values.keys().map(String::as_str));
            }
        }

        let mut header = vec![KEY_COLUMN.to_string()];
        header.extend(locales.iter().map(str::to_string));
        let mut table = CsvTable::new(header);

        for key in keys {
            let mut row = Vec::with_capacity(locales.len() + 1);
            row.push(key.to_string());
            for locale in &locales {
                row.push(self.get(locale, key).unwrap_or_default().to_string());
            }
            table.push_row(row);
        }
        table
    }

    /// Writes the CSV table of the given locales to `writer`.
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
        locales: impl Into<Locales>,
        delimiter: u8,
    ) -> Result<(), Error> {
        self.to_csv_table(locales).to_writer(writer, delimiter)
    }

    /// Renders the CSV table of the given locales as a string.
    pub fn to_csv_string(
        &self,
        locales: impl Into<Locales>,
        delimiter: u8,
    ) -> Result<String, Error> {
        self.to_csv_table(locales).to_string_with(delimiter)
    }

    /// Writes the CSV table of the given locales to `path`, replacing any existing file.
    pub fn export_to_csv_file<P: AsRef<Path>>(
        &self,
        path: P,
        locales: impl Into<Locales>,
        delimiter: u8,
    ) -> Result<&Self, Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_csv(&mut writer, locales, delimiter)?;
        writer.flush()?;
        debug!("Exported CSV to {:?}", path);
        Ok(self)
    }

    /// Sets a single value, replacing any previous one.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.translations
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.translations
            .get(locale)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    /// Translations of one locale.
    pub fn locale(&self, locale: &str) -> Option<&FlatMap> {
        self.translations.get(locale)
    }

    /// Locales held by the store, in the order they were first touched.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Read-only view of every locale's translations.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Owned copy of every locale's translations.
    pub fn to_map(&self) -> Translations {
        self.translations.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl From<Translations> for TranslationStore {
    fn from(translations: Translations) -> Self {
        Self {
            translations,
            config: Config::default(),
        }
    }
}
