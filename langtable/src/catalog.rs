//! Reads an on-disk catalog (`<base>/<locale>/<namespace>.<ext>`) into flat translations.
//!
//! Each namespace file is flattened and its keys are prefixed with the namespace, so
//! `lang/en/auth/passwords.json` containing `{"reset": {"done": "Reset!"}}` yields
//! `auth/passwords-reset.done`.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::Error,
    formats::CatalogFormat,
    keypath::{flatten, normalize_tree},
    types::{FlatMap, join_flat_key, validate_namespace},
};

/// A namespace file found under a locale directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceFile {
    /// Relative path without extension, components joined with `/`.
    pub namespace: String,
    pub path: PathBuf,
    pub format: CatalogFormat,
}

/// Loads locales from a catalog directory, honouring the configured exclusions.
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader<'a> {
    config: &'a Config,
}

impl<'a> CatalogLoader<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Lists the namespace files of `locale_dir`, sorted by path.
    ///
    /// Files with an unknown extension and excluded namespaces are left out. A file whose
    /// namespace could not be persisted under the same name, such as `b2b-portal.json`, fails
    /// with [`Error::InvalidNamespace`].
    pub fn namespace_files(&self, locale_dir: &Path) -> Result<Vec<NamespaceFile>, Error> {
        let walker = WalkBuilder::new(locale_dir)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            let Some(format) = CatalogFormat::from_path(path) else {
                debug!("Skipping non-catalog file {:?}", path);
                continue;
            };
            let namespace = namespace_of(locale_dir, path);
            if self.config.is_excluded(&namespace) {
                debug!("Skipping excluded namespace `{}`", namespace);
                continue;
            }
            validate_namespace(&namespace)?;
            files.push(NamespaceFile {
                namespace,
                path: path.to_path_buf(),
                format,
            });
        }
        Ok(files)
    }

    /// Loads every namespace file of `locale` under `base` into one flat map.
    ///
    /// String values are whitespace-normalized. Files whose root is not an object, or is an
    /// empty object, contribute nothing. A missing locale directory yields an empty map.
    pub fn load_locale(&self, base: &Path, locale: &str) -> Result<FlatMap, Error> {
        let locale_dir = base.join(locale);
        let mut translations = FlatMap::new();

        if !locale_dir.is_dir() {
            warn!("No catalog directory for locale `{}` at {:?}", locale, locale_dir);
            return Ok(translations);
        }

        for file in self.namespace_files(&locale_dir)? {
            debug!("Reading {:?} as namespace `{}`", file.path, file.namespace);
            let Some(mut tree) = file.format.read_tree(&file.path)? else {
                continue;
            };
            if tree.is_empty() {
                continue;
            }
            normalize_tree(&mut tree);
            for (sub_path, value) in flatten(&tree)? {
                translations.insert(join_flat_key(&file.namespace, &sub_path), value);
            }
        }

        Ok(translations)
    }
}

fn namespace_of(locale_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(locale_dir).unwrap_or(path);
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
