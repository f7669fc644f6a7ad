//! Writes flat translations back out as one nested namespace file per namespace.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::Error,
    formats::CatalogFormat,
    keypath::unflatten,
    types::{FlatMap, join_flat_key, split_flat_key, validate_namespace},
};

/// Flat entries of one namespace, keyed by their sub-path.
pub type NamespaceEntries<'a> = Vec<(&'a str, &'a str)>;

/// Groups `translations` by namespace, keeping the order in which namespaces first appear.
///
/// Fails with [`Error::KeyFormat`] on the first key that has no namespace, and with
/// [`Error::InvalidNamespace`] when a namespace would not load back under the same name.
pub fn group_by_namespace(
    translations: &FlatMap,
) -> Result<IndexMap<&str, NamespaceEntries<'_>>, Error> {
    let mut groups: IndexMap<&str, NamespaceEntries<'_>> = IndexMap::new();
    for (key, value) in translations {
        let (namespace, sub_path) = split_flat_key(key)?;
        validate_namespace(namespace)?;
        groups
            .entry(namespace)
            .or_default()
            .push((sub_path, value.as_str()));
    }
    Ok(groups)
}

/// Path of the namespace file for `namespace` of `locale` under `base`.
pub fn namespace_path(
    base: &Path,
    locale: &str,
    namespace: &str,
    format: CatalogFormat,
) -> PathBuf {
    base.join(locale)
        .join(format!("{namespace}.{}", format.extension()))
}

/// Persists one locale's translations under `base/locale`, returning the written paths.
///
/// Every key is validated before the first file is written. Existing namespace files are
/// replaced in full; files of namespaces absent from `translations` are left alone.
pub fn persist_locale(
    base: &Path,
    locale: &str,
    translations: &FlatMap,
    format: CatalogFormat,
) -> Result<Vec<PathBuf>, Error> {
    let groups = group_by_namespace(translations)?;

    let mut trees = Vec::with_capacity(groups.len());
    for (namespace, entries) in groups {
        let tree = unflatten(entries).map_err(|e| match e {
            Error::KeyConflict { key } => Error::key_conflict(join_flat_key(namespace, &key)),
            other => other,
        })?;
        trees.push((namespace, tree));
    }

    std::fs::create_dir_all(base.join(locale))?;

    let mut written = Vec::with_capacity(trees.len());
    for (namespace, tree) in trees {
        let path = namespace_path(base, locale, namespace, format);
        debug!("Writing namespace `{}` of `{}` to {:?}", namespace, locale, path);
        format.write_tree(tree, &path)?;
        written.push(path);
    }
    Ok(written)
}
