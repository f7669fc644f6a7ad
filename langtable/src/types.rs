//! Core types shared by the loader, the CSV codec and the persister.

use std::path::{Component, Path};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::Error;

/// Separates the namespace (the file) from the sub-path inside it: `b2b/ticket-summary.title`.
pub const NAMESPACE_SEPARATOR: char = '-';

/// Separates nesting levels inside a namespace file.
pub const PATH_SEPARATOR: char = '.';

/// Name of the CSV column that holds the flat keys.
pub const KEY_COLUMN: &str = "key";

/// Flat `key → value` translations of a single locale, in insertion (or sorted) order.
pub type FlatMap = IndexMap<String, String>;

/// Flat translations of every locale held by a store.
pub type Translations = IndexMap<String, FlatMap>;

/// A nested translation tree whose leaves are strings.
pub type NestedTree = Map<String, Value>;

/// One or many locale identifiers.
///
/// Every public operation that targets locales accepts `impl Into<Locales>`, so callers can
/// pass a single `"nl"` as well as `["nl", "en"]` or a `Vec<String>`. Order is kept and
/// duplicates are dropped.
///
/// ```rust
/// use langtable::Locales;
///
/// let single = Locales::from("nl");
/// let many = Locales::from(["nl", "en", "nl"]);
/// assert_eq!(single.len(), 1);
/// assert_eq!(many.iter().collect::<Vec<_>>(), vec!["nl", "en"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locales(Vec<String>);

impl Locales {
    /// Iterates over the locale identifiers in the order they were given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.0.iter().any(|l| l == locale)
    }

    /// Rejects empty identifiers; locales double as directory and column names.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        match self.0.iter().find(|l| l.trim().is_empty()) {
            Some(invalid) => Err(Error::InvalidLocale(invalid.clone())),
            None => Ok(()),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Locales {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut locales: Vec<String> = Vec::new();
        for locale in iter {
            let locale = locale.into();
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        Locales(locales)
    }
}

impl From<&str> for Locales {
    fn from(value: &str) -> Self {
        Locales(vec![value.to_string()])
    }
}

impl From<String> for Locales {
    fn from(value: String) -> Self {
        Locales(vec![value])
    }
}

impl From<&String> for Locales {
    fn from(value: &String) -> Self {
        Locales(vec![value.clone()])
    }
}

impl From<Vec<String>> for Locales {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Vec<&str>> for Locales {
    fn from(value: Vec<&str>) -> Self {
        value.into_iter().collect()
    }
}

impl From<&[&str]> for Locales {
    fn from(value: &[&str]) -> Self {
        value.iter().copied().collect()
    }
}

impl From<&[String]> for Locales {
    fn from(value: &[String]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Locales {
    fn from(value: [&str; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Locales {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits a flat key into `(namespace, sub_path)` on the first [`NAMESPACE_SEPARATOR`].
///
/// Returns [`Error::KeyFormat`] when the separator is missing or either side is empty.
pub fn split_flat_key(key: &str) -> Result<(&str, &str), Error> {
    match key.split_once(NAMESPACE_SEPARATOR) {
        Some((namespace, sub_path)) if !namespace.is_empty() && !sub_path.is_empty() => {
            Ok((namespace, sub_path))
        }
        _ => Err(Error::key_format(key)),
    }
}

/// Checks that `namespace` maps to exactly one file inside a locale directory and back.
///
/// A namespace is a `/`-separated relative path. Segments must be non-empty, must not be
/// `.` or `..`, and must not contain the [`NAMESPACE_SEPARATOR`]. Anything else fails with
/// [`Error::InvalidNamespace`].
pub fn validate_namespace(namespace: &str) -> Result<(), Error> {
    let segments_ok = namespace.split('/').all(|segment| {
        !segment.is_empty()
            && segment != "."
            && segment != ".."
            && !segment.contains(NAMESPACE_SEPARATOR)
    });
    let components_ok = Path::new(namespace)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if segments_ok && components_ok {
        Ok(())
    } else {
        Err(Error::InvalidNamespace(namespace.to_string()))
    }
}

/// Joins a namespace and a sub-path into a flat key.
pub fn join_flat_key(namespace: &str, sub_path: &str) -> String {
    format!("{namespace}{NAMESPACE_SEPARATOR}{sub_path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locales_from_single() {
        let locales = Locales::from("nl");
        assert_eq!(locales.as_slice(), &["nl".to_string()]);
    }

    #[test]
    fn test_locales_keep_order_and_drop_duplicates() {
        let locales = Locales::from(vec!["fr".to_string(), "en".to_string(), "fr".to_string()]);
        assert_eq!(locales.iter().collect::<Vec<_>>(), vec!["fr", "en"]);
        assert!(locales.contains("en"));
        assert!(!locales.contains("nl"));
    }

    #[test]
    fn test_locales_validate_rejects_empty() {
        let locales = Locales::from(["en", " "]);
        assert!(matches!(locales.validate(), Err(Error::InvalidLocale(_))));
        assert!(Locales::from("en").validate().is_ok());
    }

    #[test]
    fn test_split_flat_key() {
        assert_eq!(
            split_flat_key("b2b/ticket-summary.title").unwrap(),
            ("b2b/ticket", "summary.title")
        );
        // Only the first separator splits
        assert_eq!(
            split_flat_key("passwords-reset-link").unwrap(),
            ("passwords", "reset-link")
        );
    }

    #[test]
    fn test_split_flat_key_invalid() {
        for key in ["novalidnamespace", "-total", "ticket-", ""] {
            assert!(
                matches!(split_flat_key(key), Err(Error::KeyFormat { .. })),
                "{key} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_namespace() {
        for namespace in ["auth", "b2b/ticket", "a/b/c", ".hidden"] {
            assert!(validate_namespace(namespace).is_ok(), "{namespace} should be accepted");
        }
        for namespace in [
            "", "/etc/passwd", "../outside", "a/../../b", "b2b/", "a//b", "./auth", "b2b-portal",
        ] {
            assert!(
                matches!(validate_namespace(namespace), Err(Error::InvalidNamespace(_))),
                "{namespace} should be rejected"
            );
        }
    }

    #[test]
    fn test_join_flat_key() {
        assert_eq!(join_flat_key("auth", "failed"), "auth-failed");
    }
}
