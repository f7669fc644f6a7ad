//! Conversion between nested translation trees and flat, separator-joined keys.
//!
//! ```rust
//! use langtable::keypath::{flatten, unflatten};
//! use serde_json::json;
//!
//! let tree = json!({ "summary": { "title": "Overzicht" }, "total": "Totaal" });
//! let tree = tree.as_object().unwrap();
//!
//! let flat = flatten(tree)?;
//! assert_eq!(flat["summary.title"], "Overzicht");
//! assert_eq!(&unflatten(&flat)?, tree);
//! # Ok::<(), langtable::Error>(())
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{
    error::Error,
    types::{FlatMap, NestedTree, PATH_SEPARATOR},
};

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").unwrap();
}

/// Flattens `tree` into `.`-joined keys. See [`flatten_with`].
pub fn flatten(tree: &NestedTree) -> Result<FlatMap, Error> {
    flatten_with(tree, PATH_SEPARATOR)
}

/// Flattens `tree` depth-first, joining the segments of each leaf path with `separator`.
///
/// Strings are kept as-is, numbers and booleans become their textual form and empty objects
/// contribute nothing. Arrays and nulls have no flat representation and fail with
/// [`Error::UnsupportedValue`].
pub fn flatten_with(tree: &NestedTree, separator: char) -> Result<FlatMap, Error> {
    let mut flat = FlatMap::new();
    flatten_into(tree, separator, None, &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    tree: &NestedTree,
    separator: char,
    prefix: Option<&str>,
    flat: &mut FlatMap,
) -> Result<(), Error> {
    for (segment, value) in tree {
        let key = match prefix {
            Some(prefix) => format!("{prefix}{separator}{segment}"),
            None => segment.clone(),
        };
        match value {
            Value::Object(children) => flatten_into(children, separator, Some(&key), flat)?,
            Value::String(s) => {
                flat.insert(key, s.clone());
            }
            Value::Number(n) => {
                flat.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                flat.insert(key, b.to_string());
            }
            Value::Array(_) => {
                return Err(Error::UnsupportedValue { key, kind: "array" });
            }
            Value::Null => {
                return Err(Error::UnsupportedValue { key, kind: "null" });
            }
        }
    }
    Ok(())
}

/// Rebuilds a nested tree from `.`-joined keys. See [`unflatten_with`].
pub fn unflatten<I, K, V>(entries: I) -> Result<NestedTree, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    unflatten_with(entries, PATH_SEPARATOR)
}

/// Rebuilds a nested tree by splitting every key on `separator`.
///
/// Intermediate objects are created on demand and keep the order in which their first key
/// was seen. A path that is both a value and the parent of another key fails with
/// [`Error::KeyConflict`], whichever of the two comes first.
pub fn unflatten_with<I, K, V>(entries: I, separator: char) -> Result<NestedTree, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut tree = NestedTree::new();
    for (key, value) in entries {
        insert_path(&mut tree, key.as_ref(), separator, value.as_ref())?;
    }
    Ok(tree)
}

fn insert_path(
    tree: &mut NestedTree,
    key: &str,
    separator: char,
    value: &str,
) -> Result<(), Error> {
    let segments: Vec<&str> = key.split(separator).collect();
    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Ok(()),
    };

    let mut node = tree;
    for (depth, segment) in parents.iter().enumerate() {
        node = match node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(children) => children,
            _ => {
                let separator = separator.to_string();
                return Err(Error::key_conflict(
                    parents[..=depth].join(separator.as_str()),
                ));
            }
        };
    }

    if let Some(Value::Object(_)) = node.get(*last) {
        return Err(Error::key_conflict(key));
    }
    node.insert(last.to_string(), Value::String(value.to_string()));
    Ok(())
}

/// Removes line breaks and collapses every run of whitespace into a single space.
///
/// Line breaks are dropped rather than replaced, so `"a\nb"` becomes `"ab"`.
pub fn normalize_whitespace(value: &str) -> String {
    let joined = LINE_BREAKS.replace_all(value, "");
    WHITESPACE_RUNS.replace_all(&joined, " ").into_owned()
}

/// Applies [`normalize_whitespace`] to every string leaf of `tree`.
pub fn normalize_tree(tree: &mut NestedTree) {
    for value in tree.values_mut() {
        match value {
            Value::String(s) => *s = normalize_whitespace(s),
            Value::Object(children) => normalize_tree(children),
            _ => {}
        }
    }
}
