//! Support for JSON namespace files.
//!
//! A file holds one object whose nested keys form the sub-paths of its namespace:
//!
//! ```json
//! {
//!   "summary": { "title": "Overzicht" },
//!   "total": "Totaal"
//! }
//! ```
use std::io::{BufRead, Write};

use serde_json::Value;

use crate::{
    error::Error,
    traits::{Parser, TreeFile},
    types::NestedTree,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    pub root: Value,
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let root = serde_json::from_reader(reader)?;
        Ok(Format { root })
    }

    /// Pretty-printed with two-space indentation and a trailing newline.
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, &self.root)?;
        writeln!(writer)?;
        Ok(())
    }
}

impl From<NestedTree> for Format {
    fn from(tree: NestedTree) -> Self {
        Format {
            root: Value::Object(tree),
        }
    }
}

impl TreeFile for Format {
    fn into_tree(self) -> Option<NestedTree> {
        match self.root {
            Value::Object(tree) => Some(tree),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let format = Format::from_str(r#"{"reset": "Reset!", "validation": {"failed": "No"}}"#)
            .unwrap();
        let tree = format.into_tree().unwrap();
        assert_eq!(tree["reset"], json!("Reset!"));
        assert_eq!(tree["validation"]["failed"], json!("No"));
    }

    #[test]
    fn test_non_object_root_has_no_tree() {
        let format = Format::from_str(r#"["not", "a", "tree"]"#).unwrap();
        assert!(format.into_tree().is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Format::from_str("{ nope"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_write_keeps_key_order() {
        let tree = json!({ "summary": { "title": "Overzicht", "description": "Beschrijving" }, "total": "Totaal" });
        let format = Format { root: tree };
        let mut out = Vec::new();
        format.to_writer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\n  \"summary\": {\n    \"title\": \"Overzicht\",\n    \"description\": \"Beschrijving\"\n  },\n  \"total\": \"Totaal\"\n}\n"
        );
    }
}
