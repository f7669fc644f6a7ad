//! Support for YAML namespace files (`.yaml` / `.yml`).
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
        let root = serde_yaml::from_reader(reader)?;
        Ok(Format { root })
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_yaml::to_writer(writer, &self.root)?;
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
