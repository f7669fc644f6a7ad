//! Support for the translator-facing CSV table.
//!
//! The first column is the flat key and every following column holds one locale:
//!
//! ```text
//! key;nl;en
//! b2b/ticket-summary.title;Overzicht;Overview
//! b2b/ticket-total;Totaal;Total
//! ```
//!
//! Rows before the header offset are skipped entirely. Reading never trims; trimming is an
//! import policy applied by [`crate::TranslationStore`].
use std::io::{self, Read, Write};

use crate::{error::Error, types::KEY_COLUMN};

/// Default delimiter of the CSV table.
pub const DEFAULT_DELIMITER: u8 = b';';

/// A CSV table made of a header row and data rows.
///
/// Rows may be shorter or longer than the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Creates a table with the given header and no rows.
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Returns `true` when the source held no header row at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }

    /// Finds the index of the column named `name`.
    ///
    /// Header cells are compared after trimming whitespace and a leading byte order mark, which
    /// spreadsheet tools like to prepend.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header
            .iter()
            .position(|cell| cell.trim_start_matches('\u{feff}').trim() == name)
    }

    /// Index of the [`KEY_COLUMN`].
    pub fn key_column(&self) -> Result<usize, Error> {
        self.column(KEY_COLUMN).ok_or(Error::MissingKeyColumn)
    }

    /// Parses a table from `reader`.
    ///
    /// The record at `header_offset` becomes the header; records before it are ignored.
    pub fn from_reader<R: Read>(
        reader: R,
        delimiter: u8,
        header_offset: usize,
    ) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut table = CsvTable::default();
        for (index, record) in rdr.records().enumerate() {
            let record = record?;
            if index < header_offset {
                continue;
            }
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            if index == header_offset {
                table.header = cells;
            } else {
                table.rows.push(cells);
            }
        }
        Ok(table)
    }

    /// Parses a table from an in-memory string.
    pub fn from_str_with(content: &str, delimiter: u8, header_offset: usize) -> Result<Self, Error> {
        Self::from_reader(content.as_bytes(), delimiter, header_offset)
    }

    /// Writes the header followed by every row.
    ///
    /// Fields are quoted only when they contain the delimiter, a quote or a line break.
    pub fn to_writer<W: Write>(&self, writer: W, delimiter: u8) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .delimiter(delimiter)
            .from_writer(writer);
        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Renders the table as CSV text.
    pub fn to_string_with(&self, delimiter: u8) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer, delimiter)?;
        String::from_utf8(buffer).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
