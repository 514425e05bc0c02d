//! Delimited-file record reader producing `(key, text)` pairs.

use std::io::Read;
use std::path::Path;

use log::warn;

use crate::types::{GroupError, GroupResult};

/// Column layout and dialect of the input file.
#[derive(Debug, Clone)]
pub struct RecordReader {
    /// Column holding the numeric record key.
    pub key_column: usize,
    /// Column holding the free text.
    pub text_column: usize,
    /// Field separator byte.
    pub delimiter: u8,
    /// Skip the first row.
    pub has_headers: bool,
}

/// Records read from a file, plus how many rows were skipped.
#[derive(Debug, Clone, Default)]
pub struct Records {
    pub records: Vec<(u64, String)>,
    pub skipped: usize,
}

impl Default for RecordReader {
    fn default() -> Self {
        Self {
            key_column: 0,
            text_column: 2,
            delimiter: b',',
            has_headers: false,
        }
    }
}

/// Parse a delimiter argument: `\t` or `tab` for a tab, otherwise exactly one
/// ASCII character.
pub fn parse_delimiter(value: &str) -> GroupResult<u8> {
    match value {
        "\\t" | "\t" | "tab" | "TAB" => return Ok(b'\t'),
        _ => {}
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(GroupError::InvalidParameter {
            name: "delimiter",
            message: format!("expected one ASCII character, `\\t` or `tab`, got {:?}", value),
        }),
    }
}

impl RecordReader {
    /// Read all records from a file.
    pub fn read_path(&self, path: impl AsRef<Path>) -> GroupResult<Records> {
        let file = std::fs::File::open(path)?;
        self.read(file)
    }

    /// Read all records from any reader. Rows with a missing column or a
    /// non-numeric key are skipped with a warning.
    pub fn read<R: Read>(&self, input: R) -> GroupResult<Records> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(input);

        let mut out = Records::default();
        for row in csv_reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            match self.parse_row(&row, line) {
                Ok(record) => out.records.push(record),
                Err(e) => {
                    warn!("skipping row: {}", e);
                    out.skipped += 1;
                }
            }
        }
        Ok(out)
    }

    fn parse_row(&self, row: &csv::StringRecord, line: u64) -> GroupResult<(u64, String)> {
        let key = row.get(self.key_column).ok_or_else(|| GroupError::InvalidRecord {
            line,
            message: format!("missing key column {}", self.key_column),
        })?;
        let text = row.get(self.text_column).ok_or_else(|| GroupError::InvalidRecord {
            line,
            message: format!("missing text column {}", self.text_column),
        })?;
        let key = key.trim().parse::<u64>().map_err(|e| GroupError::InvalidRecord {
            line,
            message: format!("key {:?} is not a number: {}", key, e),
        })?;
        Ok((key, text.to_string()))
    }
}
