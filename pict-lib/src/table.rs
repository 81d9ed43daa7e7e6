//! The tabular PICT output: a header row naming the columns, followed by one row per test case.

use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// The value of a single cell, stringified when the table is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Empty cell, or a cell equal to one of the [ReadOptions::missing] markers.
    Missing,
    Text(String),
}

impl Cell {
    /// The text of the cell, or None if missing.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Missing => None,
            Cell::Text(text) => Some(text.as_str()),
        }
    }
}

/// Options for reading a [Table].
#[derive(Clone, Debug)]
pub struct ReadOptions {
    /// Field delimiter, a tab for PICT output.
    pub delimiter: u8,
    /// Additional cell values which are treated as [Cell::Missing]. Empty cells are always missing.
    pub missing: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            missing: Vec::new(),
        }
    }
}

impl ReadOptions {
    fn to_cell(&self, raw: &str) -> Cell {
        if raw.is_empty() || self.missing.iter().any(|marker| marker == raw) {
            Cell::Missing
        } else {
            Cell::Text(raw.to_owned())
        }
    }
}

/// A fully loaded table. Every row has exactly one cell per column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Read the table from the file at the given path.
    pub fn from_path<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Self, csv::Error> {
        let reader = builder(options).from_path(path)?;
        Self::from_csv(reader, options)
    }

    /// Read the table from any reader, e.g. an in-memory buffer.
    pub fn from_reader<R: Read>(reader: R, options: &ReadOptions) -> Result<Self, csv::Error> {
        Self::from_csv(builder(options).from_reader(reader), options)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>, options: &ReadOptions) -> Result<Self, csv::Error> {
        let columns = reader.headers()?.iter().map(str::to_owned).collect();

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            rows.push(record.iter().map(|raw| options.to_cell(raw)).collect());
        }

        let table = Self { columns, rows };
        tracing::debug!(
            columns = table.columns.len(),
            rows = table.rows.len(),
            "loaded table"
        );

        Ok(table)
    }

    /// The column names, in declared order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All data rows, the header excluded.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterate over all rows as ordered (column name, cell) pairs.
    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }

    /// The row with the given index, if it exists.
    pub fn row(&self, idx: usize) -> Option<Row<'_>> {
        self.rows.get(idx).map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }
}

/// One row of a [Table], borrowing from it.
#[derive(Copy, Clone, Debug)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// The (column name, cell) pairs in the declared column order.
    pub fn pairs(self) -> impl Iterator<Item = (&'a str, &'a Cell)> {
        self.columns.iter().map(String::as_str).zip(self.cells)
    }
}

/// The reader configuration: one header line, strict row lengths, standard quoting.
fn builder(options: &ReadOptions) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(false);
    builder
}
