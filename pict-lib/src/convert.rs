//! Converting a whole PICT output file into an argument file.

use crate::fold::fold_row;
use crate::table::{ReadOptions, Table};
use crate::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Convert the table at `source` into `destination`, one argument line per row.
///
/// The source is read completely before the destination is created (or truncated), a source
/// that cannot be read leaves an existing destination untouched.
///
/// Returns the count of written lines, which equals the count of data rows in the source.
pub fn convert<S: AsRef<Path>, D: AsRef<Path>>(
    source: S,
    destination: D,
    options: &ReadOptions,
) -> Result<usize, Error> {
    let (source, destination) = (source.as_ref(), destination.as_ref());

    let table = Table::from_path(source, options).map_err(|source_err| Error::Source {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let file = File::create(destination).map_err(|e| Error::CreateDestination {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    let written = write_lines(&table, &mut writer)
        // flush explicitly, errors on drop would be lost
        .and_then(|written| writer.flush().map(|_| written))
        .map_err(|e| Error::WriteDestination {
            path: destination.to_path_buf(),
            source: e,
        })?;

    Ok(written)
}

/// Write the argument line of every row of the table, each terminated by `\n`.
///
/// Returns the count of written lines.
pub fn write_lines<W: Write>(table: &Table, mut writer: W) -> io::Result<usize> {
    let mut written = 0;

    for (idx, row) in table.iter().enumerate() {
        let line = fold_row(row.pairs());
        tracing::info!(row = idx, args = ?line.tokens(), "computed arguments");

        writeln!(writer, "{line}")?;
        written += 1;
    }

    Ok(written)
}
