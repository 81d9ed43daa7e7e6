#![doc = include_str!("../README.md")]

use std::path::{Path, PathBuf};
use strum::{Display, EnumIter};
use thiserror::Error;

pub use strum::IntoEnumIterator;


// public exports
pub mod convert;
pub mod fold;
pub mod table;

/// Columns whose name starts with this prefix are switches, their cells hold the switch argument.
pub const FLAG_PREFIX: &str = "--";

/// File extension of the PICT output files.
pub const SOURCE_EXTENSION: &str = "out";

/// File extension of the written argument files. These are plain text, one line per row.
pub const DESTINATION_EXTENSION: &str = "csv";

/// The programs under test, in the order they are converted by default.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Subject {
    Sender,
    Receiver,
}

/// One source table and the argument file it is converted into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Conversion {
    /// Build the paths `<input_dir>/<name>.<source_ext>` and `<output_dir>/<name>.<destination_ext>`.
    pub fn for_base_name(
        name: &str,
        input_dir: &Path,
        output_dir: &Path,
        source_ext: &str,
        destination_ext: &str,
    ) -> Self {
        Self {
            source: input_dir.join(format!("{name}.{source_ext}")),
            destination: output_dir.join(format!("{name}.{destination_ext}")),
        }
    }

    /// `sender.out -> sender.csv` and `receiver.out -> receiver.csv`, relative to the current
    /// working directory.
    pub fn defaults() -> Vec<Self> {
        Subject::iter()
            .map(|subject| {
                Self::for_base_name(
                    &subject.to_string(),
                    Path::new(""),
                    Path::new(""),
                    SOURCE_EXTENSION,
                    DESTINATION_EXTENSION,
                )
            })
            .collect()
    }
}

/// The error type for file conversions.
#[derive(Error, Debug)]
pub enum Error {
    /// The source table could not be opened or parsed (this includes rows with a wrong cell count).
    #[error("Failed to read source table \"{}\": {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to create destination file \"{}\": {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write destination file \"{}\": {source}", path.display())]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
