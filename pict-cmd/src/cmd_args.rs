//! Everything necessary for command line arguments.

use clap::{Args, Parser};
use std::path::PathBuf;

/// The command line arguments.
#[derive(Debug, Parser)]
#[command(version, author, about, long_about = None)]
pub struct CmdArgs {
    /// Path to an optional configuration file.
    ///
    /// The configuration written in the config file can be supplemented by command line switches.
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    #[command(flatten)]
    pub regular_args: RegularArgs,
}

/// The "regular" command line arguments (everything except for config file)
#[derive(Debug, Clone, Default, Args)]
#[group(required = false, multiple = true)]
pub struct RegularArgs {
    /// The base names of the files to convert: "<NAME>.out" is read, "<NAME>.csv" is written.
    ///
    /// Default: sender,receiver
    #[arg(short, long, value_delimiter = ',')]
    pub names: Option<Vec<String>>,
    /// Directory containing the PICT output files. Default: the current directory.
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,
    /// Directory to write the argument files to. Default: the current directory.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// File extension of the PICT output files, without the leading dot. Default: out
    #[arg(long)]
    pub source_extension: Option<String>,
    /// File extension of the written argument files, without the leading dot. Default: csv
    #[arg(long)]
    pub destination_extension: Option<String>,
    /// The field delimiter of the PICT output files, a single ASCII character. Default: tab
    #[arg(short, long)]
    pub delimiter: Option<String>,
    /// Additional cell values to be treated like empty cells, e.g. '~'.
    #[arg(short, long, value_delimiter = ',')]
    pub missing: Option<Vec<String>>,
    /// Do not print the computed arguments of each row, only the file summaries.
    #[arg(long)]
    pub no_console: bool,
}
