//! Struct and conversion method for a validated arg.

use crate::cmd_args::RegularArgs;
use crate::toml_config::{TomlConfig, TomlInput, TomlOutput};
use pict_lib::table::ReadOptions;
use pict_lib::{Conversion, IntoEnumIterator, Subject, DESTINATION_EXTENSION, SOURCE_EXTENSION};
use std::path::PathBuf;

/// A validated config with a valid state that can be used to run the conversions.
#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    /// The files to convert, in order.
    pub conversions: Vec<Conversion>,
    /// How to read the source tables.
    pub read_options: ReadOptions,
    /// Write console output about individual rows, else only file summaries.
    pub console_output: bool,
}

impl ValidatedConfig {
    /// Creates a valid config from the command line arguments only.
    pub fn try_from_cmd_args(args: RegularArgs) -> Result<Self, &'static str> {
        Self::try_from_toml(TomlConfig::default(), args)
    }

    /// Creates a valid config from the specified toml configuration, uses overrides from the
    /// command line.
    pub fn try_from_toml(toml: TomlConfig, args: RegularArgs) -> Result<Self, &'static str> {
        let TomlConfig {
            names,
            input:
                TomlInput {
                    dir: input_dir,
                    extension: source_extension,
                    delimiter,
                    missing,
                },
            output,
        } = toml;

        let TomlOutput {
            dir: output_dir,
            extension: destination_extension,
            no_console,
        } = output.unwrap_or_default();

        let RegularArgs {
            names: args_names,
            input_dir: args_input_dir,
            output_dir: args_output_dir,
            source_extension: args_source_extension,
            destination_extension: args_destination_extension,
            delimiter: args_delimiter,
            missing: args_missing,
            no_console: args_no_console,
        } = args;

        // cmd args overwrite everywhere
        let names = args_names
            .or(names)
            .unwrap_or_else(|| Subject::iter().map(|s| s.to_string()).collect());
        let input_dir = args_input_dir.or(input_dir).unwrap_or_default();
        let output_dir = args_output_dir.or(output_dir).unwrap_or_default();
        let source_extension = args_source_extension
            .or(source_extension)
            .unwrap_or_else(|| SOURCE_EXTENSION.to_string());
        let destination_extension = args_destination_extension
            .or(destination_extension)
            .unwrap_or_else(|| DESTINATION_EXTENSION.to_string());
        let console_output = !(args_no_console || no_console);

        let delimiter = match args_delimiter.or(delimiter) {
            Some(delimiter) => parse_delimiter(&delimiter)?,
            None => ReadOptions::default().delimiter,
        };

        // markers from both sources are used
        let missing = missing
            .into_iter()
            .chain(args_missing)
            .flatten()
            .collect();

        let conversions = build_conversions(
            &names,
            input_dir,
            output_dir,
            &source_extension,
            &destination_extension,
        )?;

        Ok(Self {
            conversions,
            read_options: ReadOptions { delimiter, missing },
            console_output,
        })
    }
}

/// The delimiter must be a single ASCII character, so it fits into one byte.
fn parse_delimiter(delimiter: &str) -> Result<u8, &'static str> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err("The delimiter must be exactly one ASCII character"),
    }
}

/// Validate names and extensions, build the conversion for each name.
fn build_conversions(
    names: &[String],
    input_dir: PathBuf,
    output_dir: PathBuf,
    source_extension: &str,
    destination_extension: &str,
) -> Result<Vec<Conversion>, &'static str> {
    if names.is_empty() {
        return Err("At least one file name must be given");
    }

    if source_extension.is_empty() || destination_extension.is_empty() {
        return Err("File extensions must not be empty");
    }

    names
        .iter()
        .map(|name| {
            if name.is_empty() {
                return Err("File names must not be empty");
            }

            if name.contains(['/', '\\']) {
                return Err("File names must not contain path separators, use the directory options");
            }

            let conversion = Conversion::for_base_name(
                name,
                &input_dir,
                &output_dir,
                source_extension,
                destination_extension,
            );

            if conversion.source == conversion.destination {
                return Err("Source and destination file are the same, the source would be overwritten");
            }

            Ok(conversion)
        })
        .collect()
}
