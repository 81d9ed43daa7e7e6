//! TOML configuration file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Struct for the TOML configuration file, the constraints are not validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlConfig {
    /// Base names of the files to convert.
    pub names: Option<Vec<String>>,
    pub input: TomlInput,
    pub output: Option<TomlOutput>,
}

/// Input: directory, extension and how to read the tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlInput {
    pub dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub delimiter: Option<String>,
    pub missing: Option<Vec<String>>,
}

/// Output: directory, extension, console output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlOutput {
    pub dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub no_console: bool,
}
