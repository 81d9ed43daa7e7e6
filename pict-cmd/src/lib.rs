//! Command line application converting PICT output files into argument files.

pub mod cmd_args;
pub mod toml_config;
pub mod valid_arg;
