use anyhow::Context;
use clap::Parser;
use pict_cmd::cmd_args::CmdArgs;
use pict_cmd::toml_config::TomlConfig;
use pict_cmd::valid_arg::ValidatedConfig;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Main function.
///
/// On success: writes one argument file per converted table, exit code SUCCESS.
/// On error: prints the error to stderr, exit code FAILURE. The first failing conversion stops
/// the program.
///
/// This program takes some arguments and an optional config file, use `--help`.
fn main() -> anyhow::Result<()> {
    let CmdArgs {
        config_file,
        regular_args,
    } = CmdArgs::parse();

    // parse configuration
    let config = if let Some(config_file) = config_file {
        let toml = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file \"{}\"", config_file.display()))?;

        let toml_config: TomlConfig =
            toml::from_str(&toml).context("Failed to parse the config file")?;
        ValidatedConfig::try_from_toml(toml_config, regular_args)
    } else {
        ValidatedConfig::try_from_cmd_args(regular_args)
    }
    .map_err(|err| anyhow::anyhow!(err))?;

    init_logging(config.console_output);
    tracing::debug!(?config, "validated config");

    for conversion in &config.conversions {
        println!(
            "Converting \"{}\" -> \"{}\"",
            conversion.source.display(),
            conversion.destination.display()
        );

        let written = pict_lib::convert::convert(
            &conversion.source,
            &conversion.destination,
            &config.read_options,
        )?;

        println!("\tWrote {written} lines");
    }

    println!("Finished converting.");

    Ok(())
}

/// Install the log subscriber. `RUST_LOG` takes precedence, else the row diagnostics are shown
/// unless console output is disabled.
fn init_logging(console_output: bool) {
    let fallback = if console_output { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
