//! Configuration commands.

use std::path::Path;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Dump the current configuration to stdout.
pub fn dump(config: &AppConfig, path: Option<&Path>) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let path = path.map_or_else(AppConfig::default_path, Path::to_path_buf);
    println!("# config.toml ({})", path.display());
    println!("{}", toml_str);
    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &AppConfig) -> CliResult<()> {
    config.validate()?;
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path(path: Option<&Path>) -> CliResult<()> {
    let path = path.map_or_else(AppConfig::default_path, Path::to_path_buf);
    println!("config: {}", path.display());
    Ok(())
}
