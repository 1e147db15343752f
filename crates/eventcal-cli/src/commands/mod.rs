//! Subcommand implementations.

pub mod config;
pub mod email;
pub mod ics;

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

/// Reads and parses a JSON input file; `-` reads stdin.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| CliError::io_at(path, e))?
    };
    Ok(serde_json::from_str(&content)?)
}
