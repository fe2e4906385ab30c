//! Environment configuration


use std::{
    fs::File,
    io::prelude::*,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Deserialize;

use crate::Error;


/// The configuration options for the test environment
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct EnvConfig {
    /// Directory that test reports are written to
    ///
    /// Each test case gets its own subdirectory.
    pub report_dir: PathBuf,

    /// Number of clock cycles that reset is held asserted during startup
    pub reset_cycles: u64,

    /// Maximum number of clock cycles to wait for a signal
    ///
    /// If this is not specified, waiting for a signal never times out.
    pub wait_timeout_cycles: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            report_dir:          PathBuf::from("reports"),
            reset_cycles:        20,
            wait_timeout_cycles: None,
        }
    }
}


/// Read and parse a TOML file
///
/// Shared by all configuration types that are read from a file.
pub fn read_toml<T>(path: &Path) -> Result<T, Error>
    where T: for<'de> Deserialize<'de>
{
    // Read configuration file
    let mut config = String::new();
    File::open(path)?
        .read_to_string(&mut config)?;

    // Parse configuration file
    let config = toml::from_str(&config)?;

    Ok(config)
}


/// Error reading a configuration file
#[derive(Debug)]
pub struct ConfigReadError(pub Error);
