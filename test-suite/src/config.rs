use std::{
    io,
    path::Path,
};

use serde::Deserialize;

use caravel_host_lib::{
    config::{
        read_toml,
        ConfigReadError,
    },
    EnvConfig,
    Error as HostError,
};


/// The default location of the configuration file
pub const CONFIG_FILE: &str = "test-stand.toml";


/// The configuration options for the test suite
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Configuration of the test environment
    #[serde(flatten)]
    pub env: EnvConfig,

    /// Configuration of the firmware model that stands in for the chip
    pub model: ModelConfig,
}

impl Config {
    /// Read configuration from `test-stand.toml`
    ///
    /// Falls back to the default configuration, if that file doesn't exist.
    pub fn read() -> Result<Self, ConfigReadError> {
        Self::read_or_default(CONFIG_FILE)
    }

    /// Read configuration from the given file, if it exists
    ///
    /// Falls back to the default configuration, if it doesn't.
    pub fn read_or_default(path: impl AsRef<Path>)
        -> Result<Self, ConfigReadError>
    {
        match Self::read_from(path) {
            Err(ConfigReadError(HostError::Io(err)))
                if err.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Read configuration from the given file
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, ConfigReadError> {
        read_toml(path.as_ref())
            .map_err(|err| ConfigReadError(err))
    }
}


/// Configuration of the firmware model
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// The value the firmware writes to the low 32 GPIOs
    pub gpio_low: u32,

    /// Number of clock cycles each firmware step takes
    pub step_cycles: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            gpio_low:    0x8F,
            step_cycles: 4,
        }
    }
}
