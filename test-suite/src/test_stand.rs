use std::io;

use log::info;
use tokio::runtime::{
    self,
    Runtime,
};

use caravel_host_lib::{
    config::ConfigReadError,
    test_configure,
    test_stand::{
        exclusive_access,
        ExclusiveAccess,
    },
    CaravelEnv,
    ConfigureError,
    Report,
    ReportOpenError,
};

use crate::{
    config::Config,
    firmware::FirmwareModel,
};


/// An instance of the test stand
///
/// Holds all the resources that a test case might require.
pub struct TestStand {
    /// Guarantees exclusive access to the test environment
    pub guard: ExclusiveAccess,

    /// The configuration the test stand was created with
    pub config: Config,

    runtime: Runtime,
}

impl TestStand {
    /// Initializes the test stand
    ///
    /// Reads the `test-stand.toml` configuration file, if it exists.
    pub fn new() -> Result<Self, TestStandInitError> {
        let config = Config::read()
            .map_err(|err| TestStandInitError::ConfigRead(err))?;
        Self::with_config(config)
    }

    /// Initializes the test stand with the given configuration
    pub fn with_config(config: Config) -> Result<Self, TestStandInitError> {
        let guard = exclusive_access();

        // Scenarios suspend only where they wait for the chip, so a single
        // thread is all they get.
        let runtime = runtime::Builder::new_current_thread()
            .build()
            .map_err(|err| TestStandInitError::Runtime(err))?;

        Ok(
            Self {
                guard,
                config,
                runtime,
            }
        )
    }

    /// Open the report for a test case
    pub fn open_report(&self, name: &str) -> Result<Report, ReportOpenError> {
        info!("Running {}", name);
        Report::open(&self.config.env.report_dir, name)
    }

    /// Create, start up and reset the chip
    pub async fn configure(&self)
        -> Result<CaravelEnv<FirmwareModel>, ConfigureError>
    {
        let dut = FirmwareModel::new(self.config.model.clone());
        test_configure(dut, &self.config.env).await
    }

    /// Run a future to completion on the test stand's runtime
    pub fn block_on<F>(&self, future: F) -> F::Output
        where F: std::future::Future
    {
        self.runtime.block_on(future)
    }
}


/// Error initializing the test stand
#[derive(Debug)]
pub enum TestStandInitError {
    /// Error reading configuration
    ConfigRead(ConfigReadError),

    /// Error creating the runtime that scenarios run on
    Runtime(io::Error),
}
