use caravel_host_lib::{
    config::ConfigReadError,
    ConfigureError,
    DuplicateTestError,
    EnvError,
    ReportOpenError,
};
use caravel_protocol::bus::UnresolvedError;

use crate::test_stand::TestStandInitError;


/// Result type specific to this test suite
pub type Result<T = ()> = std::result::Result<T, Error>;


/// Error type specific to this test suite
#[derive(Debug)]
pub enum Error {
    ConfigRead(ConfigReadError),
    Configure(ConfigureError),
    DuplicateTest(DuplicateTestError),
    Env(EnvError),
    ReportOpen(ReportOpenError),
    TestStandInit(TestStandInitError),
    Unresolved(UnresolvedError),
    UnknownTest(String),
}

impl From<ConfigReadError> for Error {
    fn from(err: ConfigReadError) -> Self {
        Self::ConfigRead(err)
    }
}

impl From<ConfigureError> for Error {
    fn from(err: ConfigureError) -> Self {
        Self::Configure(err)
    }
}

impl From<DuplicateTestError> for Error {
    fn from(err: DuplicateTestError) -> Self {
        Self::DuplicateTest(err)
    }
}

impl From<EnvError> for Error {
    fn from(err: EnvError) -> Self {
        Self::Env(err)
    }
}

impl From<ReportOpenError> for Error {
    fn from(err: ReportOpenError) -> Self {
        Self::ReportOpen(err)
    }
}

impl From<TestStandInitError> for Error {
    fn from(err: TestStandInitError) -> Self {
        Self::TestStandInit(err)
    }
}

impl From<UnresolvedError> for Error {
    fn from(err: UnresolvedError) -> Self {
        Self::Unresolved(err)
    }
}
