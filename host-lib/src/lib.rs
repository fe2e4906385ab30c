//! Library to support Caravel test scenarios running on the host computer
//!
//! Provides the environment a scenario runs against, the wrapper that collects
//! its report, and the registry that test cases are collected in. The
//! simulator itself is not part of this library. It is reached through the
//! [`Dut`] trait.


pub mod config;
pub mod dut;
pub mod env;
pub mod error;
pub mod registry;
pub mod report;
pub mod test_stand;


pub use self::{
    config::EnvConfig,
    dut::{
        Dut,
        DutError,
    },
    env::{
        test_configure,
        CaravelEnv,
        ConfigureError,
        EnvError,
        Environment,
    },
    error::{
        Error,
        Result,
    },
    registry::{
        DuplicateTestError,
        Registry,
        TestCase,
    },
    report::{
        Entry,
        Outcome,
        Report,
        ReportOpenError,
    },
};
