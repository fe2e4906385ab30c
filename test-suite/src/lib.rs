//! The library code that supports this test suite
//!
//! Test scenarios are written against the `Environment` trait from the host
//! library. The test stand runs them against the firmware model, which stands
//! in for a simulated chip running the test firmware.


pub mod cli;
pub mod config;
pub mod error;
pub mod firmware;
pub mod gpio;
pub mod test_stand;


pub use self::{
    config::Config,
    error::{
        Error,
        Result,
    },
    test_stand::{
        TestStand,
        TestStandInitError,
    },
};


use caravel_host_lib::DuplicateTestError;


/// A test case of this test suite
pub type TestCase = caravel_host_lib::TestCase<TestStand, Error>;

/// The test cases of this test suite
pub type Registry = caravel_host_lib::Registry<TestStand, Error>;


/// Turn a scenario into a test case
///
/// The scenario must be an async function taking the environment and the
/// report. The resulting test case opens the report, configures the chip,
/// runs the scenario, then finishes the report, no matter how the scenario
/// ended. The test case is named after the scenario.
#[macro_export]
macro_rules! caravel_test {
    ($scenario:ident) => {
        $crate::TestCase {
            name: stringify!($scenario),
            run:  |stand: &mut $crate::TestStand| {
                let mut report = stand.open_report(stringify!($scenario))?;

                let status = stand.block_on(async {
                    let mut env = stand.configure().await?;
                    $scenario(&mut env, &mut report).await
                });

                let outcome = report.finish(&status);
                status.map(|()| outcome)
            },
        }
    };
}


/// Returns all test cases of this test suite
pub fn tests() -> std::result::Result<Registry, DuplicateTestError> {
    use self::gpio::gpio_test;

    let mut registry = Registry::new();

    let cases = [
        caravel_test!(gpio_test),
    ];
    for case in cases {
        registry.register(case)?;
    }

    Ok(registry)
}
