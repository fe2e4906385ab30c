//! GPIO test
//!
//! The firmware configures all user project I/O pads as management outputs,
//! writes a known value to them, then raises the management GPIO. This test
//! waits for that and checks the value on the pads.


use caravel_host_lib::{
    Environment,
    Report,
};
use caravel_protocol::{
    Logic,
    GPIO_COUNT,
};

use crate::Result;


/// The value the firmware writes to the GPIOs
pub const EXPECTED_GPIO_VALUE: u64 = 0x8F;


/// Check the value the firmware wrote to the GPIOs
///
/// A mismatch is recorded as an error in the report, but doesn't abort the
/// test. Errors from the environment do.
pub async fn gpio_test<E>(env: &mut E, report: &mut Report) -> Result
    where E: Environment
{
    env.release_csb().await?;
    env.wait_mgmt_gpio(Logic::One).await?;

    let gpios = env.monitor_gpio(GPIO_COUNT - 1, 0)?;
    report.info(format!("All gpios '{}'", gpios.binstr()));

    let value = gpios.integer()?;
    if value == EXPECTED_GPIO_VALUE {
        report.info(format!("[TEST] Pass the gpio value is '{:#x}'", value));
    }
    else {
        report.error(
            format!(
                "[TEST] Fail the gpio value is :'{:#x}' expected {:#x}",
                value,
                EXPECTED_GPIO_VALUE,
            )
        );
    }

    Ok(())
}
