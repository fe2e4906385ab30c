//! The environment that test scenarios run against


use async_trait::async_trait;
use log::{
    debug,
    info,
};

use caravel_protocol::{
    bus::RangeError,
    signal,
    BusValue,
    Logic,
};

use crate::{
    config::EnvConfig,
    dut::{
        Dut,
        DutError,
    },
};


/// The operations a test scenario can use to control the chip
///
/// This is all a scenario needs to know about its environment. Scenarios
/// should be generic over this trait, so they can be run against anything that
/// implements it.
#[async_trait(?Send)]
pub trait Environment {
    /// Release the housekeeping SPI chip select
    ///
    /// Returns once the environment has acknowledged the release.
    async fn release_csb(&mut self) -> Result<(), EnvError>;

    /// Wait until the management GPIO has the given value
    async fn wait_mgmt_gpio(&mut self, logic: Logic) -> Result<(), EnvError>;

    /// Sample pins `low` to `high` (inclusive) of the user project I/O bus
    fn monitor_gpio(&self, high: usize, low: usize)
        -> Result<BusValue, EnvError>;
}


/// A configured and running Caravel chip
///
/// Created by [`test_configure`].
pub struct CaravelEnv<D> {
    dut:                 D,
    wait_timeout_cycles: Option<u64>,
    cycles:              u64,
}

impl<D> CaravelEnv<D>
    where D: Dut
{
    /// Returns the number of clock cycles since configuration started
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the underlying chip
    pub fn dut(&self) -> &D {
        &self.dut
    }

    async fn clock_cycles(&mut self, cycles: u64) {
        self.dut.clock_cycles(cycles).await;
        self.cycles += cycles;
    }
}

#[async_trait(?Send)]
impl<D> Environment for CaravelEnv<D>
    where D: Dut
{
    async fn release_csb(&mut self) -> Result<(), EnvError> {
        self.dut.release(signal::CSB)?;

        // The release takes effect with the next clock edge.
        self.clock_cycles(1).await;

        debug!("csb released at cycle {}", self.cycles);
        Ok(())
    }

    async fn wait_mgmt_gpio(&mut self, logic: Logic) -> Result<(), EnvError> {
        let start = self.cycles;

        loop {
            let gpio = self.dut.sample(signal::MGMT_GPIO)?;
            if gpio.bit(0) == Some(logic) {
                debug!(
                    "management GPIO reached {} after {} cycles",
                    logic,
                    self.cycles - start,
                );
                return Ok(());
            }

            if let Some(timeout) = self.wait_timeout_cycles {
                if self.cycles - start >= timeout {
                    return Err(
                        EnvError::Timeout {
                            signal: signal::MGMT_GPIO,
                            cycles: timeout,
                        }
                    );
                }
            }

            self.clock_cycles(1).await;
        }
    }

    fn monitor_gpio(&self, high: usize, low: usize)
        -> Result<BusValue, EnvError>
    {
        let bus = self.dut.sample(signal::MPRJ_IO)?;
        let value = bus.slice(high, low)?;
        Ok(value)
    }
}


/// Configure, start up and reset the chip
///
/// Holds the housekeeping SPI chip select high, then keeps reset asserted for
/// the configured number of clock cycles. Returns the environment once the
/// chip is out of reset.
pub async fn test_configure<D>(mut dut: D, config: &EnvConfig)
    -> Result<CaravelEnv<D>, ConfigureError>
    where D: Dut
{
    dut.drive(signal::CSB, Logic::One)
        .map_err(|err| ConfigureError(err))?;
    dut.drive(signal::RESETB, Logic::Zero)
        .map_err(|err| ConfigureError(err))?;

    let mut env = CaravelEnv {
        dut,
        wait_timeout_cycles: config.wait_timeout_cycles,
        cycles:              0,
    };

    env.clock_cycles(config.reset_cycles).await;
    env.dut.drive(signal::RESETB, Logic::One)
        .map_err(|err| ConfigureError(err))?;

    info!("Chip out of reset after {} cycles", env.cycles);
    Ok(env)
}


/// Error configuring the chip
#[derive(Debug, Eq, PartialEq)]
pub struct ConfigureError(pub DutError);

#[derive(Debug, Eq, PartialEq)]
pub enum EnvError {
    /// Error accessing the chip
    Dut(DutError),

    /// A signal didn't reach the expected value in time
    Timeout {
        signal: &'static str,
        cycles: u64,
    },

    /// The requested pin range doesn't exist
    Range(RangeError),
}

impl From<DutError> for EnvError {
    fn from(err: DutError) -> Self {
        Self::Dut(err)
    }
}

impl From<RangeError> for EnvError {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}
