//! Behavioral model of a Caravel chip running the GPIO test firmware
//!
//! The model stands in for a simulated chip. It doesn't model any timing below
//! the clock cycle, only the pin state that the firmware makes visible to the
//! host.


use async_trait::async_trait;
use log::trace;

use caravel_host_lib::{
    Dut,
    DutError,
};
use caravel_protocol::{
    signal,
    BusValue,
    GpioMode,
    Logic,
    GPIO_COUNT,
};

use crate::config::ModelConfig;


/// The steps of the GPIO test firmware, in execution order
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Enable the management GPIO as output
    MgmtGpioOutputEnable,

    /// Write 0 to the management GPIO
    MgmtGpioWriteLow,

    /// Disable the housekeeping SPI
    ///
    /// This can only happen after the host released `csb`.
    DisableHkSpi,

    /// Stage the management output configuration for all pads
    ConfigureAll,

    /// Load the staged configuration into the pads
    LoadConfigs,

    /// Write the test value to the low 32 pads
    WriteLow,

    /// Write 1 to the management GPIO, to signal that configuration finished
    MgmtGpioWriteHigh,

    /// The firmware has returned from `main`
    Done,
}

impl Step {
    fn next(self) -> Self {
        match self {
            Self::MgmtGpioOutputEnable => Self::MgmtGpioWriteLow,
            Self::MgmtGpioWriteLow     => Self::DisableHkSpi,
            Self::DisableHkSpi         => Self::ConfigureAll,
            Self::ConfigureAll         => Self::LoadConfigs,
            Self::LoadConfigs          => Self::WriteLow,
            Self::WriteLow             => Self::MgmtGpioWriteHigh,
            Self::MgmtGpioWriteHigh    => Self::Done,
            Self::Done                 => Self::Done,
        }
    }
}


/// A Caravel chip running the GPIO test firmware
pub struct FirmwareModel {
    config: ModelConfig,

    csb:    Option<Logic>,
    resetb: Logic,

    step:    Step,
    elapsed: u64,

    hk_spi_enabled: bool,
    mgmt_gpio_oe:   bool,
    mgmt_gpio_out:  Logic,

    staged: [Option<GpioMode>; GPIO_COUNT],
    loaded: [Option<GpioMode>; GPIO_COUNT],
    output: u64,
}

impl FirmwareModel {
    /// Create a new model that is held in reset
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,

            csb:    None,
            resetb: Logic::Zero,

            step:    Step::MgmtGpioOutputEnable,
            elapsed: 0,

            hk_spi_enabled: true,
            mgmt_gpio_oe:   false,
            mgmt_gpio_out:  Logic::Zero,

            staged: [None; GPIO_COUNT],
            loaded: [None; GPIO_COUNT],
            output: 0,
        }
    }

    /// The firmware step that will be executed next
    pub fn step(&self) -> Step {
        self.step
    }

    /// Indicates whether the housekeeping SPI is still enabled
    pub fn hk_spi_enabled(&self) -> bool {
        self.hk_spi_enabled
    }

    /// Return to the power-on state, keeping the host's drivers
    fn reset(&mut self) {
        let csb    = self.csb;
        let resetb = self.resetb;

        *self = Self::new(self.config.clone());

        self.csb    = csb;
        self.resetb = resetb;
    }

    fn tick(&mut self) {
        if self.resetb != Logic::One {
            self.reset();
            return;
        }
        if self.step == Step::Done {
            return;
        }

        self.elapsed += 1;
        if self.elapsed < self.config.step_cycles {
            return;
        }

        // While the host holds `csb`, the housekeeping SPI belongs to the host
        // and the firmware can't continue.
        if self.step == Step::DisableHkSpi && self.csb.is_some() {
            return;
        }

        self.execute(self.step);
        self.step    = self.step.next();
        self.elapsed = 0;
    }

    fn execute(&mut self, step: Step) {
        trace!("Firmware step: {:?}", step);

        match step {
            Step::MgmtGpioOutputEnable => {
                self.mgmt_gpio_oe = true;
            }
            Step::MgmtGpioWriteLow => {
                self.mgmt_gpio_out = Logic::Zero;
            }
            Step::DisableHkSpi => {
                self.hk_spi_enabled = false;
            }
            Step::ConfigureAll => {
                self.staged = [Some(GpioMode::MgmtStdOutput); GPIO_COUNT];
            }
            Step::LoadConfigs => {
                self.loaded = self.staged;
            }
            Step::WriteLow => {
                let high = self.output & !0xFFFF_FFFF;
                self.output = high | u64::from(self.config.gpio_low);
            }
            Step::MgmtGpioWriteHigh => {
                self.mgmt_gpio_out = Logic::One;
            }
            Step::Done => {}
        }
    }

    fn pad(&self, index: usize) -> Logic {
        match self.loaded[index] {
            Some(mode) if mode.is_management() && mode.drives_output() => {
                Logic::from(self.output >> index & 1 == 1)
            }
            _ => {
                Logic::HighImpedance
            }
        }
    }
}

#[async_trait(?Send)]
impl Dut for FirmwareModel {
    fn drive(&mut self, name: &str, logic: Logic) -> Result<(), DutError> {
        match name {
            signal::CSB    => self.csb = Some(logic),
            signal::RESETB => self.resetb = logic,

            signal::MGMT_GPIO | signal::MPRJ_IO => {
                return Err(DutError::NotDrivable(name.to_owned()));
            }
            _ => {
                return Err(DutError::UnknownSignal(name.to_owned()));
            }
        }

        Ok(())
    }

    fn release(&mut self, name: &str) -> Result<(), DutError> {
        match name {
            signal::CSB    => self.csb = None,
            signal::RESETB => self.resetb = Logic::HighImpedance,

            signal::MGMT_GPIO | signal::MPRJ_IO => {}
            _ => {
                return Err(DutError::UnknownSignal(name.to_owned()));
            }
        }

        Ok(())
    }

    fn sample(&self, name: &str) -> Result<BusValue, DutError> {
        let value = match name {
            signal::CSB => {
                BusValue::uniform(
                    self.csb.unwrap_or(Logic::HighImpedance),
                    1,
                )
            }
            signal::RESETB => {
                BusValue::uniform(self.resetb, 1)
            }
            signal::MGMT_GPIO => {
                let logic = if self.mgmt_gpio_oe {
                    self.mgmt_gpio_out
                }
                else {
                    Logic::HighImpedance
                };
                BusValue::uniform(logic, 1)
            }
            signal::MPRJ_IO => {
                BusValue::from_bits(
                    (0..GPIO_COUNT).map(|i| self.pad(i)).collect()
                )
            }
            _ => {
                return Err(DutError::UnknownSignal(name.to_owned()));
            }
        };

        Ok(value)
    }

    async fn clock_cycles(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
            tokio::task::yield_now().await;
        }
    }
}
