//! Access to the simulated chip


use async_trait::async_trait;

use caravel_protocol::{
    BusValue,
    Logic,
};


/// A handle to the simulated chip (device under test)
///
/// Signals are addressed by name. See `caravel_protocol::signal` for the names
/// used by the test environment.
#[async_trait(?Send)]
pub trait Dut {
    /// Drive a single-bit signal to the given value
    fn drive(&mut self, signal: &str, logic: Logic) -> Result<(), DutError>;

    /// Stop driving a signal from the host
    fn release(&mut self, signal: &str) -> Result<(), DutError>;

    /// Read the current value of a signal
    fn sample(&self, signal: &str) -> Result<BusValue, DutError>;

    /// Advance the simulation by the given number of clock cycles
    async fn clock_cycles(&mut self, cycles: u64);
}


#[derive(Debug, Eq, PartialEq)]
pub enum DutError {
    /// The chip has no signal of that name
    UnknownSignal(String),

    /// The signal can't be driven by the host
    NotDrivable(String),
}
