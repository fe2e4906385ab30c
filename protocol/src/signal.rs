//! Names of the chip signals the test stand interacts with


/// Chip select of the housekeeping SPI
///
/// Held high by the host during startup. Releasing it hands the housekeeping
/// SPI over to the firmware.
pub const CSB: &str = "csb";

/// Active-low chip reset
pub const RESETB: &str = "resetb";

/// The management GPIO
///
/// Firmware uses this to signal the host, for example to indicate that it has
/// finished configuring the chip.
pub const MGMT_GPIO: &str = "gpio";

/// The user project I/O bus, `mprj_io[37:0]`
pub const MPRJ_IO: &str = "mprj_io";
