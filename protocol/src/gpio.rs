//! GPIO pad configuration



/// Number of pads on the user project I/O bus
pub const GPIO_COUNT: usize = 38;


/// The configuration of a single GPIO pad
///
/// Each pad is controlled either by the management core or by the user
/// project, and configured as an input, an output, or something in between.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GpioMode {
    MgmtStdInputNopull,
    MgmtStdInputPulldown,
    MgmtStdInputPullup,
    MgmtStdOutput,
    MgmtStdBidirectional,
    MgmtStdAnalog,
    UserStdInputNopull,
    UserStdInputPulldown,
    UserStdInputPullup,
    UserStdOutput,
    UserStdBidirectional,
    UserStdAnalog,
}

impl GpioMode {
    /// Indicates whether the management core controls the pad
    pub fn is_management(self) -> bool {
        matches!(self,
            Self::MgmtStdInputNopull
            | Self::MgmtStdInputPulldown
            | Self::MgmtStdInputPullup
            | Self::MgmtStdOutput
            | Self::MgmtStdBidirectional
            | Self::MgmtStdAnalog
        )
    }

    /// Indicates whether the pad drives its output value onto the pin
    pub fn drives_output(self) -> bool {
        matches!(self,
            Self::MgmtStdOutput
            | Self::MgmtStdBidirectional
            | Self::UserStdOutput
            | Self::UserStdBidirectional
        )
    }
}


#[cfg(test)]
mod tests {
    use super::GpioMode;


    #[test]
    fn management_output_should_drive_its_pin() {
        let mode = GpioMode::MgmtStdOutput;

        assert!(mode.is_management());
        assert!(mode.drives_output());
    }

    #[test]
    fn inputs_should_not_drive_their_pins() {
        assert!(!GpioMode::MgmtStdInputPullup.drives_output());
        assert!(!GpioMode::UserStdInputNopull.drives_output());
        assert!(!GpioMode::UserStdAnalog.is_management());
    }
}
