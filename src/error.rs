use core::fmt;

use ads1115::Ads1115Error;

/// Fatal failures while bringing the converter up. A failed read in the
/// sampling loop is not one of these, it is logged and retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum StartupError<BusError> {
    /// Nothing acknowledged at this address during the bus scan
    DeviceAbsent(u8),
    /// Writing the configuration failed
    Bus(Ads1115Error<BusError>),
}

impl<BusError> From<Ads1115Error<BusError>> for StartupError<BusError> {
    fn from(err: Ads1115Error<BusError>) -> Self {
        StartupError::Bus(err)
    }
}

impl<BusError: fmt::Debug> fmt::Display for StartupError<BusError> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::DeviceAbsent(address) => {
                write!(f, "ADS1115 not detected at {:#04x}", address)
            }
            StartupError::Bus(err) => write!(f, "I2C error during configuration: {}", err),
        }
    }
}
