#[cfg(target_os = "none")]
mod embedded;
#[cfg(target_os = "none")]
pub use embedded::*;

#[cfg(not(target_os = "none"))]
mod native;
#[cfg(not(target_os = "none"))]
pub use native::*;

use ads1115::Ads1115;
use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;

/// The bus behind its lock, shared by the scan and the converter
pub type SharedBus = Mutex<NoopRawMutex, BusType>;

/// Locks the shared bus for the duration of one transaction
pub type AdcBus = I2cDevice<'static, NoopRawMutex, BusType>;

pub type AdcType = Ads1115<AdcBus>;
