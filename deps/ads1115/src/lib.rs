//! A platform agnostic driver to interface with the ADS1115 (16-bit delta-sigma ADC)
//!
//! This driver is built using [`embedded-hal-async`](docs.rs/embedded-hal-async) traits.
//!
//! # Examples
//!
//! ```ignore
//! use ads1115::{Ads1115, Gain, DEFAULT_ADDRESS};
//! use ads1115::config::Config;
//! // depends on your board/chip
//! let i2c = todo!("Create the I2C interface");
//! let mut adc = Ads1115::new(i2c, DEFAULT_ADDRESS);
//!
//! // the power-on default is single-shot on the ±2.048 V range,
//! // switch to continuous differential conversion of AIN0 - AIN1
//! adc.configure(Config::differential(Gain::Sixteen)).await.unwrap();
//!
//! let reading = adc.read().await.unwrap();
//! let millivolts = reading.millivolts();
//! ```

#![cfg_attr(not(test), no_std)]

use config::{Config, Register};

pub mod config;

pub use config::{ComparatorQueue, DataRate, Gain, InvalidGain, Mode, Mux, FULL_SCALE_COUNTS};

/// Address with the ADDR pin tied to GND
pub const DEFAULT_ADDRESS: u8 = 0x48;

pub struct Ads1115<Bus> {
    bus: Bus,
    address: u8,
    // last configuration written, used to scale conversions
    config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ads1115Error<BusError> {
    BusError(BusError),
}

impl<BusError> From<BusError> for Ads1115Error<BusError> {
    fn from(err: BusError) -> Self {
        Ads1115Error::BusError(err)
    }
}

impl<BusError: core::fmt::Debug> core::fmt::Display for Ads1115Error<BusError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Ads1115Error::BusError(err) => write!(f, "bus error: {:?}", err),
        }
    }
}

/// Rebuilds a signed conversion result from the two register bytes, high byte first.
///
/// ```
/// assert_eq!(ads1115::raw_from_bytes([0xFF, 0xFF]), -1);
/// assert_eq!(ads1115::raw_from_bytes([0x80, 0x00]), i16::MIN);
/// ```
pub fn raw_from_bytes(bytes: [u8; 2]) -> i16 {
    i16::from_be_bytes(bytes)
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// A single conversion result
pub struct Reading {
    /// Signed conversion register value
    pub raw: i16,
    /// Differential input voltage: Volts (V)
    pub voltage: f32,
}

impl Reading {
    /// Scales a raw count by the LSB size of `gain`.
    pub fn from_raw(raw: i16, gain: Gain) -> Self {
        Self {
            raw,
            voltage: raw as f32 * gain.lsb(),
        }
    }

    pub fn millivolts(&self) -> f32 {
        self.voltage * 1000.0
    }
}

impl<Bus> Ads1115<Bus> {
    /// Creates a new driver without touching the bus.
    ///
    /// The cached configuration starts out as the power-on default until
    /// [`Ads1115::configure`] is called.
    pub fn new(bus: Bus, address: u8) -> Self {
        Self {
            bus,
            address,
            config: Config::default(),
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Configuration last written by this driver
    pub fn config(&self) -> Config {
        self.config
    }

    /// Volts per raw count for the current gain
    pub fn lsb(&self) -> f32 {
        self.config.gain.lsb()
    }

    /// Destroys the driver and hands back the bus
    pub fn release(self) -> Bus {
        self.bus
    }
}

impl<I2c: embedded_hal_async::i2c::I2c> Ads1115<I2c> {
    /// Writes the config register
    pub async fn configure(&mut self, new: Config) -> Result<(), Ads1115Error<I2c::Error>> {
        self.write_register(Register::config, new.to_reg()).await?;
        self.config = new;
        Ok(())
    }

    /// Reads the config register back from the device
    pub async fn read_config(&mut self) -> Result<Config, Ads1115Error<I2c::Error>> {
        let bytes = self.read_register(Register::config).await?;
        Ok(Config::from_reg(u16::from_be_bytes(bytes)))
    }

    /// Returns the latest conversion result as a signed count
    pub async fn read_raw(&mut self) -> Result<i16, Ads1115Error<I2c::Error>> {
        let bytes = self.read_register(Register::conversion).await?;
        Ok(raw_from_bytes(bytes))
    }

    /// Reads the conversion register and scales it with the configured gain
    pub async fn read(&mut self) -> Result<Reading, Ads1115Error<I2c::Error>> {
        let raw = self.read_raw().await?;
        Ok(Reading::from_raw(raw, self.config.gain))
    }

    async fn write_register(&mut self, reg: Register, value: u16) -> Result<(), I2c::Error> {
        let [high, low] = value.to_be_bytes();
        let buf: [u8; 3] = [reg as u8, high, low];
        self.bus.write(self.address, &buf).await
    }

    async fn read_register(&mut self, reg: Register) -> Result<[u8; 2], I2c::Error> {
        let mut buf = [0_u8; 2];
        self.bus.write_read(self.address, &[reg as u8], &mut buf).await?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = DEFAULT_ADDRESS;

    #[test]
    fn sign_reconstruction() {
        assert_eq!(raw_from_bytes([0xFF, 0xFF]), -1);
        assert_eq!(raw_from_bytes([0x00, 0x01]), 1);
        assert_eq!(raw_from_bytes([0x80, 0x00]), -32768);
        assert_eq!(raw_from_bytes([0x7F, 0xFF]), 32767);
        assert_eq!(raw_from_bytes([0x03, 0x1F]), 799);
    }

    #[test]
    fn reading_scales_with_gain() {
        let reading = Reading::from_raw(799, Gain::One);
        assert!((reading.millivolts() - 99.878).abs() < 0.01, "{}", reading.millivolts());

        let negative = Reading::from_raw(-799, Gain::One);
        assert_eq!(negative.millivolts(), -reading.millivolts());

        let full_scale = Reading::from_raw(i16::MAX, Gain::Sixteen);
        assert!((full_scale.voltage - 0.256).abs() < 1e-6);
    }

    #[test]
    fn new_does_not_touch_the_bus() {
        let mut i2c = I2cMock::new(&[]);
        let adc = Ads1115::new(i2c.clone(), ADDR);
        assert_eq!(adc.config(), Config::default());
        assert_eq!(adc.address(), ADDR);
        i2c.done();
    }

    #[test]
    fn configure_writes_pointer_and_word() {
        let expectations = [I2cTransaction::write(ADDR, std::vec![0x01, 0x8A, 0x83])];
        let mut adc = Ads1115::new(I2cMock::new(&expectations), ADDR);

        block_on(adc.configure(Config::differential(Gain::Sixteen))).unwrap();
        assert_eq!(adc.config().gain, Gain::Sixteen);
        assert_eq!(adc.lsb(), Gain::Sixteen.lsb());

        adc.release().done();
    }

    #[test]
    fn configure_failure_keeps_previous_config() {
        let expectations = [I2cTransaction::write(ADDR, std::vec![0x01, 0x82, 0x83]).with_error(ErrorKind::Other)];
        let mut adc = Ads1115::new(I2cMock::new(&expectations), ADDR);

        let result = block_on(adc.configure(Config::differential(Gain::One)));
        assert_eq!(result, Err(Ads1115Error::BusError(ErrorKind::Other)));
        assert_eq!(adc.config(), Config::default());

        adc.release().done();
    }

    #[test]
    fn read_selects_conversion_register() {
        let expectations = [
            I2cTransaction::write(ADDR, std::vec![0x01, 0x82, 0x83]),
            I2cTransaction::write_read(ADDR, std::vec![0x00], std::vec![0x03, 0x1F]),
            I2cTransaction::write_read(ADDR, std::vec![0x00], std::vec![0xFF, 0xFF]),
        ];
        let mut adc = Ads1115::new(I2cMock::new(&expectations), ADDR);

        block_on(adc.configure(Config::differential(Gain::One))).unwrap();
        let reading = block_on(adc.read()).unwrap();
        assert_eq!(reading.raw, 799);
        assert!((reading.millivolts() - 99.878).abs() < 0.01);

        assert_eq!(block_on(adc.read_raw()).unwrap(), -1);

        adc.release().done();
    }

    #[test]
    fn read_surfaces_bus_errors() {
        let expectations = [
            I2cTransaction::write_read(ADDR, std::vec![0x00], std::vec![0x00, 0x00]).with_error(ErrorKind::Other),
        ];
        let mut adc = Ads1115::new(I2cMock::new(&expectations), ADDR);

        assert_eq!(block_on(adc.read()), Err(Ads1115Error::BusError(ErrorKind::Other)));

        adc.release().done();
    }

    #[test]
    fn read_config_decodes_register() {
        let expectations = [I2cTransaction::write_read(ADDR, std::vec![0x01], std::vec![0x0A, 0x83])];
        let mut adc = Ads1115::new(I2cMock::new(&expectations), ADDR);

        let config = block_on(adc.read_config()).unwrap();
        assert_eq!(config.gain, Gain::Sixteen);
        assert_eq!(config.mode, Mode::Continuous);
        assert_eq!(config.comparator_queue, ComparatorQueue::Disabled);

        adc.release().done();
    }
}
