use std::env;

use ads1115::config::Config;
use ads1115::DEFAULT_ADDRESS;
use embassy_time::Instant;
use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::settings::GAIN_SETTING;

pub type BusType = SimulatedAds1115;

/// Overrides the gain on host runs
pub const GAIN_ENV: &str = "ADS1115_GAIN";

pub fn gain_setting() -> String {
    env::var(GAIN_ENV).unwrap_or_else(|_| GAIN_SETTING.to_owned())
}

/// An ADS1115 on its own bus, answering only at its address. The differential
/// input follows `input`, a function of seconds since creation returning millivolts.
pub struct SimulatedAds1115 {
    address: u8,
    pointer: u8,
    config: u16,
    input: fn(f32) -> f32,
    started: Instant,
}

fn slow_sine(seconds: f32) -> f32 {
    50.0 + 40.0 * (seconds * 0.2).sin()
}

impl SimulatedAds1115 {
    pub fn new() -> Self {
        Self::with_input(slow_sine)
    }

    pub fn with_input(input: fn(f32) -> f32) -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            pointer: 0,
            config: Config::default().to_reg(),
            input,
            started: Instant::now(),
        }
    }

    fn conversion(&self) -> i16 {
        let seconds = self.started.elapsed().as_millis() as f32 / 1000.0;
        let volts = (self.input)(seconds) / 1000.0;
        let counts = volts / Config::from_reg(self.config).gain.lsb();
        counts.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
    }

    fn register(&self) -> [u8; 2] {
        match self.pointer {
            0x00 => self.conversion().to_be_bytes(),
            0x01 => self.config.to_be_bytes(),
            0x02 => 0x8000_u16.to_be_bytes(),
            _ => 0x7FFF_u16.to_be_bytes(),
        }
    }

    fn write_pointer(&mut self, bytes: &[u8]) -> Result<(), ErrorKind> {
        let Some((&pointer, payload)) = bytes.split_first() else {
            return Ok(());
        };
        if pointer > 0x03 {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data));
        }
        self.pointer = pointer;

        if let [high, low] = payload {
            let value = u16::from_be_bytes([*high, *low]);
            if pointer == 0x01 {
                // OS reads back as 0 while converting continuously
                self.config = value & !(1 << 15);
            }
        }
        Ok(())
    }
}

impl Default for SimulatedAds1115 {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for SimulatedAds1115 {
    type Error = ErrorKind;
}

impl I2c for SimulatedAds1115 {
    async fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }

        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.write_pointer(bytes)?,
                Operation::Read(buffer) => {
                    let register = self.register();
                    for (index, byte) in buffer.iter_mut().enumerate() {
                        *byte = register[index % 2];
                    }
                }
            }
        }
        Ok(())
    }
}
