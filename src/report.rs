//! Console lines. Host builds print them through `Display`, target builds
//! through `defmt::Format`, which has no precision formatting and prints
//! full floats instead.

use core::fmt;

use crate::sampler::Sample;
use crate::settings::Settings;

const RULE: &str = "--------------------------------------------";

/// Startup summary of the selected range
pub struct Banner<'a>(pub &'a Settings);

/// Addresses that answered the bus scan
pub struct DeviceList<'a>(pub &'a [u8]);

/// Bytes sent to the config register
pub struct ConfigWritten {
    pub pointer: u8,
    pub bytes: [u8; 2],
}

impl Banner<'_> {
    pub const PROBE_VOLTS: f32 = 0.100;

    pub fn expected_raw(&self) -> f32 {
        self.0.gain().expected_raw(Self::PROBE_VOLTS)
    }
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.0;
        writeln!(f, "Testing ADS1115 in differential mode (A0-A1)")?;
        writeln!(f, "Gain setting: {}", settings.gain())?;
        writeln!(f, "Full-scale voltage: {:.3} V", settings.full_scale_voltage())?;
        writeln!(f, "LSB (V/bit): {:.8}", settings.lsb())?;
        writeln!(f, "Expected raw ADC for 100 mV input: {:.0}", self.expected_raw())?;
        f.write_str(RULE)
    }
}

impl fmt::Display for DeviceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("I2C devices found: [")?;
        for (index, address) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:#04x}", address)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for ConfigWritten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Configuration written: [{:02X}, {:02X}, {:02X}]",
            self.pointer, self.bytes[0], self.bytes[1]
        )
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Raw ADC: {} Voltage: {:.3} mV Pressure: {:.1} psig",
            self.raw, self.millivolts, self.pressure
        )
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for Banner<'_> {
    fn format(&self, f: defmt::Formatter) {
        let settings = self.0;
        defmt::write!(
            f,
            "Testing ADS1115 in differential mode (A0-A1)\nGain setting: {=str}\nFull-scale voltage: {=f32} V\nLSB (V/bit): {=f32}\nExpected raw ADC for 100 mV input: {=f32}\n{=str}",
            settings.gain().as_str(),
            settings.full_scale_voltage(),
            settings.lsb(),
            self.expected_raw(),
            RULE
        )
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for DeviceList<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "I2C devices found: [");
        for (index, address) in self.0.iter().enumerate() {
            if index > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=u8:#x}", *address);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for ConfigWritten {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Configuration written: [{=u8:02X}, {=u8:02X}, {=u8:02X}]",
            self.pointer,
            self.bytes[0],
            self.bytes[1]
        )
    }
}

#[cfg(target_os = "none")]
impl defmt::Format for Sample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Raw ADC: {=i16} Voltage: {=f32} mV Pressure: {=f32} psig",
            self.raw,
            self.millivolts,
            self.pressure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn banner_for_gain_one() {
        let settings = Settings::from_gain_setting("1").unwrap();
        let expected = "Testing ADS1115 in differential mode (A0-A1)\n\
                        Gain setting: 1\n\
                        Full-scale voltage: 4.096 V\n\
                        LSB (V/bit): 0.00012500\n\
                        Expected raw ADC for 100 mV input: 800\n\
                        --------------------------------------------";
        assert_eq!(format!("{}", Banner(&settings)), expected);
    }

    #[test]
    fn banner_for_gain_two_thirds() {
        let settings = Settings::from_gain_setting("2/3").unwrap();
        let banner = format!("{}", Banner(&settings));
        assert!(banner.contains("Gain setting: 2/3\n"));
        assert!(banner.contains("Full-scale voltage: 6.144 V\n"));
        assert!(banner.contains("LSB (V/bit): 0.00018751\n"));
    }

    #[test]
    fn device_list() {
        assert_eq!(format!("{}", DeviceList(&[0x48])), "I2C devices found: [0x48]");
        assert_eq!(
            format!("{}", DeviceList(&[0x08, 0x48, 0x77])),
            "I2C devices found: [0x08, 0x48, 0x77]"
        );
        assert_eq!(format!("{}", DeviceList(&[])), "I2C devices found: []");
    }

    #[test]
    fn config_written() {
        let line = ConfigWritten {
            pointer: 0x01,
            bytes: [0x8A, 0x83],
        };
        assert_eq!(format!("{}", line), "Configuration written: [01, 8A, 83]");
    }

    #[test]
    fn sample_line() {
        let sample = Sample {
            raw: -1234,
            millivolts: -9.64072,
            pressure: -9.64072,
        };
        assert_eq!(
            format!("{}", sample),
            "Raw ADC: -1234 Voltage: -9.641 mV Pressure: -9.6 psig"
        );
    }
}
