use ads1115::config::Config;
use ads1115::{Gain, InvalidGain, DEFAULT_ADDRESS};
use embassy_time::Duration;

use crate::pressure::Transducer;

/// Gain the firmware runs with, one of "2/3", "1", "2", "4", "8" or "16".
pub const GAIN_SETTING: &str = "16";

/// Everything the sampler needs, fixed for the lifetime of the firmware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub address: u8,
    pub config: Config,
    pub transducer: Transducer,
    /// Wait after writing the configuration before the first read
    pub settle_delay: Duration,
    pub sample_interval: Duration,
    /// Wait after a failed read
    pub retry_delay: Duration,
}

impl Settings {
    /// Builds the settings for continuous differential sampling of AIN0 - AIN1.
    ///
    /// Fails before anything touches the bus if `gain` is not a known setting.
    pub fn from_gain_setting(gain: &str) -> Result<Self, InvalidGain> {
        let gain: Gain = gain.parse()?;

        Ok(Self {
            address: DEFAULT_ADDRESS,
            config: Config::differential(gain),
            transducer: Transducer::default(),
            settle_delay: Duration::from_millis(200),
            sample_interval: Duration::from_secs(1),
            retry_delay: Duration::from_secs(1),
        })
    }

    pub fn gain(&self) -> Gain {
        self.config.gain
    }

    pub fn full_scale_voltage(&self) -> f32 {
        self.config.gain.full_scale_voltage()
    }

    pub fn lsb(&self) -> f32 {
        self.config.gain.lsb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ads1115::{ComparatorQueue, DataRate, Mode, Mux};

    #[test]
    fn default_gain_setting_is_valid() {
        let settings = Settings::from_gain_setting(GAIN_SETTING).unwrap();
        assert_eq!(settings.gain(), Gain::Sixteen);
        assert_eq!(settings.full_scale_voltage(), 0.256);
        assert_eq!(settings.config.to_bytes(), [0x8A, 0x83]);
    }

    #[test]
    fn fixed_choices() {
        let settings = Settings::from_gain_setting("1").unwrap();
        assert_eq!(settings.address, 0x48);
        assert_eq!(settings.config.mux, Mux::DiffAin0Ain1);
        assert_eq!(settings.config.mode, Mode::Continuous);
        assert_eq!(settings.config.data_rate, DataRate::Sps128);
        assert_eq!(settings.config.comparator_queue, ComparatorQueue::Disabled);
        assert_eq!(settings.settle_delay, Duration::from_millis(200));
        assert_eq!(settings.sample_interval, Duration::from_secs(1));
        assert_eq!(settings.retry_delay, Duration::from_secs(1));
        assert_eq!(settings.transducer, Transducer::default());
    }

    #[test]
    fn lsb_follows_gain() {
        for name in ["2/3", "1", "2", "4", "8", "16"] {
            let settings = Settings::from_gain_setting(name).unwrap();
            assert!(settings.lsb() > 0.0);
            assert_eq!(settings.lsb(), settings.full_scale_voltage() / 32767.0);
        }
    }

    #[test]
    fn unknown_gain_fails_fast() {
        assert_eq!(Settings::from_gain_setting("3"), Err(InvalidGain));
        assert_eq!(Settings::from_gain_setting("1.0"), Err(InvalidGain));
    }
}
