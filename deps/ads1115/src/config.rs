use core::fmt;
use core::str::FromStr;

/// Address pointer register values
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    conversion = 0x00,
    config = 0x01,
}

/// Largest positive conversion result, used as the divisor for the LSB size.
pub const FULL_SCALE_COUNTS: f32 = 32767.0;

/// Programmable gain amplifier setting (PGA bits 11:9)
///
/// ```
/// use ads1115::Gain;
///
/// let gain: Gain = "1".parse().unwrap();
/// assert_eq!(Gain::One, gain);
/// assert_eq!(4.096, gain.full_scale_voltage());
/// assert!("3".parse::<Gain>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gain {
    /// ±6.144 V
    TwoThirds = 0b000,
    /// ±4.096 V
    One = 0b001,
    /// ±2.048 V, power-on default
    Two = 0b010,
    /// ±1.024 V
    Four = 0b011,
    /// ±0.512 V
    Eight = 0b100,
    /// ±0.256 V
    Sixteen = 0b101,
}

impl Gain {
    pub const ALL: [Gain; 6] = [
        Gain::TwoThirds,
        Gain::One,
        Gain::Two,
        Gain::Four,
        Gain::Eight,
        Gain::Sixteen,
    ];

    /// Full-scale input voltage in volts
    pub fn full_scale_voltage(self) -> f32 {
        match self {
            Gain::TwoThirds => 6.144,
            Gain::One => 4.096,
            Gain::Two => 2.048,
            Gain::Four => 1.024,
            Gain::Eight => 0.512,
            Gain::Sixteen => 0.256,
        }
    }

    /// Volts per raw count
    pub fn lsb(self) -> f32 {
        self.full_scale_voltage() / FULL_SCALE_COUNTS
    }

    /// Raw count the converter should report for a differential input of `volts`.
    pub fn expected_raw(self, volts: f32) -> f32 {
        volts / self.lsb()
    }

    /// The string form the gain is selected by, e.g. `"2/3"` or `"16"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Gain::TwoThirds => "2/3",
            Gain::One => "1",
            Gain::Two => "2",
            Gain::Four => "4",
            Gain::Eight => "8",
            Gain::Sixteen => "16",
        }
    }

    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0b000 => Gain::TwoThirds,
            0b001 => Gain::One,
            0b010 => Gain::Two,
            0b011 => Gain::Four,
            0b100 => Gain::Eight,
            // 0b101, 0b110 and 0b111 all select ±0.256 V
            _ => Gain::Sixteen,
        }
    }
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a gain string is not one of `2/3, 1, 2, 4, 8, 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidGain;

impl fmt::Display for InvalidGain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid gain setting. Choose from: ")?;
        for (index, gain) in Gain::ALL.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(gain.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Gain {
    type Err = InvalidGain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gain::ALL
            .into_iter()
            .find(|gain| gain.as_str() == s)
            .ok_or(InvalidGain)
    }
}

/// Input multiplexer (MUX bits 14:12)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mux {
    /// AINp = AIN0, AINn = AIN1
    #[default]
    DiffAin0Ain1 = 0b000,
    /// AINp = AIN0, AINn = AIN3
    DiffAin0Ain3 = 0b001,
    /// AINp = AIN1, AINn = AIN3
    DiffAin1Ain3 = 0b010,
    /// AINp = AIN2, AINn = AIN3
    DiffAin2Ain3 = 0b011,
    /// AIN0 against GND
    SingleAin0 = 0b100,
    /// AIN1 against GND
    SingleAin1 = 0b101,
    /// AIN2 against GND
    SingleAin2 = 0b110,
    /// AIN3 against GND
    SingleAin3 = 0b111,
}

impl Mux {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0b000 => Mux::DiffAin0Ain1,
            0b001 => Mux::DiffAin0Ain3,
            0b010 => Mux::DiffAin1Ain3,
            0b011 => Mux::DiffAin2Ain3,
            0b100 => Mux::SingleAin0,
            0b101 => Mux::SingleAin1,
            0b110 => Mux::SingleAin2,
            _ => Mux::SingleAin3,
        }
    }
}

/// Operating mode (MODE bit 8)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Converts back to back, the conversion register always holds the latest result
    Continuous = 0,
    /// Power-down single-shot mode, default on start-up
    #[default]
    SingleShot = 1,
}

/// Data rate in samples per second (DR bits 7:5)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataRate {
    Sps8 = 0b000,
    Sps16 = 0b001,
    Sps32 = 0b010,
    Sps64 = 0b011,
    #[default]
    Sps128 = 0b100,
    Sps250 = 0b101,
    Sps475 = 0b110,
    Sps860 = 0b111,
}

impl DataRate {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0b000 => DataRate::Sps8,
            0b001 => DataRate::Sps16,
            0b010 => DataRate::Sps32,
            0b011 => DataRate::Sps64,
            0b100 => DataRate::Sps128,
            0b101 => DataRate::Sps250,
            0b110 => DataRate::Sps475,
            _ => DataRate::Sps860,
        }
    }
}

/// Comparator queue (COMP_QUE bits 1:0)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ComparatorQueue {
    /// Assert ALERT/RDY after one conversion
    One = 0b00,
    /// Assert after two conversions
    Two = 0b01,
    /// Assert after four conversions
    Four = 0b10,
    /// Comparator disabled, ALERT/RDY high impedance
    #[default]
    Disabled = 0b11,
}

impl ComparatorQueue {
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => ComparatorQueue::One,
            0b01 => ComparatorQueue::Two,
            0b10 => ComparatorQueue::Four,
            _ => ComparatorQueue::Disabled,
        }
    }
}

/// Config register (0x01)
///
/// ```
/// use ads1115::config::Config;
/// use ads1115::{ComparatorQueue, DataRate, Gain, Mode, Mux};
///
/// let config = Config::default();
/// assert_eq!(0x8583, config.to_reg());
///
/// let default = Config {
///     start_conversion: true,
///     mux: Mux::DiffAin0Ain1,
///     gain: Gain::Two,
///     mode: Mode::SingleShot,
///     data_rate: DataRate::Sps128,
///     comparator_window: false,
///     comparator_active_high: false,
///     comparator_latch: false,
///     comparator_queue: ComparatorQueue::Disabled,
/// };
/// assert_eq!(default, config);
///
/// assert_eq!(Config::from_reg(0x8583), config);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// OS bit. Writing it starts a single conversion, reading it back
    /// reports that no conversion is in progress.
    pub start_conversion: bool,
    /// Input pair
    pub mux: Mux,
    /// Full-scale range
    pub gain: Gain,
    /// Continuous or single-shot
    pub mode: Mode,
    /// Samples per second
    pub data_rate: DataRate,
    /// Window comparator instead of traditional
    pub comparator_window: bool,
    /// ALERT/RDY polarity
    pub comparator_active_high: bool,
    /// Latching comparator
    pub comparator_latch: bool,
    /// Comparator queue and disable
    pub comparator_queue: ComparatorQueue,
}

impl Config {
    /// Continuous differential conversion of AIN0 - AIN1 at 128 SPS with the
    /// comparator disabled.
    pub fn differential(gain: Gain) -> Self {
        Self {
            start_conversion: true,
            mux: Mux::DiffAin0Ain1,
            gain,
            mode: Mode::Continuous,
            data_rate: DataRate::Sps128,
            comparator_window: false,
            comparator_active_high: false,
            comparator_latch: false,
            comparator_queue: ComparatorQueue::Disabled,
        }
    }

    pub fn to_reg(self) -> u16 {
        let os = (self.start_conversion as u16) << 15;
        let mux = (self.mux as u16) << 12;
        let pga = (self.gain as u16) << 9;
        let mode = (self.mode as u16) << 8;
        let dr = (self.data_rate as u16) << 5;
        let comp_mode = (self.comparator_window as u16) << 4;
        let comp_pol = (self.comparator_active_high as u16) << 3;
        let comp_lat = (self.comparator_latch as u16) << 2;
        let comp_que = self.comparator_queue as u16;

        os | mux | pga | mode | dr | comp_mode | comp_pol | comp_lat | comp_que
    }

    pub fn from_reg(value: u16) -> Self {
        let mode = match (value >> 8) & 0b1 {
            0 => Mode::Continuous,
            _ => Mode::SingleShot,
        };

        Self {
            start_conversion: value & (1 << 15) != 0,
            mux: Mux::from_bits(value >> 12),
            gain: Gain::from_bits(value >> 9),
            mode,
            data_rate: DataRate::from_bits(value >> 5),
            comparator_window: value & (1 << 4) != 0,
            comparator_active_high: value & (1 << 3) != 0,
            comparator_latch: value & (1 << 2) != 0,
            comparator_queue: ComparatorQueue::from_bits(value),
        }
    }

    /// High byte first, the order the register is transmitted in.
    pub fn to_bytes(self) -> [u8; 2] {
        self.to_reg().to_be_bytes()
    }
}

impl Default for Config {
    /// Power-on reset value `0x8583`
    fn default() -> Self {
        Self {
            start_conversion: true,
            mux: Mux::default(),
            gain: Gain::Two,
            mode: Mode::default(),
            data_rate: DataRate::default(),
            comparator_window: false,
            comparator_active_high: false,
            comparator_latch: false,
            comparator_queue: ComparatorQueue::default(),
        }
    }
}
