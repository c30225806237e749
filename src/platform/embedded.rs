use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;

use crate::settings::GAIN_SETTING;

pub type BusType = Twim<'static, TWISPI0>;

/// The gain is fixed at build time on the target
pub fn gain_setting() -> &'static str {
    GAIN_SETTING
}
