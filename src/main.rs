#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

use embassy_embedded_hal::shared_bus::asynch::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use static_cell::StaticCell;
#[cfg(target_os = "none")]
use {defmt_rtt as _, panic_probe as _};

#[allow(unused_imports)]
#[cfg(target_os = "none")]
use defmt::{debug, error, info, warn};
#[allow(unused_imports)]
#[cfg(not(target_os = "none"))]
use log::{debug, error, info, warn};

use psig_monitor::platform::{self, AdcType, BusType, SharedBus};
use psig_monitor::report::Banner;
use psig_monitor::sampler;
use psig_monitor::settings::Settings;

#[cfg(target_os = "none")]
embassy_nrf::bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => embassy_nrf::twim::InterruptHandler<embassy_nrf::peripherals::TWISPI0>;
});

static BUS: StaticCell<SharedBus> = StaticCell::new();

#[embassy_executor::task]
async fn sampler_task(adc: AdcType, settings: Settings) -> ! {
    sampler::run(adc, settings).await
}

fn load_settings(gain: &str) -> Settings {
    match Settings::from_gain_setting(gain) {
        Ok(settings) => settings,
        Err(err) => {
            error!("{}", err);
            panic!("invalid gain setting");
        }
    }
}

async fn bring_up(spawner: Spawner, bus: BusType, settings: Settings) {
    let bus = BUS.init(Mutex::new(bus));

    let adc = sampler::start(I2cDevice::new(bus), &settings)
        .await
        .expect("ADS1115 bring-up failed");

    // let the first conversion finish
    Timer::after(settings.settle_delay).await;

    spawner.spawn(sampler_task(adc, settings)).unwrap();
}

#[cfg(target_os = "none")]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    use embassy_nrf::twim::{self, Twim};

    let settings = load_settings(platform::gain_setting());
    info!("{}", Banner(&settings));

    let p = embassy_nrf::init(Default::default());

    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K100;
    let twim = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config);

    bring_up(spawner, twim, settings).await;
}

#[cfg(not(target_os = "none"))]
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = load_settings(&platform::gain_setting());
    info!("{}", Banner(&settings));

    bring_up(spawner, platform::SimulatedAds1115::new(), settings).await;
}
