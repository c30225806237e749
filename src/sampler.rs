#[allow(unused_imports)]
#[cfg(target_os = "none")]
use defmt::{debug, error, info, warn};
use embassy_time::Timer;
use embedded_hal_async::i2c::I2c;
#[allow(unused_imports)]
#[cfg(not(target_os = "none"))]
use log::{debug, error, info, warn};

use ads1115::config::Register;
use ads1115::{Ads1115, Ads1115Error, Reading};

use crate::error::StartupError;
use crate::pressure::Transducer;
use crate::report::{ConfigWritten, DeviceList};
use crate::scan::scan;
use crate::settings::Settings;

/// One converted conversion result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub raw: i16,
    pub millivolts: f32,
    /// psig
    pub pressure: f32,
}

impl Sample {
    pub fn convert(reading: Reading, transducer: &Transducer) -> Self {
        let millivolts = reading.millivolts();
        Self {
            raw: reading.raw,
            millivolts,
            pressure: transducer.pressure(millivolts),
        }
    }
}

/// Scans the bus, checks the converter is there and writes its configuration.
///
/// Every bus access is a single transaction, so when `bus` is a shared bus
/// device the lock is released again on both the success and the error path.
pub async fn start<B: I2c>(mut bus: B, settings: &Settings) -> Result<Ads1115<B>, StartupError<B::Error>> {
    let devices = scan(&mut bus).await;
    info!("{}", DeviceList(&devices));

    if !devices.contains(&settings.address) {
        error!("ADS1115 not detected on the I2C bus!");
        return Err(StartupError::DeviceAbsent(settings.address));
    }

    let mut adc = Ads1115::new(bus, settings.address);
    if let Err(err) = adc.configure(settings.config).await {
        #[cfg(target_os = "none")]
        error!("I2C error during configuration: {}", defmt::Debug2Format(&err));
        #[cfg(not(target_os = "none"))]
        error!("I2C error during configuration: {}", err);
        return Err(err.into());
    }

    info!(
        "{}",
        ConfigWritten {
            pointer: Register::config as u8,
            bytes: settings.config.to_bytes(),
        }
    );
    Ok(adc)
}

/// Reads the conversion register once and converts it to pressure.
pub async fn sample_once<B: I2c>(
    adc: &mut Ads1115<B>,
    transducer: &Transducer,
) -> Result<Sample, Ads1115Error<B::Error>> {
    let reading = adc.read().await?;
    Ok(Sample::convert(reading, transducer))
}

/// Read, convert, report, wait. Failed reads are logged and retried after
/// `retry_delay`, forever.
pub async fn run<B: I2c>(mut adc: Ads1115<B>, settings: Settings) -> ! {
    loop {
        match sample_once(&mut adc, &settings.transducer).await {
            Ok(sample) => {
                info!("{}", sample);
                Timer::after(settings.sample_interval).await;
            }
            Err(err) => {
                #[cfg(target_os = "none")]
                warn!("I2C error during read: {}", defmt::Debug2Format(&err));
                #[cfg(not(target_os = "none"))]
                warn!("I2C error during read: {}", err);
                Timer::after(settings.retry_delay).await;
            }
        }
    }
}
