use core::ops::RangeInclusive;

use embedded_hal_async::i2c::I2c;
use heapless::Vec;

/// 7-bit addresses outside the reserved blocks
pub const SCAN_RANGE: RangeInclusive<u8> = 0x08..=0x77;

pub const MAX_DEVICES: usize = 112;

/// Probes every address with a one byte read and returns the ones that acknowledged.
pub async fn scan<B: I2c>(bus: &mut B) -> Vec<u8, MAX_DEVICES> {
    let mut found = Vec::new();
    let mut buf = [0_u8; 1];

    for address in SCAN_RANGE {
        if bus.read(address, &mut buf).await.is_ok() {
            // cannot overflow, the range holds exactly MAX_DEVICES addresses
            let _ = found.push(address);
        }
    }

    found
}

/// Bus expectations for a full scan where only `present` acknowledge.
#[cfg(test)]
pub(crate) fn probe_expectations(present: &[u8]) -> std::vec::Vec<embedded_hal_mock::eh1::i2c::Transaction> {
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

    SCAN_RANGE
        .map(|address| {
            let probe = I2cTransaction::read(address, std::vec![0]);
            if present.contains(&address) {
                probe
            } else {
                probe.with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))
            }
        })
        .collect()
}
