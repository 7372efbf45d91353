// Shared helpers for the mock-bus tests.
#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
use pca95xx::{Pca95xx, Variant};

pub const NACK: ErrorKind = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a driver on a mock bus that expects exactly `expectations`.
pub fn mock_device(variant: Variant, expectations: &[Transaction]) -> Pca95xx<Mock> {
    init_logging();
    Pca95xx::new(Mock::new(expectations), variant)
}

/// Releases the bus and checks that every expected transaction happened.
pub fn finish(device: Pca95xx<Mock>) {
    let mut bus = device.release();
    bus.done();
}
