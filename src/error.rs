use crate::i2c::Register;
use embedded_hal::i2c::ErrorKind;
use thiserror::Error;

/// Errors that can occur when using a PCA95xx expander.
///
/// Bus failures carry the [`ErrorKind`] reported by the `embedded-hal`
/// transport, so the error type does not depend on the concrete bus.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pin number is not present on this device.
    #[error("GPIO pin {pin} is undefined on this device ({gpio_count} pins available)")]
    UndefinedPin {
        /// The invalid pin number that was specified.
        pin: u8,
        /// Number of GPIOs the driver is configured for.
        gpio_count: u8,
    },
    /// No usable device address is configured.
    #[error("Device address is not set")]
    InvalidAddress,
    /// The read transaction was not acknowledged or failed on the bus.
    #[error("I2C read of {register} at address 0x{address:02X} failed: {kind}")]
    Read {
        /// The I2C address being accessed.
        address: u8,
        /// The register that was being read.
        register: Register,
        /// Failure reported by the bus.
        kind: ErrorKind,
    },
    /// The write transaction was not acknowledged or failed on the bus.
    #[error("I2C write of {register} at address 0x{address:02X} failed: {kind}")]
    Write {
        /// The I2C address being accessed.
        address: u8,
        /// The register that was being written.
        register: Register,
        /// Failure reported by the bus.
        kind: ErrorKind,
    },
    /// GPIO count override outside the range a one-byte port can hold.
    #[error("GPIO count {0} out of range (1-8)")]
    GpioCountOutOfRange(u8),
    /// Requested transfer exceeds the device's register file.
    #[error("Requested operation size is too large (max {max}, got {actual})")]
    OperationTooLarge {
        /// Maximum allowed size for this operation.
        max: usize,
        /// Actual size requested.
        actual: usize,
    },
}

/// Result type alias for PCA95xx operations.
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn undefined_pin(pin: u8, gpio_count: u8) -> Error {
    Error::UndefinedPin { pin, gpio_count }
}
