//! # pca95xx
//!
//! A driver for the PCA9534, PCA9536, PCA9537, PCA9554, PCA9556 and PCA9557
//! family of 4/8-bit I²C GPIO expanders (and their TCA95xx equivalents).
//!
//! The driver works with any bus implementing the `embedded-hal` 1.0
//! [`I2c`](embedded_hal::i2c::I2c) trait and does not allocate.
//!
//! ## Features
//!
//! *   Per-variant defaults for address and pin count (`Variant::profile`).
//! *   Address and pin count overrides with a connectivity probe (`begin`, `is_connected`).
//! *   Pin direction (`set_pin_mode`, `pin_mode`).
//! *   Output latch (`write_pin`, `output_level`).
//! *   Input levels (`read_pin`, `read_input_register`).
//! *   Input polarity inversion (`invert`, `revert`, `set_inversion`, `polarity`).
//! *   PCA9554 interrupt errata workaround, applied automatically.
//!
//! ## Chip Support
//!
//! | Variant | Pins | Addresses |
//! |---|---|---|
//! | PCA9534 | 8 | 0x20-0x27 |
//! | PCA9536 | 4 | 0x41 |
//! | PCA9537 | 4 | 0x49 |
//! | PCA9554 | 8 | 0x20-0x27 |
//! | PCA9556 | 8 | 0x18-0x1F |
//! | PCA9557 | 8 | 0x18-0x1F |
//!
//! ## Basic Usage
//!
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use pca95xx::{Config, Pca95xx, PinLevel, PinMode, Result, Variant};
//!
//! fn blink<I2C: I2c>(i2c: I2C) -> Result<()> {
//!     let mut expander = Pca95xx::new(i2c, Variant::Pca9554);
//!     if !expander.begin(Config::default().address(0x21))? {
//!         // Nothing acknowledged at 0x21
//!         return Ok(());
//!     }
//!
//!     expander.set_pin_mode(0, PinMode::Output)?;
//!     expander.write_pin(0, PinLevel::High)?;
//!
//!     expander.set_pin_mode(3, PinMode::Input)?;
//!     let level = expander.read_pin(3)?;
//!     log::info!("pin 3 is {:?}", level);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Pin writes are read-modify-write sequences of two bus transactions. They
//! are not atomic with respect to other masters or other handles to the same
//! chip; callers sharing a device must serialise access themselves.
//!
//! ## Logging
//!
//! Register traffic is traced through the [`log`] facade. Nothing is printed
//! unless the application installs a logger.

#![cfg_attr(not(test), no_std)]

mod consts;
mod device;
mod error;
pub mod gpio;
pub mod i2c;

pub use consts::ADDRESS_INVALID;
pub use device::{Config, Pca95xx, Variant, VariantProfile};
pub use error::{Error, Result};
pub use gpio::{PinLevel, PinMode, Polarity};
pub use i2c::Register;
