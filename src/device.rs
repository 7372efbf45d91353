//! Device variants, configuration and the driver handle.

use crate::consts;
use crate::error::{Error, Result};
use core::fmt;
use embedded_hal::i2c::I2c;
use log::{debug, trace, warn};

/// Supported expander models.
///
/// The TCA95xx parts are register compatible with their PCA95xx namesakes and
/// use the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 8-bit, interrupt output, addresses 0x20-0x27.
    Pca9534,
    /// 4-bit, fixed address 0x41.
    Pca9536,
    /// 4-bit with INT and RESET, fixed address 0x49.
    Pca9537,
    /// 8-bit, interrupt output, addresses 0x20-0x27.
    #[default]
    Pca9554,
    /// 8-bit with RESET, addresses 0x18-0x1F.
    Pca9556,
    /// 8-bit with RESET, addresses 0x18-0x1F.
    Pca9557,
}

/// Static properties of a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    /// Address used when no override is given.
    pub default_address: u8,
    /// Lowest address selectable with the address pins.
    pub first_address: u8,
    /// Highest address selectable with the address pins.
    pub last_address: u8,
    /// Number of GPIO pins on the port (4 or 8).
    pub gpio_count: u8,
    /// The command byte must be moved off the Input Port register after each
    /// access, otherwise the INT output can misbehave.
    pub input_read_errata: bool,
}

impl VariantProfile {
    /// Returns true if `address` can be strapped on this variant.
    #[inline]
    pub fn supports_address(&self, address: u8) -> bool {
        (self.first_address..=self.last_address).contains(&address)
    }
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Variant; 6] = [
        Variant::Pca9534,
        Variant::Pca9536,
        Variant::Pca9537,
        Variant::Pca9554,
        Variant::Pca9556,
        Variant::Pca9557,
    ];

    /// Looks up the static profile of this variant.
    pub const fn profile(self) -> VariantProfile {
        match self {
            Variant::Pca9534 => VariantProfile {
                default_address: consts::addr::PCA9534_BASE,
                first_address: consts::addr::PCA9534_BASE,
                last_address: consts::addr::PCA9534_LAST,
                gpio_count: 8,
                input_read_errata: false,
            },
            Variant::Pca9536 => VariantProfile {
                default_address: consts::addr::PCA9536,
                first_address: consts::addr::PCA9536,
                last_address: consts::addr::PCA9536,
                gpio_count: 4,
                input_read_errata: false,
            },
            Variant::Pca9537 => VariantProfile {
                default_address: consts::addr::PCA9537,
                first_address: consts::addr::PCA9537,
                last_address: consts::addr::PCA9537,
                gpio_count: 4,
                input_read_errata: false,
            },
            Variant::Pca9554 => VariantProfile {
                default_address: consts::addr::PCA9554_BASE,
                first_address: consts::addr::PCA9554_BASE,
                last_address: consts::addr::PCA9554_LAST,
                gpio_count: 8,
                input_read_errata: true,
            },
            Variant::Pca9556 => VariantProfile {
                default_address: consts::addr::PCA9556_BASE,
                first_address: consts::addr::PCA9556_BASE,
                last_address: consts::addr::PCA9556_LAST,
                gpio_count: 8,
                input_read_errata: false,
            },
            Variant::Pca9557 => VariantProfile {
                default_address: consts::addr::PCA9557_BASE,
                first_address: consts::addr::PCA9557_BASE,
                last_address: consts::addr::PCA9557_LAST,
                gpio_count: 8,
                input_read_errata: false,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Pca9534 => "PCA9534",
            Variant::Pca9536 => "PCA9536",
            Variant::Pca9537 => "PCA9537",
            Variant::Pca9554 => "PCA9554",
            Variant::Pca9556 => "PCA9556",
            Variant::Pca9557 => "PCA9557",
        };
        f.write_str(name)
    }
}

/// Overrides applied by [`Pca95xx::begin`].
///
/// `None` keeps the default from the variant profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// 7-bit I2C address of the device.
    pub address: Option<u8>,
    /// Number of GPIO pins to expose (1-8).
    pub gpio_count: Option<u8>,
}

impl Config {
    /// Sets the address override.
    pub fn address(mut self, address: u8) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the GPIO count override.
    pub fn gpio_count(mut self, gpio_count: u8) -> Self {
        self.gpio_count = Some(gpio_count);
        self
    }
}

/// A PCA95xx expander on an I2C bus.
///
/// All operations are blocking and take `&mut self`. Read-modify-write
/// operations use two bus transactions and are not atomic: if another bus
/// master, or another handle to the same chip, writes the register between
/// them, that write is lost. Serialising access is the caller's job.
#[derive(Debug)]
pub struct Pca95xx<I2C> {
    pub(crate) i2c: I2C,
    pub(crate) address: u8,
    pub(crate) gpio_count: u8,
    pub(crate) variant: Variant,
}

impl<I2C> Pca95xx<I2C> {
    /// Creates a driver with the address and pin count defaults of `variant`.
    ///
    /// No bus traffic happens until the first operation.
    pub fn new(i2c: I2C, variant: Variant) -> Self {
        let profile = variant.profile();
        Pca95xx {
            i2c,
            address: profile.default_address,
            gpio_count: profile.gpio_count,
            variant,
        }
    }

    /// The configured 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// The number of pins accepted by pin operations.
    pub fn gpio_count(&self) -> u8 {
        self.gpio_count
    }

    /// The chip model this driver was created for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Swaps in a new bus handle and returns the previous one.
    pub fn replace_bus(&mut self, i2c: I2C) -> I2C {
        core::mem::replace(&mut self.i2c, i2c)
    }

    /// Destroys the driver and returns the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Pca95xx<I2C> {
    /// Applies `config` and probes the device.
    ///
    /// Returns `Ok(true)` if the device acknowledged its address. An invalid
    /// GPIO count is rejected before anything is changed.
    pub fn begin(&mut self, config: Config) -> Result<bool> {
        if let Some(count) = config.gpio_count {
            if count == 0 || count > consts::MAX_GPIO_COUNT {
                return Err(Error::GpioCountOutOfRange(count));
            }
        }

        if let Some(address) = config.address {
            if !self.variant.profile().supports_address(address) {
                warn!(
                    "Address 0x{:02X} is outside the documented range for {}",
                    address, self.variant
                );
            }
            self.address = address;
        }
        if let Some(count) = config.gpio_count {
            self.gpio_count = count;
        }
        debug!(
            "{} configured at 0x{:02X} with {} GPIOs",
            self.variant, self.address, self.gpio_count
        );

        Ok(self.is_connected())
    }

    /// Returns true if the device acknowledges a zero-length write.
    /// Always false while the address is [`ADDRESS_INVALID`](crate::ADDRESS_INVALID).
    pub fn is_connected(&mut self) -> bool {
        if self.address == consts::ADDRESS_INVALID {
            return false;
        }
        match self.i2c.write(self.address, &[]) {
            Ok(()) => true,
            Err(e) => {
                trace!("No ACK from 0x{:02X}: {:?}", self.address, e);
                false
            }
        }
    }

    #[inline]
    pub(crate) fn check_pin(&self, pin: u8) -> Result<()> {
        if pin >= self.gpio_count {
            Err(crate::error::undefined_pin(pin, self.gpio_count))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_is_pca9554() {
        assert_eq!(Variant::default(), Variant::Pca9554);
    }

    #[test]
    fn test_profiles_match_datasheet_addresses() {
        let p = Variant::Pca9534.profile();
        assert_eq!((p.default_address, p.gpio_count), (0x20, 8));
        assert!(p.supports_address(0x27));
        assert!(!p.supports_address(0x28));

        let p = Variant::Pca9536.profile();
        assert_eq!((p.default_address, p.gpio_count), (0x41, 4));
        assert!(!p.supports_address(0x42));

        let p = Variant::Pca9537.profile();
        assert_eq!((p.default_address, p.gpio_count), (0x49, 4));

        let p = Variant::Pca9556.profile();
        assert_eq!((p.default_address, p.gpio_count), (0x18, 8));
        assert!(p.supports_address(0x1F));
        assert!(!p.supports_address(0x20));

        let p = Variant::Pca9557.profile();
        assert_eq!((p.first_address, p.last_address), (0x18, 0x1F));
    }

    #[test]
    fn test_only_pca9554_has_errata() {
        for v in Variant::ALL {
            assert_eq!(
                v.profile().input_read_errata,
                v == Variant::Pca9554,
                "unexpected errata flag for {}",
                v
            );
        }
    }

    #[test]
    fn test_config_builder() {
        let c = Config::default().address(0x23).gpio_count(6);
        assert_eq!(c.address, Some(0x23));
        assert_eq!(c.gpio_count, Some(6));
        assert_eq!(Config::default().address, None);
    }

    #[test]
    fn test_new_uses_variant_defaults() {
        let dev = Pca95xx::new((), Variant::Pca9537);
        assert_eq!(dev.address(), 0x49);
        assert_eq!(dev.gpio_count(), 4);
        assert_eq!(dev.variant(), Variant::Pca9537);
    }

    #[test]
    fn test_replace_bus_returns_previous() {
        let mut dev = Pca95xx::new(1u8, Variant::Pca9534);
        assert_eq!(dev.replace_bus(2), 1);
        assert_eq!(dev.release(), 2);
    }
}
