//! Pin-level GPIO operations.

use crate::device::Pca95xx;
use crate::error::Result;
use crate::i2c::Register;
use embedded_hal::i2c::I2c;
use log::debug;

/// Pin direction. On these chips a set Configuration bit means input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

impl PinLevel {
    #[inline]
    pub(crate) fn from_bit(set: bool) -> Self {
        if set {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        level == PinLevel::High
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> PinLevel {
        PinLevel::from_bit(high)
    }
}

/// Read polarity of an input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    Normal,
    Inverted,
}

#[inline]
fn mask(pin: u8) -> u8 {
    1u8 << pin
}

#[inline]
fn with_bit(value: u8, pin: u8, set: bool) -> u8 {
    let cleared = value & !mask(pin);
    if set {
        cleared | mask(pin)
    } else {
        cleared
    }
}

impl<I2C: I2c> Pca95xx<I2C> {
    /// Reads `register`, replaces the bit for `pin` and writes the whole
    /// register back.
    fn update_pin_bit(&mut self, register: Register, pin: u8, set: bool) -> Result<()> {
        self.check_pin(pin)?;
        let current = self.read_register(register)?;
        let new_val = with_bit(current, pin, set);
        debug!(
            "{} pin {}: 0x{:02X} -> 0x{:02X}",
            register, pin, current, new_val
        );
        self.write_register(register, new_val)
    }

    fn read_pin_bit(&mut self, register: Register, pin: u8) -> Result<bool> {
        self.check_pin(pin)?;
        let value = self.read_register(register)?;
        Ok(value & mask(pin) != 0)
    }

    /// Sets the direction of a pin.
    pub fn set_pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<()> {
        self.update_pin_bit(Register::Configuration, pin, mode == PinMode::Input)
    }

    /// Reads the configured direction of a pin.
    pub fn pin_mode(&mut self, pin: u8) -> Result<PinMode> {
        Ok(if self.read_pin_bit(Register::Configuration, pin)? {
            PinMode::Input
        } else {
            PinMode::Output
        })
    }

    /// Sets the output latch of a pin. Takes effect on the pin only while it
    /// is configured as an output.
    pub fn write_pin(&mut self, pin: u8, level: PinLevel) -> Result<()> {
        self.update_pin_bit(Register::OutputPort, pin, level == PinLevel::High)
    }

    /// Reads back the output latch of a pin (not the pin level).
    pub fn output_level(&mut self, pin: u8) -> Result<PinLevel> {
        self.read_pin_bit(Register::OutputPort, pin)
            .map(PinLevel::from_bit)
    }

    /// Reads the whole Input Port register. The upper four bits carry no pins
    /// on 4-bit parts and are returned unmasked.
    pub fn read_input_register(&mut self) -> Result<u8> {
        self.read_register(Register::InputPort)
    }

    /// Reads the input level of a pin, after polarity inversion.
    pub fn read_pin(&mut self, pin: u8) -> Result<PinLevel> {
        self.read_pin_bit(Register::InputPort, pin)
            .map(PinLevel::from_bit)
    }

    /// Like [`read_input_register`](Self::read_input_register), but returns 0
    /// on any error. The error is discarded; a failed read is indistinguishable
    /// from all pins low.
    pub fn read_input_register_lossy(&mut self) -> u8 {
        self.read_input_register().unwrap_or(0)
    }

    /// Like [`read_pin`](Self::read_pin), but returns 0 or 1, and 0 on any
    /// error. The error is discarded.
    pub fn read_pin_lossy(&mut self, pin: u8) -> u8 {
        match self.read_pin(pin) {
            Ok(PinLevel::High) => 1,
            _ => 0,
        }
    }

    /// Enables (`true`) or disables input polarity inversion for a pin.
    pub fn set_inversion(&mut self, pin: u8, invert: bool) -> Result<()> {
        self.update_pin_bit(Register::PolarityInversion, pin, invert)
    }

    /// Inverts the reported input level of a pin.
    pub fn invert(&mut self, pin: u8) -> Result<()> {
        self.set_inversion(pin, true)
    }

    /// Restores normal input polarity for a pin.
    pub fn revert(&mut self, pin: u8) -> Result<()> {
        self.set_inversion(pin, false)
    }

    /// Reads the input polarity setting of a pin.
    pub fn polarity(&mut self, pin: u8) -> Result<Polarity> {
        Ok(if self.read_pin_bit(Register::PolarityInversion, pin)? {
            Polarity::Inverted
        } else {
            Polarity::Normal
        })
    }
}
