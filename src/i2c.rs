//! Register access over I2C.

use crate::consts;
use crate::device::Pca95xx;
use crate::error::{Error, Result};
use core::fmt;
use embedded_hal::i2c::{Error as _, I2c};
use log::trace;

/// Device registers, identified by their command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Input Port (read only): the pin levels, after polarity inversion.
    InputPort,
    /// Output Port: the output latch.
    OutputPort,
    /// Polarity Inversion: a set bit inverts the reported input level.
    PolarityInversion,
    /// Configuration: a set bit makes the pin an input.
    Configuration,
}

impl Register {
    /// The command byte selecting this register.
    #[inline]
    pub const fn addr(self) -> u8 {
        match self {
            Register::InputPort => consts::reg::INPUT_PORT,
            Register::OutputPort => consts::reg::OUTPUT_PORT,
            Register::PolarityInversion => consts::reg::POLARITY_INVERSION,
            Register::Configuration => consts::reg::CONFIGURATION,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::InputPort => "Input Port",
            Register::OutputPort => "Output Port",
            Register::PolarityInversion => "Polarity Inversion",
            Register::Configuration => "Configuration",
        };
        write!(f, "{} (0x{:02X})", name, self.addr())
    }
}

impl<I2C: I2c> Pca95xx<I2C> {
    // --- Register I/O primitives ---

    #[inline]
    fn checked_address(&self) -> Result<u8> {
        if self.address == consts::ADDRESS_INVALID {
            trace!("Register access refused: invalid address");
            Err(Error::InvalidAddress)
        } else {
            Ok(self.address)
        }
    }

    /// Reads `buffer.len()` bytes starting at `start`, using a repeated start
    /// between the command byte and the data.
    pub(crate) fn read_register_buffer(
        &mut self,
        start: Register,
        buffer: &mut [u8],
    ) -> Result<()> {
        let address = self.checked_address()?;
        trace!(
            "read {} byte(s) @ {} from 0x{:02X}",
            buffer.len(),
            start,
            address
        );
        self.i2c
            .write_read(address, &[start.addr()], buffer)
            .map_err(|e| Error::Read {
                address,
                register: start,
                kind: e.kind(),
            })?;
        trace!("    data: {:02X?}", buffer);
        Ok(())
    }

    /// Writes the command byte for `start` followed by `data` in one
    /// transaction. Empty `data` only moves the command byte.
    pub(crate) fn write_register_buffer(
        &mut self,
        start: Register,
        data: &[u8],
    ) -> Result<()> {
        let address = self.checked_address()?;
        if data.len() > consts::reg::COUNT {
            return Err(Error::OperationTooLarge {
                max: consts::reg::COUNT,
                actual: data.len(),
            });
        }

        let mut out_buf = [0u8; consts::reg::COUNT + 1];
        out_buf[0] = start.addr();
        out_buf[1..=data.len()].copy_from_slice(data);
        trace!("write {:02X?} @ {} to 0x{:02X}", data, start, address);

        self.i2c
            .write(address, &out_buf[..=data.len()])
            .map_err(|e| Error::Write {
                address,
                register: start,
                kind: e.kind(),
            })
    }

    pub(crate) fn read_register(&mut self, register: Register) -> Result<u8> {
        let mut value = [0u8; 1];
        let result = self.read_register_buffer(register, &mut value);
        self.apply_input_errata(register);
        result.map(|()| value[0])
    }

    pub(crate) fn write_register(&mut self, register: Register, value: u8) -> Result<()> {
        let result = self.write_register_buffer(register, &[value]);
        self.apply_input_errata(register);
        result
    }

    /// PCA9554 interrupt errata: after accessing the Input Port the command
    /// byte must be changed to something other than 0x00. The outcome of
    /// this write is ignored.
    fn apply_input_errata(&mut self, register: Register) {
        if register != Register::InputPort || !self.variant.profile().input_read_errata {
            return;
        }
        if let Err(e) = self.write_register_buffer(Register::OutputPort, &[]) {
            trace!("Errata command byte write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_offsets() {
        assert_eq!(Register::InputPort.addr(), 0x00);
        assert_eq!(Register::OutputPort.addr(), 0x01);
        assert_eq!(Register::PolarityInversion.addr(), 0x02);
        assert_eq!(Register::Configuration.addr(), 0x03);
    }

    #[test]
    fn test_buffer_write_sends_command_byte_first() {
        use crate::device::Variant;
        use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

        let expectations = [
            Transaction::write(0x20, std::vec![0x02, 0xAA, 0x55]),
            Transaction::write_read(0x20, std::vec![0x00], std::vec![0x12, 0x34]),
        ];
        let mut dev = Pca95xx::new(Mock::new(&expectations), Variant::Pca9534);

        dev.write_register_buffer(Register::PolarityInversion, &[0xAA, 0x55])
            .unwrap();
        let mut buf = [0u8; 2];
        dev.read_register_buffer(Register::InputPort, &mut buf)
            .unwrap();
        assert_eq!(buf, [0x12, 0x34]);
        assert_eq!(
            dev.write_register_buffer(Register::OutputPort, &[0; 5]),
            Err(Error::OperationTooLarge { max: 4, actual: 5 })
        );
        dev.release().done();
    }

    #[test]
    fn test_register_display() {
        assert_eq!(
            std::format!("{}", Register::Configuration),
            "Configuration (0x03)"
        );
    }
}
