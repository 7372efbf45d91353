//! Internal constants: register offsets and I2C addresses.

/// Sentinel meaning "no device address configured".
pub const ADDRESS_INVALID: u8 = 0xFF;

// --- Register offsets (command byte values) ---
pub mod reg {
    pub const INPUT_PORT: u8 = 0x00;
    pub const OUTPUT_PORT: u8 = 0x01;
    pub const POLARITY_INVERSION: u8 = 0x02;
    pub const CONFIGURATION: u8 = 0x03;

    /// Number of registers on the device. Bounds buffer transfers.
    pub const COUNT: usize = 4;
}

// --- Device addresses (7-bit) ---
pub mod addr {
    // PCA9534 / PCA9554: A2..A0 select 0x20-0x27
    pub const PCA9534_BASE: u8 = 0x20;
    pub const PCA9534_LAST: u8 = 0x27;
    pub const PCA9554_BASE: u8 = 0x20;
    pub const PCA9554_LAST: u8 = 0x27;

    // Fixed addresses, no address pins
    pub const PCA9536: u8 = 0x41;
    pub const PCA9537: u8 = 0x49;

    // PCA9556 / PCA9557: A2..A0 select 0x18-0x1F
    pub const PCA9556_BASE: u8 = 0x18;
    pub const PCA9556_LAST: u8 = 0x1F;
    pub const PCA9557_BASE: u8 = 0x18;
    pub const PCA9557_LAST: u8 = 0x1F;
}

/// Widest supported port. All registers are one byte.
pub const MAX_GPIO_COUNT: u8 = 8;
