use core::convert::TryFrom;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::LibraryError;

/// The AMG88xx configuration registers.
///
/// These are the 8-bit registers at addresses 0x00 through 0x0F. The pixel array lives in a
/// separate address range starting at [`PIXEL_BASE_OFFSET`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive)]
#[repr(u8)]
pub enum Register {
    /// Operating mode (normal, sleep, stand-by).
    PowerControl = 0x00,

    /// Software reset. Write-only.
    Reset = 0x01,

    /// Frame rate selection, bit 0 only.
    FrameRate = 0x02,

    /// Interrupt enable (bit 0) and interrupt mode (bit 1).
    InterruptControl = 0x03,

    /// Interrupt and overflow flags. Read-only.
    Status = 0x04,

    /// Write-1-to-clear counterpart of the status register.
    StatusClear = 0x05,

    /// Moving average mode, bit 5 only.
    Average = 0x07,

    /// Upper interrupt level, low byte.
    InterruptLevelUpperLow = 0x08,

    /// Upper interrupt level, high nibble.
    InterruptLevelUpperHigh = 0x09,

    /// Lower interrupt level, low byte.
    InterruptLevelLowerLow = 0x0A,

    /// Lower interrupt level, high nibble.
    InterruptLevelLowerHigh = 0x0B,

    /// Interrupt hysteresis level, low byte.
    InterruptHysteresisLow = 0x0C,

    /// Interrupt hysteresis level, high nibble.
    InterruptHysteresisHigh = 0x0D,

    /// Thermistor value, low byte. Read-only.
    ThermistorLow = 0x0E,

    /// Thermistor value, high nibble. Read-only.
    ThermistorHigh = 0x0F,
}

impl Register {
    /// The address of this register in the sensor's memory map.
    pub fn address(self) -> u8 {
        self.into()
    }

    /// A bit mask of which bits can be modified by the controller.
    ///
    /// Read-only registers have a mask of 0. When modifying a register, the reserved bits must
    /// keep their current values, which the read-modify-write cycle in the driver takes care of.
    pub fn write_mask(self) -> u8 {
        match self {
            Register::PowerControl => 0xFF,
            Register::Reset => 0xFF,
            Register::FrameRate => 0x01,
            Register::InterruptControl => 0x03,
            Register::Status => 0x00,
            Register::StatusClear => 0x0E,
            Register::Average => 0x20,
            Register::InterruptLevelUpperLow
            | Register::InterruptLevelLowerLow
            | Register::InterruptHysteresisLow => 0xFF,
            Register::InterruptLevelUpperHigh
            | Register::InterruptLevelLowerHigh
            | Register::InterruptHysteresisHigh => 0x0F,
            Register::ThermistorLow | Register::ThermistorHigh => 0x00,
        }
    }
}

/// Base address of the pixel array.
///
/// Pixel `i` occupies the low/high register pair at `0x80 + 2 * i`, so the array covers 0x80
/// through 0xFF.
pub const PIXEL_BASE_OFFSET: u8 = 0x80;

/// The address of the low byte of the given pixel.
///
/// Pixel indices are the flattened row-major index, `row * WIDTH + col`.
pub fn pixel_address(index: usize) -> u8 {
    debug_assert!(index < crate::NUM_PIXELS);
    PIXEL_BASE_OFFSET + (index as u8) * 2
}

/// A bit field within an 8-bit configuration register.
///
/// The register map is a fixed set of these descriptors, one per field the datasheet defines.
/// Single-bit flags have a width of 1; whole-byte values have a width of 8.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    register: Register,
    offset: u8,
    width: u8,
}

impl Field {
    const fn new(register: Register, offset: u8, width: u8) -> Self {
        Self {
            register,
            offset,
            width,
        }
    }

    /// The register this field lives in.
    pub fn register(self) -> Register {
        self.register
    }

    /// A mask of the bits this field occupies.
    pub fn mask(self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.offset
    }

    /// Replace this field within a register value, leaving the other bits untouched.
    pub fn insert(self, current: u8, value: u8) -> u8 {
        let mask = self.mask();
        (current & !mask) | ((value << self.offset) & mask)
    }

    /// Extract this field from a register value.
    pub fn extract(self, raw: u8) -> u8 {
        (raw & self.mask()) >> self.offset
    }
}

/// The operating mode, occupying the whole power control register.
pub const OPERATING_MODE: Field = Field::new(Register::PowerControl, 0, 8);

/// The software reset command, occupying the whole reset register.
pub const SOFTWARE_RESET: Field = Field::new(Register::Reset, 0, 8);

/// The frame rate selection bit.
pub const FRAME_RATE: Field = Field::new(Register::FrameRate, 0, 1);

/// The interrupt enable bit.
pub const INTERRUPT_ENABLE: Field = Field::new(Register::InterruptControl, 0, 1);

/// The interrupt mode bit (difference or absolute value).
pub const INTERRUPT_MODE: Field = Field::new(Register::InterruptControl, 1, 1);

/// The moving average mode bit.
pub const MOVING_AVERAGE: Field = Field::new(Register::Average, 5, 1);

/// The operating modes accepted by the power control register.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OperatingMode {
    /// Normal operation, which is also the mode the driver selects at start up.
    Normal = 0x00,

    /// Sleep mode. Registers cannot be read until the sensor is woken again.
    Sleep = 0x10,

    /// Stand-by, waking every 60 seconds.
    StandBy60 = 0x20,

    /// Stand-by, waking every 10 seconds.
    StandBy10 = 0x21,
}

/// The software reset commands accepted by the reset register.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive)]
#[repr(u8)]
pub enum SoftwareReset {
    /// Clear the status flags and the interrupt table.
    FlagReset = 0x30,

    /// Return all registers to their power-on defaults.
    InitialReset = 0x3F,
}

/// The frame rates supported by the sensor.
///
/// The sensor only offers two rates, selected by a single bit. The driver fixes the rate at
/// [10 FPS][FrameRate::Ten] during initialization.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum FrameRate {
    /// 10 frames per second, the power-on default.
    Ten,

    /// 1 frame per second.
    One,
}

impl FrameRate {
    /// Attempt to create a `FrameRate` from the raw frame rate bit.
    pub fn from_raw(raw_value: u8) -> Result<Self, LibraryError> {
        match raw_value {
            0 => Ok(Self::Ten),
            1 => Ok(Self::One),
            _ => Err(LibraryError::InvalidData("Invalid frame rate bit given")),
        }
    }

    /// Map a frame rate variant into the bit value used by the sensor.
    pub fn as_raw(&self) -> u8 {
        match self {
            Self::Ten => 0,
            Self::One => 1,
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::Ten
    }
}

impl TryFrom<u8> for FrameRate {
    type Error = LibraryError;

    /// Attempt to create a `FrameRate` from a frames-per-second count.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            1 => Ok(Self::One),
            _ => Err(LibraryError::InvalidData(
                "The given number does not match a valid frame rate",
            )),
        }
    }
}

impl From<FrameRate> for u8 {
    /// The frames-per-second count for a frame rate.
    fn from(frame_rate: FrameRate) -> Self {
        match frame_rate {
            FrameRate::Ten => 10,
            FrameRate::One => 1,
        }
    }
}
