// SPDX-License-Identifier: Apache-2.0
#[cfg(feature = "std")]
extern crate std;

use core::fmt;

use embedded_hal::blocking::i2c;

/// Errors that don't involve I²C.
#[derive(Clone, Debug, PartialEq)]
pub enum LibraryError {
    /// The given device address is not one an AMG88xx can occupy.
    ///
    /// The AD_SELECT pin selects between 0x68 and 0x69; nothing else is valid.
    InvalidAddress(u8),

    /// When a value is malformed in some way.
    InvalidData(&'static str),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidAddress(address) => {
                write!(f, "{:#04X} is not a valid AMG88xx address", address)
            }
            LibraryError::InvalidData(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LibraryError {}

/// Errors this driver can encounter.
///
/// The two `embedded-hal` bus traits have separate error associated types, so write and
/// write-read failures get separate variants.
pub enum Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    /// The device never acknowledged a transaction while the driver was being constructed.
    ///
    /// The driver does not retry a non-responding device; that decision belongs to the caller.
    BusUnavailable(<I2C as i2c::Write>::Error),

    /// A write transaction failed.
    WriteError(<I2C as i2c::Write>::Error),

    /// A combined write-read transaction failed.
    WriteReadError(<I2C as i2c::WriteRead>::Error),

    /// Errors originating from within this library.
    LibraryError(LibraryError),
}

// Custom Debug implementation so that I2C doesn't need to implement Debug (like the one from
// linux-embedded-hal).
impl<I2C> fmt::Debug for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: fmt::Debug,
    <I2C as i2c::Write>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BusUnavailable(i2c_error) => f
                .debug_tuple("Error::BusUnavailable")
                .field(i2c_error)
                .finish(),
            Error::WriteError(i2c_error) => {
                f.debug_tuple("Error::WriteError").field(i2c_error).finish()
            }
            Error::WriteReadError(i2c_error) => f
                .debug_tuple("Error::WriteReadError")
                .field(i2c_error)
                .finish(),
            Error::LibraryError(err) => f.debug_tuple("Error::LibraryError").field(err).finish(),
        }
    }
}

impl<I2C> fmt::Display for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: fmt::Debug,
    <I2C as i2c::Write>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BusUnavailable(i2c_error) => {
                write!(f, "Device unavailable: {:?}", i2c_error)
            }
            Error::WriteError(i2c_error) => write!(f, "I2C write error: {:?}", i2c_error),
            Error::WriteReadError(i2c_error) => {
                write!(f, "I2C write-read error: {:?}", i2c_error)
            }
            Error::LibraryError(err) => write!(f, "Library error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<I2C> std::error::Error for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
    <I2C as i2c::WriteRead>::Error: std::error::Error + 'static,
    <I2C as i2c::Write>::Error: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::BusUnavailable(i2c_error) => Some(i2c_error),
            Error::WriteError(i2c_error) => Some(i2c_error),
            Error::WriteReadError(i2c_error) => Some(i2c_error),
            Error::LibraryError(lib_err) => Some(lib_err),
        }
    }
}

impl<I2C> From<LibraryError> for Error<I2C>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    fn from(lib_err: LibraryError) -> Self {
        Self::LibraryError(lib_err)
    }
}
