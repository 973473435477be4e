// SPDX-License-Identifier: Apache-2.0

//! A pure-Rust library for accessing the Panasonic AMG88xx ("Grid-EYE") 8×8 thermal sensors over
//! I²C.
//!
//! The AMG88xx reports two kinds of temperature. The on-board thermistor measures the sensor die
//! itself, and the 8×8 infrared array measures whatever the sensor is pointed at. Both readings
//! come off the bus as pairs of 8-bit registers holding a 12-bit value, but the two use different
//! sign conventions: the thermistor is sign-magnitude, while the pixels are two's complement. The
//! [`calculations`] module keeps the two decoders separate so they can't be mixed up, and the
//! [`GridEye`] driver applies the right one to each register pair.
//!
//! This library uses the [`embedded-hal`][embedded-hal] I²C traits, meaning you should be able to
//! use it on any platform with an `embedded-hal` I²C implementation. It is also `no_std`
//! compatible (disable the default `std` feature).
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/0.2/embedded_hal/blocking/i2c/index.html
//!
//! # Example
//! ```no_run
//! use amg88xx::{GridEye, DEFAULT_ADDRESS};
//! use linux_embedded_hal::I2cdev;
//!
//! let bus = I2cdev::new("/dev/i2c-1").expect("/dev/i2c-1 needs to be an I2C controller");
//! // AD_SELECT pulled high gives the default address, 0x69
//! let mut sensor = GridEye::new(bus, DEFAULT_ADDRESS)?;
//! let die_temperature = sensor.thermistor_temperature()?;
//! let pixels = sensor.pixel_temperatures()?;
//! # Ok::<(), amg88xx::Error<I2cdev>>(())
//! ```
//!
//! # Pixel scanning
//! Each pixel is read in its own I²C transaction, 64 transactions per scan, so a scan is a
//! best-effort snapshot rather than a device-guaranteed atomic frame. The sensor updates the
//! array at the fixed 10 FPS rate this driver configures; pace your scans against that rate if
//! you need frame-to-frame consistency.

#![no_std]

pub mod calculations;
pub mod driver;
pub mod error;
pub mod register;
#[cfg(test)]
mod test;

pub use driver::GridEye;
pub use error::{Error, LibraryError};
pub use register::{FrameRate, OperatingMode, Register, SoftwareReset};

/// The default I²C address, used when the AD_SELECT pin is pulled high.
///
/// Pulling AD_SELECT low gives the only other valid address, 0x68.
pub const DEFAULT_ADDRESS: u8 = 0x69;

/// The width of the pixel array.
pub const WIDTH: usize = 8;

/// The height of the pixel array.
pub const HEIGHT: usize = 8;

/// The number of pixels in the array.
pub const NUM_PIXELS: usize = WIDTH * HEIGHT;

/// One full scan of the pixel array, in degrees Celsius.
///
/// The grid is row-major: pixel `(row, col)` is at index `row * WIDTH + col`. Row 0 is the side
/// of the array closest to the writing on the sensor package.
pub type PixelGrid = [f32; NUM_PIXELS];
