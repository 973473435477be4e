// SPDX-License-Identifier: Apache-2.0

use embedded_hal::blocking::i2c;

use crate::calculations::{pixel_celsius, raw_from_pair, thermistor_celsius};
use crate::error::{Error, LibraryError};
use crate::register::{
    pixel_address, Field, FrameRate, OperatingMode, Register, SoftwareReset, FRAME_RATE,
    INTERRUPT_ENABLE,
};
use crate::{PixelGrid, HEIGHT, NUM_PIXELS, WIDTH};

/// Driver for the AMG88xx family of thermal sensors.
///
/// The driver owns the I²C bus handle, and every operation takes `&mut self`, so access to the
/// bus is serialized by the borrow checker. Multi-threaded callers should wrap the driver in
/// their platform's mutex of choice.
///
/// Construction puts the sensor into normal mode at 10 FPS with interrupts disabled; there are
/// no other configuration knobs. After that, two readings are available:
/// [`thermistor_temperature`][Self::thermistor_temperature] for the sensor die itself, and
/// [`pixel_temperatures`][Self::pixel_temperatures] for the infrared array.
#[derive(Clone, Debug)]
pub struct GridEye<I2C> {
    /// The I²C bus this sensor is accessible on.
    bus: I2C,

    /// The I²C address this sensor is accessible at.
    address: u8,

    /// Scratch buffer reused for every register pair read, so the pixel scan doesn't allocate
    /// per iteration.
    pair_buffer: [u8; 2],
}

impl<I2C> GridEye<I2C>
where
    I2C: i2c::Write + i2c::WriteRead,
{
    /// Create a `GridEye` for accessing the sensor at the given I²C address.
    ///
    /// The only valid addresses are [0x69][crate::DEFAULT_ADDRESS] (AD_SELECT high) and 0x68
    /// (AD_SELECT low); anything else is rejected before touching the bus.
    ///
    /// The sensor is initialized to a fixed configuration: normal operating mode, a full
    /// software reset back to power-on defaults, interrupts disabled, and a 10 FPS frame rate.
    /// If the device never acknowledges, the first write fails with
    /// [`Error::BusUnavailable`] and no driver is returned.
    pub fn new(bus: I2C, address: u8) -> Result<Self, Error<I2C>> {
        if address != crate::DEFAULT_ADDRESS && address != 0x68 {
            return Err(LibraryError::InvalidAddress(address).into());
        }
        let mut bus = bus;
        // Wake the sensor before anything else. A device that isn't on the bus fails here.
        write_register(
            &mut bus,
            address,
            Register::PowerControl,
            OperatingMode::Normal.into(),
        )
        .map_err(Error::BusUnavailable)?;
        // Back to power-on defaults.
        write_register(
            &mut bus,
            address,
            Register::Reset,
            SoftwareReset::InitialReset.into(),
        )
        .map_err(Error::WriteError)?;
        // Interrupts off, and the frame rate pinned at 10 FPS.
        update_field(&mut bus, address, INTERRUPT_ENABLE, 0)?;
        update_field(&mut bus, address, FRAME_RATE, FrameRate::Ten.as_raw())?;
        Ok(Self {
            bus,
            address,
            pair_buffer: [0u8; 2],
        })
    }

    /// Temperature of the sensor die in degrees Celsius.
    ///
    /// This is the on-board thermistor, not an infrared reading; use
    /// [`pixel_temperatures`][Self::pixel_temperatures] for those.
    pub fn thermistor_temperature(&mut self) -> Result<f32, Error<I2C>> {
        self.read_pair(Register::ThermistorLow.address())?;
        let raw = raw_from_pair(self.pair_buffer[0], self.pair_buffer[1]);
        Ok(thermistor_celsius(raw))
    }

    /// Temperature of each pixel across the sensor, in degrees Celsius.
    ///
    /// The grid is row-major, with row 0 on the side closest to the writing on the sensor
    /// package. Each pixel is read in its own bus transaction, so the grid is a best-effort
    /// snapshot rather than an atomic frame; see the crate docs for pacing advice.
    ///
    /// If any transaction fails the scan stops and the failure is returned; partial results are
    /// never handed out. Retry by calling this method again.
    pub fn pixel_temperatures(&mut self) -> Result<PixelGrid, Error<I2C>> {
        let mut grid = [0f32; NUM_PIXELS];
        self.pixel_temperatures_to(&mut grid)?;
        Ok(grid)
    }

    /// Scan the pixel array into a caller-provided grid.
    ///
    /// The same as [`pixel_temperatures`][Self::pixel_temperatures], but writing into an
    /// existing buffer. On failure the scan stops at the failing pixel, and the destination is
    /// left partially updated; retry the whole scan from the start.
    pub fn pixel_temperatures_to(&mut self, destination: &mut PixelGrid) -> Result<(), Error<I2C>> {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let index = row * WIDTH + col;
                self.read_pair(pixel_address(index))?;
                let raw = raw_from_pair(self.pair_buffer[0], self.pair_buffer[1]);
                destination[index] = pixel_celsius(raw);
            }
        }
        Ok(())
    }

    /// The height of the pixel array.
    pub fn height(&self) -> usize {
        HEIGHT
    }

    /// The width of the pixel array.
    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Read a low/high register pair into the scratch buffer in one write-read transaction.
    fn read_pair(&mut self, low_address: u8) -> Result<(), Error<I2C>> {
        self.bus
            .write_read(self.address, &[low_address], &mut self.pair_buffer)
            .map_err(Error::WriteReadError)
    }
}

fn read_register<I2C: i2c::WriteRead>(
    bus: &mut I2C,
    i2c_address: u8,
    register: Register,
) -> Result<u8, I2C::Error> {
    let mut value = [0u8; 1];
    bus.write_read(i2c_address, &[register.address()], &mut value)?;
    Ok(value[0])
}

fn write_register<I2C: i2c::Write>(
    bus: &mut I2C,
    i2c_address: u8,
    register: Register,
    value: u8,
) -> Result<(), I2C::Error> {
    bus.write(i2c_address, &[register.address(), value])
}

/// Read-modify-write a single field, preserving the register's other bits.
///
/// The write is skipped when the field already holds the requested value.
fn update_field<I2C>(
    bus: &mut I2C,
    i2c_address: u8,
    field: Field,
    value: u8,
) -> Result<(), Error<I2C>>
where
    I2C: i2c::Write + i2c::WriteRead,
{
    let current = read_register(bus, i2c_address, field.register()).map_err(Error::WriteReadError)?;
    let updated = field.insert(current, value);
    if updated != current {
        write_register(bus, i2c_address, field.register(), updated).map_err(Error::WriteError)?;
    }
    Ok(())
}
