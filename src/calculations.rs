// SPDX-License-Identifier: Apache-2.0

//! Conversion of raw AMG88xx register values into temperatures.
//!
//! Every temperature the sensor reports is a 12-bit signed value spread across a pair of 8-bit
//! registers, scaled by a fixed number of degrees Celsius per least significant bit. The catch is
//! that the thermistor and the pixel array use different signed encodings:
//!
//! * The thermistor is *sign-magnitude*: bit 11 is a sign flag, and bits 0 through 10 are an
//!   unsigned magnitude.
//! * The pixels are ordinary *two's complement* over a 12-bit field.
//!
//! The same bit pattern can decode to very different values under the two conventions (`0x801` is
//! -1 as sign-magnitude but -2047 as two's complement), so the decoders are kept as two separate
//! functions and each register pair goes through exactly one of them.

/// Degrees Celsius per least significant bit of the thermistor registers.
pub const THERMISTOR_CELSIUS_PER_LSB: f32 = 0.0625;

/// Degrees Celsius per least significant bit of a pixel register pair.
pub const PIXEL_CELSIUS_PER_LSB: f32 = 0.25;

/// Combine a low/high register pair into a raw word.
///
/// Values that span two registers are stored little-endian, with the low byte at the lower
/// address.
pub(crate) fn raw_from_pair(low: u8, high: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

/// Decode a 12-bit sign-magnitude value, as used by the thermistor registers.
///
/// Bit 11 is the sign flag and bits 0 through 10 are the magnitude. Bits above bit 11 are
/// ignored, and every input decodes to something, so this is a total function.
pub fn decode_sign_magnitude_12bit(raw: u16) -> i16 {
    let magnitude = (raw & 0x07FF) as i16;
    if raw & 0x0800 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Decode a 12-bit two's complement value, as used by the pixel registers.
///
/// Bits above bit 11 are ignored. Not interchangeable with
/// [`decode_sign_magnitude_12bit`]; the two encodings disagree on every negative value.
pub fn decode_twos_complement_12bit(raw: u16) -> i16 {
    let masked = (raw & 0x0FFF) as i16;
    if masked & 0x0800 != 0 {
        masked - 0x1000
    } else {
        masked
    }
}

/// Decode a raw thermistor register pair into degrees Celsius.
pub(crate) fn thermistor_celsius(raw: u16) -> f32 {
    f32::from(decode_sign_magnitude_12bit(raw)) * THERMISTOR_CELSIUS_PER_LSB
}

/// Decode a raw pixel register pair into degrees Celsius.
pub(crate) fn pixel_celsius(raw: u16) -> f32 {
    f32::from(decode_twos_complement_12bit(raw)) * PIXEL_CELSIUS_PER_LSB
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;

    /// Encode a signed integer into the thermistor's sign-magnitude format.
    ///
    /// Only valid for values in [-2047, 2047].
    fn encode_sign_magnitude(value: i16) -> u16 {
        if value < 0 {
            0x0800 | (value.unsigned_abs())
        } else {
            value as u16
        }
    }

    /// Encode a signed integer into the pixel's two's complement format.
    ///
    /// Only valid for values in [-2048, 2047].
    fn encode_twos_complement(value: i16) -> u16 {
        (value as u16) & 0x0FFF
    }

    #[test]
    fn sign_magnitude_ignores_upper_bits() {
        for raw in 0..=u16::MAX {
            assert_eq!(
                decode_sign_magnitude_12bit(raw),
                decode_sign_magnitude_12bit(raw & 0x0FFF),
                "mismatch for input {:#06X}",
                raw
            );
        }
    }

    #[test]
    fn twos_complement_ignores_upper_bits() {
        for raw in 0..=u16::MAX {
            assert_eq!(
                decode_twos_complement_12bit(raw),
                decode_twos_complement_12bit(raw & 0x0FFF),
                "mismatch for input {:#06X}",
                raw
            );
        }
    }

    #[test]
    fn sign_magnitude_vectors() {
        assert_eq!(decode_sign_magnitude_12bit(0x000), 0);
        assert_eq!(decode_sign_magnitude_12bit(0x001), 1);
        assert_eq!(decode_sign_magnitude_12bit(0x801), -1);
        assert_eq!(decode_sign_magnitude_12bit(0x7FF), 2047);
        // Negative zero decodes to zero
        assert_eq!(decode_sign_magnitude_12bit(0x800), 0);
    }

    #[test]
    fn twos_complement_vectors() {
        assert_eq!(decode_twos_complement_12bit(0x000), 0);
        assert_eq!(decode_twos_complement_12bit(0xFFF), -1);
        assert_eq!(decode_twos_complement_12bit(0x800), -2048);
        assert_eq!(decode_twos_complement_12bit(0x7FF), 2047);
    }

    #[test]
    fn conventions_differ_on_negatives() {
        // The same bit pattern, two very different values.
        assert_eq!(decode_sign_magnitude_12bit(0x801), -1);
        assert_eq!(decode_twos_complement_12bit(0x801), -2047);
    }

    #[test]
    fn sign_magnitude_round_trip() {
        for value in -2047..=2047i16 {
            assert_eq!(
                decode_sign_magnitude_12bit(encode_sign_magnitude(value)),
                value
            );
        }
    }

    #[test]
    fn twos_complement_round_trip() {
        for value in -2048..=2047i16 {
            assert_eq!(
                decode_twos_complement_12bit(encode_twos_complement(value)),
                value
            );
        }
    }

    #[test]
    fn thermistor_scaling() {
        assert_approx_eq!(f32, thermistor_celsius(0x019), 1.5625);
        assert_approx_eq!(f32, thermistor_celsius(0x819), -1.5625);
    }

    #[test]
    fn pixel_scaling() {
        assert_approx_eq!(f32, pixel_celsius(0x004), 1.0);
        assert_approx_eq!(f32, pixel_celsius(0xFFC), -1.0);
    }
}
