//! Single- and double-character encodings of bounded real values.
//!
//! All quantization rounds half away from zero ([f64::round]), which peers rely on to agree
//! bit-for-bit on every decoded value.

use crate::{
    alphabet::{Alphabet, BASE},
    codec::Reader,
    error::{EncodeError, Error},
};

/// Inputs this far outside a declared range are clamped rather than rejected.
pub const TOLERANCE: f64 = 1.0e-6;

/// Largest absolute speed representable by [Alphabet::encode_speed].
pub const SPEED_MAX: f64 = 3.0;

/// Resolution of [Alphabet::encode_speed].
pub const SPEED_STEP: f64 = 0.1;

/// Resolution of [Alphabet::encode_coord2].
pub const COORD_STEP: f64 = 0.1;

/// Characters for uniform numbers `1..=11`.
const HEX: [char; 11] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B'];

/// Clamps `value` to `[min, max]` if it lies within [TOLERANCE] of the range.
fn tolerate(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, EncodeError> {
    if !(min - TOLERANCE..=max + TOLERANCE).contains(&value) {
        return Err(EncodeError::OutOfRange { field, value });
    }
    Ok(value.clamp(min, max))
}

impl Alphabet {
    /// Encodes a rate in `[0, 1]` as one character over `BASE - 1` equal steps.
    pub fn encode_percentage(&self, rate: f64) -> Result<char, EncodeError> {
        let rate = tolerate("percentage", rate, 0.0, 1.0)?;
        let index = (rate * (BASE - 1) as f64).round() as usize;
        Ok(self.digit(index))
    }

    /// Decodes a rate in `[0, 1]` written by [Alphabet::encode_percentage].
    pub fn decode_percentage(&self, c: char) -> Result<f64, Error> {
        let index = self.char_to_digit(c).ok_or(Error::InvalidChar(c))?;
        Ok(index as f64 / (BASE - 1) as f64)
    }

    /// Encodes a speed in `[-3, 3]` with a resolution of `0.1` as one character.
    pub fn encode_speed(&self, speed: f64) -> Result<char, EncodeError> {
        let speed = tolerate("speed", speed, -SPEED_MAX, SPEED_MAX)?;
        let index = ((speed + SPEED_MAX) / SPEED_STEP).round() as usize;
        Ok(self.digit(index))
    }

    /// Decodes a speed written by [Alphabet::encode_speed].
    pub fn decode_speed(&self, c: char) -> Result<f64, Error> {
        let index = self.char_to_digit(c).ok_or(Error::InvalidChar(c))?;
        let max = (2.0 * SPEED_MAX / SPEED_STEP).round() as usize;
        if index > max {
            return Err(Error::InvalidData("speed", format!("index {index} > {max}")));
        }
        Ok(index as f64 * SPEED_STEP - SPEED_MAX)
    }

    /// Encodes a coordinate in `[-half, half]` with a resolution of `0.1` as two characters,
    /// least significant digit first.
    ///
    /// Callers must pick `half` such that `2 * half / 0.1 < BASE^2`.
    pub fn encode_coord2(&self, value: f64, half: f64) -> Result<String, EncodeError> {
        let value = tolerate("coordinate", value, -half, half)?;
        let index = ((value + half) / COORD_STEP).round() as usize;
        if index >= BASE * BASE {
            return Err(EncodeError::Overflow {
                value: index as u64,
                width: 2,
            });
        }
        let mut buf = String::with_capacity(2);
        buf.push(self.digit(index % BASE));
        buf.push(self.digit(index / BASE));
        Ok(buf)
    }

    /// Decodes a coordinate written by [Alphabet::encode_coord2].
    pub fn decode_coord2(&self, text: &str, half: f64) -> Result<f64, Error> {
        let mut reader = Reader::new(text);
        let low = self.read_digit(&mut reader)?;
        let high = self.read_digit(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(Error::InvalidData(
                "coordinate",
                format!("expected 2 characters, found {text:?}"),
            ));
        }
        Ok((low + high * BASE) as f64 * COORD_STEP - half)
    }
}

/// Encodes a uniform number in `1..=11` as a single character (`'1'..='9'`, `'A'`, `'B'`).
pub fn unum_to_hex(unum: u8) -> Option<char> {
    HEX.get(usize::from(unum).checked_sub(1)?).copied()
}

/// Decodes a uniform number written by [unum_to_hex].
pub fn hex_to_unum(c: char) -> Option<u8> {
    HEX.iter().position(|&h| h == c).map(|i| i as u8 + 1)
}
