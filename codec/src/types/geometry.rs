//! Bit-packed positions and velocities.
//!
//! # Format
//!
//! ```text
//! 18-bit position:           | x (9) | y (9) |                      x in [-52, 52]
//! 19-bit position:           | x (10) | y (9) |                     x in [-52.5, 52.5]
//! 31-bit position+velocity:  | pos (19) | sx | mx (5) | sy | my (5) |
//! ```
//!
//! `y` is always in `[-34, 34]`. Each axis spans `2^bits - 1` equal steps, so both ends of the
//! range are representable. Velocity axes carry a sign bit and a magnitude quantized over
//! `[0, speed_max]` in 31 steps. Inputs outside a range are clamped to it.

use crate::{
    codec::{Codec, Reader},
    error::{EncodeError, Error},
};

/// Width of an 18-bit position in characters.
pub const POS18_WIDTH: usize = 3;

/// Width of a 19-bit position in characters.
pub const POS19_WIDTH: usize = 4;

/// Width of a 31-bit position and velocity in characters.
pub const POS_VEL_WIDTH: usize = 5;

const Y_BITS: u32 = 9;
const VEL_BITS: u32 = 5;
const VEL_MAX: u64 = (1 << VEL_BITS) - 1;

/// A point or vector on the pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A quantized axis covering `[-half, half]` with `max + 1` indices.
struct Axis {
    name: &'static str,
    half: f64,
    max: u64,
}

const X18: Axis = Axis {
    name: "x",
    half: 52.0,
    max: (1 << 9) - 1,
};
const X19: Axis = Axis {
    name: "x",
    half: 52.5,
    max: (1 << 10) - 1,
};
const Y: Axis = Axis {
    name: "y",
    half: 34.0,
    max: (1 << Y_BITS) - 1,
};

impl Axis {
    fn index(&self, value: f64) -> Result<u64, EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::OutOfRange {
                field: self.name,
                value,
            });
        }
        let value = value.clamp(-self.half, self.half);
        Ok(((value + self.half) / (2.0 * self.half) * self.max as f64).round() as u64)
    }

    fn value(&self, index: u64) -> f64 {
        index as f64 * (2.0 * self.half) / self.max as f64 - self.half
    }
}

fn check_bits(context: &'static str, value: u64, bits: u32) -> Result<(), Error> {
    if value >> bits != 0 {
        return Err(Error::InvalidData(
            context,
            format!("{value} exceeds {bits} bits"),
        ));
    }
    Ok(())
}

/// Packs `pos` into an 18-bit integer.
pub fn pack_pos18(pos: Vector2) -> Result<u64, EncodeError> {
    Ok(X18.index(pos.x)? << Y_BITS | Y.index(pos.y)?)
}

/// Unpacks an 18-bit integer written by [pack_pos18].
pub fn unpack_pos18(value: u64) -> Result<Vector2, Error> {
    check_bits("position", value, 18)?;
    Ok(Vector2::new(
        X18.value(value >> Y_BITS),
        Y.value(value & Y.max),
    ))
}

/// Packs `pos` into a 19-bit integer.
pub fn pack_pos19(pos: Vector2) -> Result<u64, EncodeError> {
    Ok(X19.index(pos.x)? << Y_BITS | Y.index(pos.y)?)
}

/// Unpacks a 19-bit integer written by [pack_pos19].
pub fn unpack_pos19(value: u64) -> Result<Vector2, Error> {
    check_bits("position", value, 19)?;
    Ok(Vector2::new(
        X19.value(value >> Y_BITS),
        Y.value(value & Y.max),
    ))
}

fn pack_speed(value: f64, speed_max: f64) -> Result<u64, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::OutOfRange {
            field: "velocity",
            value,
        });
    }
    let sign = u64::from(value < 0.0);
    let magnitude = (value.abs().min(speed_max) / speed_max * VEL_MAX as f64).round() as u64;
    Ok(sign << VEL_BITS | magnitude)
}

fn unpack_speed(value: u64, speed_max: f64) -> f64 {
    let magnitude = (value & VEL_MAX) as f64 * speed_max / VEL_MAX as f64;
    if value >> VEL_BITS & 1 == 1 {
        -magnitude
    } else {
        magnitude
    }
}

/// Packs a position and velocity into a 31-bit integer.
pub fn pack_pos_vel(pos: Vector2, vel: Vector2, speed_max: f64) -> Result<u64, EncodeError> {
    let pos = pack_pos19(pos)?;
    let vx = pack_speed(vel.x, speed_max)?;
    let vy = pack_speed(vel.y, speed_max)?;
    Ok(pos << 12 | vx << 6 | vy)
}

/// Unpacks a 31-bit integer written by [pack_pos_vel].
pub fn unpack_pos_vel(value: u64, speed_max: f64) -> Result<(Vector2, Vector2), Error> {
    check_bits("position and velocity", value, 31)?;
    let pos = unpack_pos19(value >> 12)?;
    let vel = Vector2::new(
        unpack_speed(value >> 6 & 0x3F, speed_max),
        unpack_speed(value & 0x3F, speed_max),
    );
    Ok((pos, vel))
}

impl Codec {
    /// Encodes `pos` as an 18-bit position in three characters.
    pub fn encode_pos18(&self, pos: Vector2) -> Result<String, EncodeError> {
        self.alphabet().encode_int(pack_pos18(pos)?, POS18_WIDTH)
    }

    /// Decodes a position written by [Codec::encode_pos18].
    pub fn decode_pos18(&self, text: &str) -> Result<Vector2, Error> {
        unpack_pos18(self.alphabet().decode_int(text)?)
    }

    /// Encodes a position and velocity in five characters (`2^31 < 74^5`).
    pub fn encode_pos_vel(&self, pos: Vector2, vel: Vector2) -> Result<String, EncodeError> {
        let value = pack_pos_vel(pos, vel, self.config().ball_speed_max)?;
        self.alphabet().encode_int(value, POS_VEL_WIDTH)
    }

    /// Decodes a position and velocity written by [Codec::encode_pos_vel].
    pub fn decode_pos_vel(&self, text: &str) -> Result<(Vector2, Vector2), Error> {
        let value = self.alphabet().decode_int(text)?;
        unpack_pos_vel(value, self.config().ball_speed_max)
    }

    pub(crate) fn read_pos18(&self, reader: &mut Reader<'_>) -> Result<Vector2, Error> {
        unpack_pos18(self.alphabet().read_int(reader, POS18_WIDTH)?)
    }

    pub(crate) fn write_pos18(&self, pos: Vector2, buf: &mut String) -> Result<(), EncodeError> {
        self.alphabet().write_int(pack_pos18(pos)?, POS18_WIDTH, buf)
    }

    pub(crate) fn read_pos_vel(&self, reader: &mut Reader<'_>) -> Result<(Vector2, Vector2), Error> {
        let value = self.alphabet().read_int(reader, POS_VEL_WIDTH)?;
        unpack_pos_vel(value, self.config().ball_speed_max)
    }

    pub(crate) fn write_pos_vel(
        &self,
        pos: Vector2,
        vel: Vector2,
        buf: &mut String,
    ) -> Result<(), EncodeError> {
        let value = pack_pos_vel(pos, vel, self.config().ball_speed_max)?;
        self.alphabet().write_int(value, POS_VEL_WIDTH, buf)
    }
}
