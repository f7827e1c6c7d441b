//! Mixed-radix packing of several bounded fields into one integer.
//!
//! A message declares its fields as a table of [Field]s in priority order. [Packer] folds them
//! into one integer (`value = value * radix + index`) and [Unpacker] peels them off in reverse
//! (`index = value % radix; value /= radix`), so the first field extracted is the last packed.
//!
//! The product of all radices must not exceed `74^width` of the payload; the message tests check
//! this for every table.

use crate::error::EncodeError;

/// How a value outside a field's range is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Clamped to the nearest representable index.
    Continuous,
    /// Wrapped modulo the radix (angles).
    Cyclic,
    /// Rejected with [EncodeError::OutOfRange] (uniform numbers, counters).
    Discrete,
}

/// A single field of a mixed-radix integer.
///
/// The field represents `index * scale + offset` for `index` in `0..radix`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub radix: u64,
    pub scale: f64,
    pub offset: f64,
    pub kind: Kind,
}

impl Field {
    /// A continuous real-valued field.
    pub const fn real(name: &'static str, radix: u64, scale: f64, offset: f64) -> Self {
        Self {
            name,
            radix,
            scale,
            offset,
            kind: Kind::Continuous,
        }
    }

    /// An angle in degrees, wrapped into the field.
    pub const fn angle(name: &'static str, radix: u64, scale: f64) -> Self {
        Self {
            name,
            radix,
            scale,
            offset: -180.0,
            kind: Kind::Cyclic,
        }
    }

    /// An integer field representing `offset..offset + radix`.
    pub const fn int(name: &'static str, radix: u64, offset: u64) -> Self {
        Self {
            name,
            radix,
            scale: 1.0,
            offset: offset as f64,
            kind: Kind::Discrete,
        }
    }

    /// Quantizes `value` into an index below the radix.
    pub fn index(&self, value: f64) -> Result<u64, EncodeError> {
        let out_of_range = EncodeError::OutOfRange {
            field: self.name,
            value,
        };
        if !value.is_finite() {
            return Err(out_of_range);
        }
        let index = ((value - self.offset) / self.scale).round();
        let max = (self.radix - 1) as f64;
        match self.kind {
            Kind::Continuous => Ok(index.clamp(0.0, max) as u64),
            Kind::Cyclic => Ok(index.rem_euclid(self.radix as f64) as u64),
            Kind::Discrete => {
                if !(0.0..=max).contains(&index) {
                    return Err(out_of_range);
                }
                Ok(index as u64)
            }
        }
    }

    /// Returns the value represented by `index`.
    pub fn value(&self, index: u64) -> f64 {
        index as f64 * self.scale + self.offset
    }
}

/// Returns the product of all radices in `fields`, or `None` on overflow.
pub fn capacity(fields: &[Field]) -> Option<u64> {
    fields
        .iter()
        .try_fold(1u64, |acc, field| acc.checked_mul(field.radix))
}

/// Accumulates fields into a mixed-radix integer, highest priority first.
#[derive(Clone, Debug, Default)]
pub struct Packer {
    value: u64,
}

impl Packer {
    /// Create a new [Packer] starting from `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` as the next (lower priority) field.
    pub fn push(&mut self, field: &Field, value: f64) -> Result<&mut Self, EncodeError> {
        let index = field.index(value)?;
        self.push_index(field, index)
    }

    /// Appends an already quantized `index` as the next field.
    pub fn push_index(&mut self, field: &Field, index: u64) -> Result<&mut Self, EncodeError> {
        debug_assert!(index < field.radix);
        self.value = self
            .value
            .checked_mul(field.radix)
            .and_then(|value| value.checked_add(index))
            .ok_or(EncodeError::Overflow {
                value: self.value,
                width: 0,
            })?;
        Ok(self)
    }

    /// Returns the packed integer.
    pub fn finish(&self) -> u64 {
        self.value
    }
}

/// Extracts fields from a mixed-radix integer, lowest priority first.
#[derive(Clone, Debug)]
pub struct Unpacker {
    value: u64,
}

impl Unpacker {
    /// Create a new [Unpacker] over `value`.
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Extracts the index of the next field.
    pub fn pop_index(&mut self, field: &Field) -> u64 {
        let index = self.value % field.radix;
        self.value /= field.radix;
        index
    }

    /// Extracts the value of the next field.
    pub fn pop(&mut self, field: &Field) -> f64 {
        let index = self.pop_index(field);
        field.value(index)
    }

    /// Extracts the value of the last field from everything that remains.
    pub fn rest(&mut self, field: &Field) -> f64 {
        let index = std::mem::take(&mut self.value);
        field.value(index)
    }

    /// Extracts an integer field (`index + offset`).
    pub fn pop_int(&mut self, field: &Field) -> u8 {
        debug_assert_eq!(field.kind, Kind::Discrete);
        (self.pop_index(field) + field.offset as u64) as u8
    }

    /// Returns the value that has not been extracted yet.
    pub fn remaining(&self) -> u64 {
        self.value
    }
}
