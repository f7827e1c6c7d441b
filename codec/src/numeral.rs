//! Fixed-width integer encoding and decoding
//!
//! Integers are written most-significant digit first using the digits of an [Alphabet]. A value
//! encoded into `width` characters must satisfy `value < 74^width`. The positional weight of the
//! `i`-th character counted from the end is `74^i`.

use crate::{
    alphabet::{Alphabet, BASE},
    codec::Reader,
    error::{EncodeError, Error},
};

/// The largest width for which `74^width` fits in a `u64`.
const MAX_WIDTH: usize = 10;

/// Returns `74^width`, or `None` if it does not fit in a `u64`.
pub fn limit(width: usize) -> Option<u64> {
    (BASE as u64).checked_pow(u32::try_from(width).ok()?)
}

impl Alphabet {
    /// Encodes `value` into exactly `width` characters.
    pub fn encode_int(&self, value: u64, width: usize) -> Result<String, EncodeError> {
        let mut buf = String::with_capacity(width);
        self.write_int(value, width, &mut buf)?;
        Ok(buf)
    }

    /// Appends `value` as exactly `width` characters to `buf`.
    pub fn write_int(&self, value: u64, width: usize, buf: &mut String) -> Result<(), EncodeError> {
        if let Some(limit) = limit(width) {
            if value >= limit {
                return Err(EncodeError::Overflow { value, width });
            }
        }

        // Any u64 fits in MAX_WIDTH + 1 digits, the rest are leading zeros.
        for _ in (MAX_WIDTH + 1)..width {
            buf.push(self.zero());
        }
        let significant = width.min(MAX_WIDTH + 1);
        let mut digits = [0usize; MAX_WIDTH + 1];
        let mut rest = value;
        for slot in digits[..significant].iter_mut().rev() {
            *slot = (rest % BASE as u64) as usize;
            rest /= BASE as u64;
        }
        for &digit in &digits[..significant] {
            buf.push(self.digit(digit));
        }
        Ok(())
    }

    /// Decodes an integer from every character of `text`.
    pub fn decode_int(&self, text: &str) -> Result<u64, Error> {
        text.chars().try_fold(0u64, |acc, c| {
            let digit = self.char_to_digit(c).ok_or(Error::InvalidChar(c))?;
            acc.checked_mul(BASE as u64)
                .and_then(|acc| acc.checked_add(digit as u64))
                .ok_or_else(|| Error::InvalidData("integer", format!("{text:?} overflows u64")))
        })
    }

    /// Consumes `width` characters from `reader` and decodes them as an integer.
    pub fn read_int(&self, reader: &mut Reader<'_>, width: usize) -> Result<u64, Error> {
        let text = reader.take(width)?;
        self.decode_int(text)
    }

    /// Consumes a single character from `reader` and returns its digit value.
    pub fn read_digit(&self, reader: &mut Reader<'_>) -> Result<usize, Error> {
        let c = reader.next_char()?;
        self.char_to_digit(c).ok_or(Error::InvalidChar(c))
    }

    /// Returns the character for `digit`, which the caller guarantees is below [BASE].
    pub(crate) fn digit(&self, digit: usize) -> char {
        debug_assert!(digit < BASE);
        self.digit_to_char(digit % BASE).unwrap_or_else(|| self.zero())
    }

    fn zero(&self) -> char {
        self.chars().next().unwrap_or('0')
    }
}
