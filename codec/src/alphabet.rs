//! The ordered character set used as the digits of a base-74 numeral system.
//!
//! Every encoding in this crate writes digits through an [Alphabet]. The alphabet is restricted
//! to characters the say channel accepts verbatim, so any digit can appear anywhere in a message.
//!
//! # Rotation
//!
//! An [Alphabet] may be rotated by a `shift`: digit `d` is written as `CHARS[(d + shift) % 74]`.
//! All deployed formats use a shift of `0`; other values are supported but experimental.

/// Characters of the alphabet in digit order (for a shift of `0`).
pub const CHARS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz ().+*/?<>_-";

/// Number of characters in the alphabet (the numeral base).
pub const BASE: usize = 74;

const _: () = assert!(CHARS.len() == BASE);

/// Marker for ASCII characters that are not part of the alphabet.
const NONE: u8 = u8::MAX;

/// Bidirectional map between digit values and characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    shift: usize,
    digits: [u8; BASE],
    values: [u8; 128],
}

impl Alphabet {
    /// Create an [Alphabet] rotated by `shift` (taken modulo [BASE]).
    pub fn new(shift: usize) -> Self {
        let shift = shift % BASE;
        let chars = CHARS.as_bytes();
        let mut digits = [0u8; BASE];
        let mut values = [NONE; 128];
        for (digit, slot) in digits.iter_mut().enumerate() {
            let c = chars[(digit + shift) % BASE];
            *slot = c;
            values[c as usize] = digit as u8;
        }
        Self {
            shift,
            digits,
            values,
        }
    }

    /// Returns the numeral base.
    pub fn base(&self) -> usize {
        BASE
    }

    /// Returns the rotation applied to the alphabet.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Returns the character written for `digit`, if `digit < BASE`.
    pub fn digit_to_char(&self, digit: usize) -> Option<char> {
        self.digits.get(digit).map(|&c| c as char)
    }

    /// Returns the digit value of `c`, if `c` belongs to the alphabet.
    pub fn char_to_digit(&self, c: char) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        match self.values[c as usize] {
            NONE => None,
            digit => Some(digit as usize),
        }
    }

    /// Returns `true` if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.char_to_digit(c).is_some()
    }

    /// Iterate over the characters in digit order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.digits.iter().map(|&c| c as char)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(0)
    }
}
