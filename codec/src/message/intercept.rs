use crate::{
    alphabet::BASE,
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
};

/// Largest uniform number carried (teammates `1..=11`, opponents `12..=22`).
const UNUM_MAX: u8 = 22;

/// The fastest interceptor and the number of cycles it needs to reach the ball.
///
/// The cycle count is estimated when said and heard one cycle later, so decoding reports one
/// cycle less than was written (never below zero).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intercept {
    /// Uniform number, opponents offset by 11.
    pub unum: u8,
    pub cycle: u8,
}

impl Intercept {
    /// Returns `true` if the interceptor is an opponent.
    pub fn is_opponent(&self) -> bool {
        self.unum > 11
    }
}

impl Write for Intercept {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        if !(1..=UNUM_MAX).contains(&self.unum) {
            return Err(EncodeError::OutOfRange {
                field: "unum",
                value: f64::from(self.unum),
            });
        }
        let alphabet = codec.alphabet();
        buf.push(alphabet.digit(usize::from(self.unum)));
        buf.push(alphabet.digit(usize::from(self.cycle).min(BASE - 1)));
        Ok(())
    }
}

impl Read for Intercept {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let alphabet = codec.alphabet();
        let unum = alphabet.read_digit(reader)?;
        if unum == 0 || unum > usize::from(UNUM_MAX) {
            return Err(Error::InvalidData("intercept", format!("unum {unum}")));
        }
        let cycle = alphabet.read_digit(reader)?.saturating_sub(1);
        Ok(Self {
            unum: unum as u8,
            cycle: cycle as u8,
        })
    }
}

impl_message!(Intercept, header::INTERCEPT, 3);
