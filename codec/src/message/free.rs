use crate::{
    alphabet::BASE,
    codec::{Codec, Encode, Read, Reader, Wire, Write},
    error::{EncodeError, Error},
    message::header,
};

/// Longest free text that fits the one-digit length prefix.
pub const FREE_MAX: usize = BASE - 1;

/// Free text made of alphabet characters, prefixed by its length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Free {
    pub text: String,
}

impl Write for Free {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let alphabet = codec.alphabet();
        let len = self.text.chars().count();
        if len == 0 || len > FREE_MAX {
            return Err(EncodeError::OutOfRange {
                field: "free text length",
                value: len as f64,
            });
        }
        if let Some(c) = self.text.chars().find(|&c| !alphabet.contains(c)) {
            return Err(EncodeError::InvalidChar(c));
        }
        buf.push(alphabet.digit(len));
        buf.push_str(&self.text);
        Ok(())
    }
}

impl Read for Free {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let alphabet = codec.alphabet();
        let len = alphabet.read_digit(reader)?;
        if len == 0 {
            return Err(Error::InvalidData("free text", "empty".to_string()));
        }
        let text = reader.take(len)?;
        if let Some(c) = text.chars().find(|&c| !alphabet.contains(c)) {
            return Err(Error::InvalidChar(c));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }
}

impl Wire for Free {
    const HEADER: char = header::FREE;
    const SIZE: usize = 3;
}

impl Encode for Free {
    fn len_encoded(&self) -> usize {
        2 + self.text.len()
    }
}
