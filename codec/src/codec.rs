//! Core codec traits and implementations

use crate::{
    alphabet::Alphabet,
    config::Config,
    error::{EncodeError, Error},
};

/// Encoder and decoder state shared by every message type.
///
/// A [Codec] is immutable after construction and may be shared freely between callers.
#[derive(Clone, Debug)]
pub struct Codec {
    alphabet: Alphabet,
    cfg: Config,
}

impl Codec {
    /// Create a new [Codec] from the provided configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            alphabet: Alphabet::new(cfg.shift),
            cfg,
        }
    }

    /// Returns the alphabet used for all digits.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the configuration the codec was created with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Cursor over heard text.
///
/// All characters of a well-formed message are ASCII, so offsets are counted in bytes.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a new [Reader] positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Returns the number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.text.len() - self.offset
    }

    /// Returns the number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }

    /// Consume the next `n` characters.
    pub fn take(&mut self, n: usize) -> Result<&'a str, Error> {
        let rest = &self.text[self.offset..];
        if rest.len() < n {
            return Err(Error::EndOfText {
                needed: n,
                remaining: rest.len(),
            });
        }
        match rest.get(..n) {
            Some(taken) => {
                self.offset += n;
                Ok(taken)
            }
            None => {
                // Split inside a multi-byte character.
                let c = rest.chars().find(|c| !c.is_ascii()).unwrap_or_default();
                Err(Error::InvalidChar(c))
            }
        }
    }

    /// Consume the next character.
    pub fn next_char(&mut self) -> Result<char, Error> {
        let c = self.text[self.offset..]
            .chars()
            .next()
            .ok_or(Error::EndOfText {
                needed: 1,
                remaining: 0,
            })?;
        self.offset += c.len_utf8();
        Ok(c)
    }
}

/// Trait for types that can be written (said) as a payload.
pub trait Write {
    /// Appends the payload (without header) of this value to `buf`.
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError>;
}

/// Trait for types that can be read (heard) from a payload.
pub trait Read: Sized {
    /// Reads a value from the payload, consuming exactly the characters that belong to it.
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error>;
}

/// Trait for message types carried on the say channel.
pub trait Wire {
    /// The character that introduces the message.
    const HEADER: char;

    /// The encoded length (header included).
    ///
    /// For variable-length messages this is the minimum length.
    const SIZE: usize;
}

/// Trait for messages that can be encoded to a complete wire fragment.
pub trait Encode: Write + Wire {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of characters that `encode()` produces.
    fn len_encoded(&self) -> usize {
        Self::SIZE
    }

    /// Encodes a value (header followed by payload).
    ///
    /// (Provided method).
    fn encode(&self, codec: &Codec) -> Result<String, EncodeError> {
        let len = self.len_encoded();
        let mut buf = String::with_capacity(len);
        buf.push(Self::HEADER);
        self.write(codec, &mut buf)?;
        debug_assert_eq!(buf.len(), len, "write() did not write expected characters");
        Ok(buf)
    }
}

/// Trait for messages that can be decoded from the start of heard text.
pub trait Decode: Read + Wire {
    /// Decodes a value from the start of `text`, returning it with the number of characters
    /// consumed. Trailing text is left for the next message.
    ///
    /// (Provided method).
    fn decode(codec: &Codec, text: &str) -> Result<(Self, usize), Error> {
        let found = text.chars().next();
        if found != Some(Self::HEADER) {
            return Err(Error::HeaderMismatch {
                expected: Some(Self::HEADER),
                found,
            });
        }
        if text.len() < Self::SIZE {
            return Err(Error::EndOfText {
                needed: Self::SIZE,
                remaining: text.len(),
            });
        }

        let mut reader = Reader::new(text);
        reader.take(1)?;
        let value = Self::read(codec, &mut reader)?;
        Ok((value, reader.consumed()))
    }
}

// Automatically implement `Decode` for types that implement `Read` and `Wire`.
impl<T: Read + Wire> Decode for T {}
