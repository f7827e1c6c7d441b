//! Single-player sightings with body direction.

use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::{
        geometry::Vector2,
        radix::{Field, Packer, Unpacker},
    },
};

/// Fields in packing order. The uniform number is always sent in `1..=11`.
const FIELDS: [Field; 4] = [
    Field::int("unum", 11, 1),
    Field::real("x", 151, 0.7, -52.5),
    Field::real("y", 98, 0.7, -34.0),
    Field::angle("body", 180, 2.0),
];

const WIDTH: usize = 4;

/// Offset added to the wire uniform number of an opponent.
const OPPONENT_OFFSET: u8 = 11;

fn write_sighting(
    codec: &Codec,
    unum: u8,
    pos: Vector2,
    body: f64,
    buf: &mut String,
) -> Result<(), EncodeError> {
    let [u, x, y, b] = &FIELDS;
    let value = Packer::new()
        .push(u, f64::from(unum))?
        .push(x, pos.x)?
        .push(y, pos.y)?
        .push(b, body)?
        .finish();
    codec.alphabet().write_int(value, WIDTH, buf)
}

fn read_sighting(codec: &Codec, reader: &mut Reader<'_>) -> Result<(u8, Vector2, f64), Error> {
    let [u, x, y, b] = &FIELDS;
    let mut unpacker = Unpacker::new(codec.alphabet().read_int(reader, WIDTH)?);
    let body = unpacker.pop(b);
    let pos_y = unpacker.pop(y);
    let pos_x = unpacker.pop(x);
    let unum = unpacker.pop_int(u);
    Ok((unum, Vector2::new(pos_x, pos_y), body))
}

/// A teammate seen by the sender.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Teammate {
    /// Uniform number (`1..=11`).
    pub unum: u8,
    pub pos: Vector2,
    /// Body direction in degrees.
    pub body: f64,
}

impl Write for Teammate {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        write_sighting(codec, self.unum, self.pos, self.body, buf)
    }
}

impl Read for Teammate {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let (unum, pos, body) = read_sighting(codec, reader)?;
        Ok(Self { unum, pos, body })
    }
}

impl_message!(Teammate, header::TEAMMATE, 5);

/// An opponent seen by the sender.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Opponent {
    /// Uniform number offset by 11 (`12..=22`).
    pub unum: u8,
    pub pos: Vector2,
    /// Body direction in degrees.
    pub body: f64,
}

impl Write for Opponent {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        // Underflow maps to 0, which the unum field rejects.
        let unum = self.unum.saturating_sub(OPPONENT_OFFSET);
        write_sighting(codec, unum, self.pos, self.body, buf)
    }
}

impl Read for Opponent {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let (unum, pos, body) = read_sighting(codec, reader)?;
        Ok(Self {
            unum: unum + OPPONENT_OFFSET,
            pos,
            body,
        })
    }
}

impl_message!(Opponent, header::OPPONENT, 5);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{numeral::limit, types::radix::capacity, Decode, Encode};

    #[test]
    fn test_capacity() {
        assert!(capacity(&FIELDS).unwrap() <= limit(WIDTH).unwrap());
    }

    #[test]
    fn test_teammate() {
        let codec = Codec::default();
        let teammate = Teammate {
            unum: 7,
            pos: Vector2::new(7.0, -14.0),
            body: -92.0,
        };
        let encoded = teammate.encode(&codec).unwrap();
        assert_eq!(encoded.len(), 5);
        assert!(encoded.starts_with('T'));
        let (decoded, consumed) = Teammate::decode(&codec, &encoded).unwrap();
        assert_eq!(consumed, 5);
        let [_, x, y, _] = &FIELDS;
        assert_eq!(decoded.unum, 7);
        assert_eq!(decoded.pos.x, x.value(x.index(7.0).unwrap()));
        assert_eq!(decoded.pos.y, y.value(y.index(-14.0).unwrap()));
        assert_eq!(decoded.body, -92.0);
        assert!(Teammate { unum: 12, ..teammate }.encode(&codec).is_err());
    }

    #[test]
    fn test_opponent() {
        let codec = Codec::default();
        let opponent = Opponent {
            unum: 22,
            pos: Vector2::new(0.0, 0.0),
            body: 0.0,
        };
        let encoded = opponent.encode(&codec).unwrap();
        assert!(encoded.starts_with('O'));
        let (decoded, _) = Opponent::decode(&codec, &encoded).unwrap();
        assert_eq!(decoded.unum, 22);
        assert_eq!(decoded.body, 0.0);

        // Same payload as a teammate with the wire number.
        let teammate = Teammate {
            unum: 11,
            pos: opponent.pos,
            body: opponent.body,
        };
        assert_eq!(teammate.encode(&codec).unwrap()[1..], encoded[1..]);

        assert!(Opponent { unum: 11, ..opponent }.encode(&codec).is_err());
        assert!(Opponent { unum: 23, ..opponent }.encode(&codec).is_err());
    }
}
