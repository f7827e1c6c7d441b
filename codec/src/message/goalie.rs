use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::{
        geometry::Vector2,
        radix::{Field, Packer, Unpacker},
    },
};

/// Fields of an opponent goalie, in packing order. The goalie is assumed to guard the goal at
/// positive x.
pub(crate) const FIELDS: [Field; 3] = [
    Field::real("goalie.x", 160, 0.1, 37.0),
    Field::real("goalie.y", 400, 0.1, -20.0),
    Field::angle("goalie.body", 360, 1.0),
];

const WIDTH: usize = 4;

/// Opponent goalie position and body direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Goalie {
    pub pos: Vector2,
    /// Body direction in degrees.
    pub body: f64,
}

impl Goalie {
    pub(crate) fn pack(&self, packer: &mut Packer) -> Result<(), EncodeError> {
        let [x, y, body] = &FIELDS;
        packer
            .push(x, self.pos.x)?
            .push(y, self.pos.y)?
            .push(body, self.body)?;
        Ok(())
    }

    pub(crate) fn unpack(unpacker: &mut Unpacker) -> Self {
        let [x, y, body] = &FIELDS;
        let body = unpacker.pop(body);
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.pop(x);
        Self {
            pos: Vector2::new(pos_x, pos_y),
            body,
        }
    }
}

impl Write for Goalie {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let mut packer = Packer::new();
        self.pack(&mut packer)?;
        codec.alphabet().write_int(packer.finish(), WIDTH, buf)
    }
}

impl Read for Goalie {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let mut unpacker = Unpacker::new(codec.alphabet().read_int(reader, WIDTH)?);
        Ok(Self::unpack(&mut unpacker))
    }
}

impl_message!(Goalie, header::GOALIE, 5);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{numeral::limit, types::radix::capacity, Decode, Encode};

    #[test]
    fn test_capacity() {
        assert!(capacity(&FIELDS).unwrap() <= limit(WIDTH).unwrap());
    }

    #[test]
    fn test_round_trip() {
        let codec = Codec::default();
        let goalie = Goalie {
            pos: Vector2::new(49.5, -3.2),
            body: 91.0,
        };
        let encoded = goalie.encode(&codec).unwrap();
        assert_eq!(encoded.len(), 5);

        let (decoded, consumed) = Goalie::decode(&codec, &encoded).unwrap();
        assert_eq!(consumed, 5);
        let [x, y, _] = &FIELDS;
        assert_eq!(decoded.pos.x, x.value(x.index(49.5).unwrap()));
        assert_eq!(decoded.pos.y, y.value(y.index(-3.2).unwrap()));
        assert_eq!(decoded.body, 91.0);
        assert!((decoded.pos.x - 49.5).abs() < 0.051);
        assert!((decoded.pos.y + 3.2).abs() < 0.051);
    }

    #[test]
    fn test_clamped() {
        let codec = Codec::default();
        let goalie = Goalie {
            pos: Vector2::new(30.0, 25.0),
            body: 180.0,
        };
        let (decoded, _) = Goalie::decode(&codec, &goalie.encode(&codec).unwrap()).unwrap();
        assert_eq!(decoded.pos.x, 37.0);
        assert_eq!(decoded.pos.y, 399.0 * 0.1 - 20.0);
        assert_eq!(decoded.body, -180.0);
    }
}
