use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::{
        geometry::Vector2,
        radix::{Field, Packer, Unpacker},
    },
};

/// Fields of the sender's own state, in packing order (stamina follows, see [stamina_field]).
const FIELDS: [Field; 3] = [
    Field::real("x", 264, 0.4, -52.5),
    Field::real("y", 171, 0.4, -34.0),
    Field::angle("body", 60, 6.0),
];

/// Number of stamina levels.
const STAMINA_RADIX: u64 = 11;

const WIDTH: usize = 4;

/// Stamina is sent in tenths of the agreed maximum.
fn stamina_field(stamina_max: f64) -> Field {
    Field::real(
        "stamina",
        STAMINA_RADIX,
        stamina_max / (STAMINA_RADIX - 1) as f64,
        0.0,
    )
}

/// The sender's own position, body direction and stamina.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Myself {
    pub pos: Vector2,
    /// Body direction in degrees.
    pub body: f64,
    pub stamina: f64,
}

impl Write for Myself {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let [x, y, body] = &FIELDS;
        let value = Packer::new()
            .push(x, self.pos.x)?
            .push(y, self.pos.y)?
            .push(body, self.body)?
            .push(&stamina_field(codec.config().stamina_max), self.stamina)?
            .finish();
        codec.alphabet().write_int(value, WIDTH, buf)
    }
}

impl Read for Myself {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let [x, y, body] = &FIELDS;
        let mut unpacker = Unpacker::new(codec.alphabet().read_int(reader, WIDTH)?);
        let stamina = unpacker.pop(&stamina_field(codec.config().stamina_max));
        let body = unpacker.pop(body);
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.pop(x);
        Ok(Self {
            pos: Vector2::new(pos_x, pos_y),
            body,
            stamina,
        })
    }
}

impl_message!(Myself, header::MYSELF, 5);
