use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::{
        geometry::Vector2,
        radix::{Field, Packer, Unpacker},
    },
};

/// Fields of a dribble, in packing order. `x` is the highest priority field and takes whatever
/// remains after the others are extracted.
const FIELDS: [Field; 3] = [
    Field::real("x", 211, 0.5, -52.5),
    Field::real("y", 136, 0.5, -34.0),
    Field::int("queue", 10, 1),
];

const WIDTH: usize = 3;

/// The sender's dribble target and the number of queued dash/turn actions to reach it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dribble {
    pub target: Vector2,
    /// Queued actions (`1..=10`).
    pub queue: u8,
}

impl Write for Dribble {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let [x, y, queue] = &FIELDS;
        let value = Packer::new()
            .push(x, self.target.x)?
            .push(y, self.target.y)?
            .push(queue, f64::from(self.queue))?
            .finish();
        codec.alphabet().write_int(value, WIDTH, buf)
    }
}

impl Read for Dribble {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let [x, y, queue] = &FIELDS;
        let mut unpacker = Unpacker::new(codec.alphabet().read_int(reader, WIDTH)?);
        let queue = unpacker.pop_int(queue);
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.rest(x);
        Ok(Self {
            target: Vector2::new(pos_x, pos_y),
            queue,
        })
    }
}

impl_message!(Dribble, header::DRIBBLE, 4);
