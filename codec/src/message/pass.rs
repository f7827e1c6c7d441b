use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::{header, Ball},
    types::{
        geometry::{pack_pos19, unpack_pos19, Vector2, POS19_WIDTH},
        radix::{Field, Packer, Unpacker},
    },
};

const POSITION: Field = Field::int("receive position", 1 << 19, 0);
const RECEIVER: Field = Field::int("receiver", 11, 1);

/// A pass: the receiver, where it should receive the ball, and the ball after the kick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pass {
    pub receiver: u8,
    pub target: Vector2,
    pub ball: Ball,
}

impl Write for Pass {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let value = Packer::new()
            .push_index(&POSITION, pack_pos19(self.target)?)?
            .push(&RECEIVER, f64::from(self.receiver))?
            .finish();
        codec.alphabet().write_int(value, POS19_WIDTH, buf)?;
        self.ball.write(codec, buf)
    }
}

impl Read for Pass {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let mut unpacker = Unpacker::new(codec.alphabet().read_int(reader, POS19_WIDTH)?);
        let receiver = unpacker.pop_int(&RECEIVER);
        let target = unpack_pos19(unpacker.remaining())?;
        let ball = Ball::read(codec, reader)?;
        Ok(Self {
            receiver,
            target,
            ball,
        })
    }
}

impl_message!(Pass, header::PASS, 10);
