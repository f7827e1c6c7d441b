use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::{
        geometry::Vector2,
        radix::{Field, Packer, Unpacker},
    },
};

/// Fields of one player, in packing order.
const FIELDS: [Field; 3] = [
    Field::int("unum", 22, 1),
    Field::real("x", 168, 0.63, -52.5),
    Field::real("y", 109, 0.63, -34.0),
];

/// Characters used by each player.
const WIDTH: usize = 3;

/// A player seen on the pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Player {
    /// Uniform number, opponents offset by 11 (`1..=22`).
    pub unum: u8,
    pub pos: Vector2,
}

impl Player {
    fn pack(&self, packer: &mut Packer) -> Result<(), EncodeError> {
        let [unum, x, y] = &FIELDS;
        packer
            .push(unum, f64::from(self.unum))?
            .push(x, self.pos.x)?
            .push(y, self.pos.y)?;
        Ok(())
    }

    fn unpack(unpacker: &mut Unpacker) -> Self {
        let [unum, x, y] = &FIELDS;
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.pop(x);
        Self {
            unum: unpacker.pop_int(unum),
            pos: Vector2::new(pos_x, pos_y),
        }
    }
}

/// `N` players packed into one integer (`N` in `1..=3`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Players<const N: usize>(pub [Player; N]);

/// A single player ([header::ONE_PLAYER]).
pub type OnePlayer = Players<1>;

/// Two players ([header::TWO_PLAYER]).
pub type TwoPlayer = Players<2>;

/// Three players ([header::THREE_PLAYER]).
pub type ThreePlayer = Players<3>;

impl<const N: usize> Default for Players<N> {
    fn default() -> Self {
        Self([Player::default(); N])
    }
}

impl<const N: usize> Write for Players<N> {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let mut packer = Packer::new();
        for player in &self.0 {
            player.pack(&mut packer)?;
        }
        codec.alphabet().write_int(packer.finish(), N * WIDTH, buf)
    }
}

impl<const N: usize> Read for Players<N> {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let mut unpacker = Unpacker::new(codec.alphabet().read_int(reader, N * WIDTH)?);
        let mut players = [Player::default(); N];
        for player in players.iter_mut().rev() {
            *player = Player::unpack(&mut unpacker);
        }
        Ok(Self(players))
    }
}

impl_message!(OnePlayer, header::ONE_PLAYER, 4);
impl_message!(TwoPlayer, header::TWO_PLAYER, 7);
impl_message!(ThreePlayer, header::THREE_PLAYER, 10);
