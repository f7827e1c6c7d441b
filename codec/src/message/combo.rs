//! Messages that carry facts about more than one object.

use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::{header, Ball, Goalie, Player},
    types::{
        geometry::Vector2,
        radix::{Field, Packer, Unpacker},
    },
};

/// Fields of the player in [GoaliePlayer], in packing order (after the goalie).
const GOALIE_PLAYER_FIELDS: [Field; 3] = [
    Field::int("unum", 22, 1),
    Field::real("x", 191, 0.555, -52.5),
    Field::real("y", 124, 0.555, -34.0),
];

const GOALIE_PLAYER_WIDTH: usize = 7;

/// Opponent goalie and one more player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GoaliePlayer {
    pub goalie: Goalie,
    pub player: Player,
}

impl Write for GoaliePlayer {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let [unum, x, y] = &GOALIE_PLAYER_FIELDS;
        let mut packer = Packer::new();
        self.goalie.pack(&mut packer)?;
        packer
            .push(unum, f64::from(self.player.unum))?
            .push(x, self.player.pos.x)?
            .push(y, self.player.pos.y)?;
        codec
            .alphabet()
            .write_int(packer.finish(), GOALIE_PLAYER_WIDTH, buf)
    }
}

impl Read for GoaliePlayer {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let [unum, x, y] = &GOALIE_PLAYER_FIELDS;
        let value = codec.alphabet().read_int(reader, GOALIE_PLAYER_WIDTH)?;
        let mut unpacker = Unpacker::new(value);
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.pop(x);
        let unum = unpacker.pop_int(unum);
        let goalie = Goalie::unpack(&mut unpacker);
        Ok(Self {
            goalie,
            player: Player {
                unum,
                pos: Vector2::new(pos_x, pos_y),
            },
        })
    }
}

impl_message!(GoaliePlayer, header::GOALIE_PLAYER, 8);

/// Fields of the ball position in [BallGoalie], in packing order.
const BALL_POS_FIELDS: [Field; 2] = [
    Field::real("ball.x", 1050, 0.1, -52.5),
    Field::real("ball.y", 680, 0.1, -34.0),
];

/// Radix of each ball velocity axis in [BallGoalie].
const BALL_VEL_RADIX: u64 = 63;

const BALL_GOALIE_WIDTH: usize = 9;

/// Fields of the ball velocity in [BallGoalie]. The step depends on the agreed maximum speed.
fn ball_vel_fields(speed_max: f64) -> [Field; 2] {
    let step = 2.0 * speed_max / BALL_VEL_RADIX as f64;
    [
        Field::real("ball.vx", BALL_VEL_RADIX, step, -speed_max),
        Field::real("ball.vy", BALL_VEL_RADIX, step, -speed_max),
    ]
}

/// Ball position and velocity with the opponent goalie.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BallGoalie {
    pub ball: Ball,
    pub goalie: Goalie,
}

impl Write for BallGoalie {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let [x, y] = &BALL_POS_FIELDS;
        let [vx, vy] = &ball_vel_fields(codec.config().ball_speed_max);
        let mut packer = Packer::new();
        packer
            .push(x, self.ball.pos.x)?
            .push(y, self.ball.pos.y)?
            .push(vx, self.ball.vel.x)?
            .push(vy, self.ball.vel.y)?;
        self.goalie.pack(&mut packer)?;
        codec
            .alphabet()
            .write_int(packer.finish(), BALL_GOALIE_WIDTH, buf)
    }
}

impl Read for BallGoalie {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let [x, y] = &BALL_POS_FIELDS;
        let [vx, vy] = &ball_vel_fields(codec.config().ball_speed_max);
        let value = codec.alphabet().read_int(reader, BALL_GOALIE_WIDTH)?;
        let mut unpacker = Unpacker::new(value);
        let goalie = Goalie::unpack(&mut unpacker);
        let vel_y = unpacker.pop(vy);
        let vel_x = unpacker.pop(vx);
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.pop(x);
        Ok(Self {
            ball: Ball {
                pos: Vector2::new(pos_x, pos_y),
                vel: Vector2::new(vel_x, vel_y),
            },
            goalie,
        })
    }
}

impl_message!(BallGoalie, header::BALL_GOALIE, 10);

/// Fields of the player in [BallPlayer], in packing order (after the ball).
const BALL_PLAYER_FIELDS: [Field; 4] = [
    Field::int("unum", 22, 1),
    Field::real("x", 106, 1.0, -52.5),
    Field::real("y", 69, 1.0, -34.0),
    Field::angle("body", 180, 2.0),
];

const BALL_PLAYER_WIDTH: usize = 4;

/// Ball position and velocity with one player and its body direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BallPlayer {
    pub ball: Ball,
    pub player: Player,
    /// Body direction of the player in degrees.
    pub body: f64,
}

impl Write for BallPlayer {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let [unum, x, y, body] = &BALL_PLAYER_FIELDS;
        self.ball.write(codec, buf)?;
        let value = Packer::new()
            .push(unum, f64::from(self.player.unum))?
            .push(x, self.player.pos.x)?
            .push(y, self.player.pos.y)?
            .push(body, self.body)?
            .finish();
        codec.alphabet().write_int(value, BALL_PLAYER_WIDTH, buf)
    }
}

impl Read for BallPlayer {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let [unum, x, y, body] = &BALL_PLAYER_FIELDS;
        let ball = Ball::read(codec, reader)?;
        let value = codec.alphabet().read_int(reader, BALL_PLAYER_WIDTH)?;
        let mut unpacker = Unpacker::new(value);
        let body = unpacker.pop(body);
        let pos_y = unpacker.pop(y);
        let pos_x = unpacker.pop(x);
        let unum = unpacker.pop_int(unum);
        Ok(Self {
            ball,
            player: Player {
                unum,
                pos: Vector2::new(pos_x, pos_y),
            },
            body,
        })
    }
}

impl_message!(BallPlayer, header::BALL_PLAYER, 10);
