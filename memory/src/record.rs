//! Facts stored per category. Every record carries the uniform number of the teammate that
//! said it.

use hearsay_codec::Vector2;

/// Ball position and velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub sender: u8,
    pub pos: Vector2,
    pub vel: Vector2,
}

/// A pass announced by the kicker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pass {
    pub sender: u8,
    pub receiver: u8,
    pub target: Vector2,
}

/// Fastest interceptor of one side.
///
/// `unum` is always in `1..=11`, the side is given by the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intercept {
    pub sender: u8,
    pub unum: u8,
    pub cycle: u8,
}

/// Opponent goalie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Goalie {
    pub sender: u8,
    pub pos: Vector2,
    pub body: f64,
}

/// A player sighting.
///
/// `unum` is in `1..=22` (opponents offset by 11). `body` and `stamina` are present only when the
/// message carried them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub sender: u8,
    pub unum: u8,
    pub pos: Vector2,
    pub body: Option<f64>,
    pub stamina: Option<f64>,
}

/// An offside or defense line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub sender: u8,
    pub x: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wait {
    pub sender: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Setplay {
    pub sender: u8,
    pub wait_step: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassRequest {
    pub sender: u8,
    pub target: Vector2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunRequest {
    pub sender: u8,
    pub runner: u8,
    pub target: Vector2,
}

/// Stamina of the sender.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stamina {
    pub sender: u8,
    pub value: f64,
}

/// Recovery rate of the sender.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recovery {
    pub sender: u8,
    pub value: f64,
}

/// Stamina capacity of the sender.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaminaCapacity {
    pub sender: u8,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dribble {
    pub sender: u8,
    pub target: Vector2,
    pub queue: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Free {
    pub sender: u8,
    pub text: String,
}
