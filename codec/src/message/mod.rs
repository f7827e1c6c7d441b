//! Messages carried on the say channel.
//!
//! Every message starts with a one-character header followed by a payload of fixed length
//! (except [Free], which carries its own length). Messages are concatenated without separators,
//! so a decoder must consume exactly the characters that belong to it.
//!
//! [Message] wraps every message type and dispatches on the header character.

use crate::{
    codec::{Codec, Decode, Encode, Wire},
    error::{EncodeError, Error},
};

/// Header characters of every message.
pub mod header {
    pub const BALL: char = 'b';
    pub const PASS: char = 'p';
    pub const INTERCEPT: char = 'i';
    pub const GOALIE: char = 'g';
    pub const GOALIE_PLAYER: char = 'e';
    pub const OFFSIDE_LINE: char = 'o';
    pub const DEFENSE_LINE: char = 'd';
    pub const WAIT_REQUEST: char = 'w';
    pub const SETPLAY: char = 'F';
    pub const PASS_REQUEST: char = 'h';
    pub const RUN_REQUEST: char = 'x';
    pub const STAMINA: char = 's';
    pub const RECOVERY: char = 'r';
    pub const STAMINA_CAPACITY: char = 'c';
    pub const DRIBBLE: char = 'D';
    pub const BALL_GOALIE: char = 'G';
    pub const ONE_PLAYER: char = 'P';
    pub const TWO_PLAYER: char = 'Q';
    pub const THREE_PLAYER: char = 'R';
    pub const MYSELF: char = 'S';
    pub const TEAMMATE: char = 'T';
    pub const OPPONENT: char = 'O';
    pub const BALL_PLAYER: char = 'B';
    pub const FREE: char = 'f';
}

/// Implements [Wire] and [Encode] for a fixed-length message.
macro_rules! impl_message {
    ($ty:ty, $header:expr, $size:expr) => {
        impl $crate::codec::Wire for $ty {
            const HEADER: char = $header;
            const SIZE: usize = $size;
        }

        impl $crate::codec::Encode for $ty {}
    };
}

mod ball;
mod combo;
mod dribble;
mod free;
pub(crate) mod goalie;
mod intercept;
mod line;
mod myself;
mod pass;
mod player;
mod request;
mod stamina;
mod teammate;

pub use ball::Ball;
pub use combo::{BallGoalie, BallPlayer, GoaliePlayer};
pub use dribble::Dribble;
pub use free::{Free, FREE_MAX};
pub use goalie::Goalie;
pub use intercept::Intercept;
pub use line::{DefenseLine, OffsideLine};
pub use myself::Myself;
pub use pass::Pass;
pub use player::{OnePlayer, Player, Players, ThreePlayer, TwoPlayer};
pub use request::{PassRequest, RunRequest, Setplay, WaitRequest};
pub use stamina::{Recovery, Stamina, StaminaCapacity};
pub use teammate::{Opponent, Teammate};

macro_rules! messages {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// Any message that can be heard.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Message {
            $($variant($ty),)+
        }

        impl Message {
            /// Returns the header character of the wrapped message.
            pub fn header(&self) -> char {
                match self {
                    $(Self::$variant(_) => <$ty as Wire>::HEADER,)+
                }
            }

            /// Returns the name of the wrapped message type.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }

            /// Returns the encoded length of the wrapped message.
            pub fn len_encoded(&self) -> usize {
                match self {
                    $(Self::$variant(message) => message.len_encoded(),)+
                }
            }

            /// Encodes the wrapped message.
            pub fn encode(&self, codec: &Codec) -> Result<String, EncodeError> {
                match self {
                    $(Self::$variant(message) => message.encode(codec),)+
                }
            }

            /// Decodes the message at the start of `text`, selected by its header character.
            ///
            /// Returns [Error::HeaderMismatch] with `expected: None` if no message uses the
            /// header.
            pub fn decode(codec: &Codec, text: &str) -> Result<(Self, usize), Error> {
                let found = text.chars().next();
                match found {
                    $(Some(c) if c == <$ty as Wire>::HEADER => {
                        let (message, consumed) = <$ty as Decode>::decode(codec, text)?;
                        Ok((Self::$variant(message), consumed))
                    })+
                    _ => Err(Error::HeaderMismatch {
                        expected: None,
                        found,
                    }),
                }
            }
        }

        $(
            impl From<$ty> for Message {
                fn from(message: $ty) -> Self {
                    Self::$variant(message)
                }
            }
        )+
    };
}

messages! {
    Ball(Ball),
    Pass(Pass),
    Intercept(Intercept),
    Goalie(Goalie),
    GoaliePlayer(GoaliePlayer),
    OffsideLine(OffsideLine),
    DefenseLine(DefenseLine),
    WaitRequest(WaitRequest),
    Setplay(Setplay),
    PassRequest(PassRequest),
    RunRequest(RunRequest),
    Stamina(Stamina),
    Recovery(Recovery),
    StaminaCapacity(StaminaCapacity),
    Dribble(Dribble),
    BallGoalie(BallGoalie),
    OnePlayer(OnePlayer),
    TwoPlayer(TwoPlayer),
    ThreePlayer(ThreePlayer),
    Myself(Myself),
    Teammate(Teammate),
    Opponent(Opponent),
    BallPlayer(BallPlayer),
    Free(Free),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alphabet::{Alphabet, BASE},
        config::Config,
        types::geometry::Vector2,
    };
    use std::collections::HashSet;
    use test_case::test_case;

    fn samples() -> Vec<Message> {
        let pos = Vector2::new(-12.0, 8.5);
        let ball = Ball {
            pos,
            vel: Vector2::new(1.5, -0.5),
        };
        let goalie = Goalie {
            pos: Vector2::new(50.0, 1.0),
            body: 170.0,
        };
        let player = Player { unum: 16, pos };
        vec![
            ball.into(),
            Pass {
                receiver: 9,
                target: pos,
                ball,
            }
            .into(),
            Intercept { unum: 4, cycle: 3 }.into(),
            goalie.into(),
            GoaliePlayer { goalie, player }.into(),
            OffsideLine { x: 30.0 }.into(),
            DefenseLine { x: -30.0 }.into(),
            WaitRequest.into(),
            Setplay { wait_step: 5 }.into(),
            PassRequest { target: pos }.into(),
            RunRequest {
                runner: 11,
                target: pos,
            }
            .into(),
            Stamina { value: 6000.0 }.into(),
            Recovery { value: 0.9 }.into(),
            StaminaCapacity { value: 90000.0 }.into(),
            Dribble {
                target: pos,
                queue: 2,
            }
            .into(),
            BallGoalie { ball, goalie }.into(),
            Players([player]).into(),
            Players([player; 2]).into(),
            Players([player; 3]).into(),
            Myself {
                pos,
                body: 12.0,
                stamina: 7000.0,
            }
            .into(),
            Teammate {
                unum: 2,
                pos,
                body: 0.0,
            }
            .into(),
            Opponent {
                unum: 13,
                pos,
                body: 0.0,
            }
            .into(),
            BallPlayer {
                ball,
                player,
                body: -44.0,
            }
            .into(),
            Free {
                text: "hello".to_string(),
            }
            .into(),
        ]
    }

    #[test]
    fn test_headers_unique() {
        let samples = samples();
        let headers: HashSet<char> = samples.iter().map(Message::header).collect();
        assert_eq!(headers.len(), samples.len());
        let alphabet = Alphabet::default();
        for header in headers {
            assert!(alphabet.contains(header));
        }
    }

    #[test]
    fn test_encoded_lengths() {
        let codec = Codec::default();
        for message in samples() {
            let encoded = message.encode(&codec).unwrap();
            assert_eq!(encoded.len(), message.len_encoded(), "{}", message.kind());
            assert!(encoded.starts_with(message.header()));
        }
    }

    #[test_case(0; "unshifted")]
    #[test_case(5; "shifted")]
    #[test_case(BASE - 1; "shifted by base minus one")]
    fn test_decode_dispatch(shift: usize) {
        let codec = Codec::new(Config {
            shift,
            ..Config::default()
        });
        for message in samples() {
            let encoded = message.encode(&codec).unwrap();
            let (decoded, consumed) = Message::decode(&codec, &encoded).unwrap();
            assert_eq!(consumed, encoded.len());
            assert_eq!(decoded.kind(), message.kind());
            if matches!(message, Message::Intercept(_)) {
                // Heard cycles are one less than said.
                continue;
            }
            // Decoded values are quantized, so they encode to the same text.
            assert_eq!(decoded.encode(&codec).unwrap(), encoded, "{}", message.kind());
        }
    }

    #[test]
    fn test_shifted_digits() {
        let shifted = Codec::new(Config {
            shift: 5,
            ..Config::default()
        });
        let codec = Codec::default();

        // Digit d is written as the character of d + 5
        let intercept: Message = Intercept { unum: 4, cycle: 3 }.into();
        assert_eq!(intercept.encode(&shifted).unwrap(), "i98");
        assert_eq!(
            Message::decode(&shifted, "i98").unwrap(),
            (Intercept { unum: 4, cycle: 2 }.into(), 3)
        );
        assert_eq!(
            Message::decode(&codec, "i98").unwrap().0,
            Intercept { unum: 9, cycle: 7 }.into()
        );

        let setplay: Message = Setplay { wait_step: 5 }.into();
        assert_eq!(setplay.encode(&shifted).unwrap(), "FA");
        assert_eq!(Message::decode(&shifted, "FA").unwrap(), (setplay.clone(), 2));
        assert_ne!(Message::decode(&codec, "FA").unwrap().0, setplay);

        // Uniform numbers of run requests do not rotate
        let run = RunRequest {
            runner: 11,
            target: Vector2::new(10.0, 10.0),
        };
        assert!(run.encode(&shifted).unwrap().starts_with("xB"));
    }

    #[test]
    fn test_decode_concatenated() {
        let codec = Codec::default();
        let samples = samples();
        let mut text = String::new();
        for message in &samples {
            text.push_str(&message.encode(&codec).unwrap());
        }

        let mut offset = 0;
        let mut kinds = Vec::new();
        while offset < text.len() {
            let (message, consumed) = Message::decode(&codec, &text[offset..]).unwrap();
            kinds.push(message.kind());
            offset += consumed;
        }
        assert_eq!(offset, text.len());
        assert_eq!(
            kinds,
            samples.iter().map(Message::kind).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_unknown_header() {
        let codec = Codec::default();
        assert_eq!(
            Message::decode(&codec, "z123"),
            Err(Error::HeaderMismatch {
                expected: None,
                found: Some('z')
            })
        );
        assert_eq!(
            Message::decode(&codec, ""),
            Err(Error::HeaderMismatch {
                expected: None,
                found: None
            })
        );
        assert!(Message::decode(&codec, "b12").unwrap_err().is_malformed());
    }
}
