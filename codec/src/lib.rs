//! Encode and decode messages on a length-capped say channel.
//!
//! # Overview
//!
//! Agents share facts (ball state, player positions, intercept estimates, stamina, free text)
//! over a text channel that carries only a handful of characters per cycle. This crate packs
//! those facts into printable characters and recovers them bit-exactly on the other side:
//! - Integers are written in a base-74 numeral system over an [Alphabet]
//! - Bounded real values are quantized to one or two characters
//! - Positions and velocities are bit-packed into 18, 19 or 31 bits
//! - Multi-field payloads are packed into one mixed-radix integer
//!
//! Every peer must use the same [Config]: a mismatch silently decodes to wrong values.
//!
//! # Messages
//!
//! Each message type implements [Write] and [Read] for its payload and [Wire] for its header
//! and length, which provides [Encode] and [Decode]. [Message] wraps all of them and dispatches
//! on the header character.
//!
//! # Example
//!
//! ```
//! use hearsay_codec::{message::Ball, Codec, Decode, Encode, Message, Vector2};
//!
//! let codec = Codec::default();
//! let ball = Ball {
//!     pos: Vector2::new(-10.0, 5.0),
//!     vel: Vector2::new(1.0, 0.0),
//! };
//!
//! // Messages are concatenated on the channel
//! let mut text = ball.encode(&codec).unwrap();
//! text.push('w');
//! assert_eq!(text.len(), 7);
//!
//! // Decoding consumes exactly one message
//! let (heard, consumed) = Ball::decode(&codec, &text).unwrap();
//! assert_eq!(consumed, 6);
//! assert!((heard.pos.x + 10.0).abs() < 0.06);
//!
//! // The rest is a wait request
//! let (message, consumed) = Message::decode(&codec, &text[consumed..]).unwrap();
//! assert_eq!(consumed, 1);
//! assert_eq!(message.header(), 'w');
//! ```
//!
//! # Custom Payloads
//!
//! ```
//! use hearsay_codec::{
//!     radix::{Field, Packer, Unpacker},
//!     Codec,
//! };
//!
//! const FIELDS: [Field; 2] = [Field::int("unum", 11, 1), Field::angle("body", 180, 2.0)];
//!
//! let codec = Codec::default();
//! let [unum, body] = &FIELDS;
//! let value = Packer::new()
//!     .push(unum, 7.0)
//!     .unwrap()
//!     .push(body, 90.0)
//!     .unwrap()
//!     .finish();
//! let text = codec.alphabet().encode_int(value, 2).unwrap();
//!
//! let mut unpacker = Unpacker::new(codec.alphabet().decode_int(&text).unwrap());
//! assert_eq!(unpacker.pop(body), 90.0);
//! assert_eq!(unpacker.pop_int(unum), 7);
//! ```

pub mod alphabet;
pub mod codec;
pub mod config;
pub mod error;
pub mod message;
pub mod numeral;
pub mod types;

// Re-export main types and traits
pub use alphabet::{Alphabet, BASE};
pub use codec::{Codec, Decode, Encode, Read, Reader, Wire, Write};
pub use config::Config;
pub use error::{EncodeError, Error};
pub use message::Message;
pub use types::{geometry, geometry::Vector2, primitives, radix};
