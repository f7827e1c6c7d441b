//! Record facts heard on the say channel.
//!
//! # Overview
//!
//! [Memory] keeps one [Channel] per category of fact (ball, pass, intercepts, player sightings,
//! requests, stamina, free text). A channel holds the records of the latest tick it was written:
//! records of the same tick accumulate (several teammates may report the ball) while the first
//! record of a new tick discards the rest. Player sightings are additionally kept in a bounded
//! history that spans ticks.
//!
//! [Dispatcher] feeds a [Memory] from heard text, decoding concatenated messages with a
//! [hearsay_codec::Codec].
//!
//! The store never validates and never fails: it trusts the codec.
//!
//! # Example
//!
//! ```
//! use hearsay_codec::{message::Ball, Encode, Vector2};
//! use hearsay_memory::{Dispatcher, Memory};
//!
//! let dispatcher = Dispatcher::default();
//! let mut memory = Memory::default();
//!
//! let ball = Ball {
//!     pos: Vector2::new(10.0, -3.0),
//!     vel: Vector2::new(0.5, 0.5),
//! };
//! let text = ball.encode(dispatcher.codec()).unwrap() + "w";
//!
//! let report = dispatcher.hear(&mut memory, 4, &text, 100);
//! assert_eq!(report.consumed, 7);
//! assert_eq!(memory.ball()[0].sender, 4);
//! assert!(memory.updated(memory.wait_request_tick()));
//! ```

mod channel;
pub mod dispatch;
mod memory;
pub mod record;

pub use channel::Channel;
pub use dispatch::{Dispatcher, Report};
pub use memory::{Config, Memory};

/// A simulation cycle.
pub type Tick = u64;
