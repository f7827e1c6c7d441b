//! Split heard text into messages and record them.
//!
//! Messages are concatenated without separators. The [Dispatcher] decodes one message at a time
//! from the current offset, records it and advances by the characters it consumed. The first
//! unknown header or malformed message ends the text: nothing after it is recorded.

use crate::{record, Memory, Tick};
use hearsay_codec::{
    message::{Goalie, Player},
    Codec, Error, Message,
};
use tracing::{debug, warn};

/// Outcome of [Dispatcher::hear].
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Characters consumed by recorded messages.
    pub consumed: usize,
    /// Number of recorded messages.
    pub messages: usize,
    /// Error that stopped decoding, if the text was not consumed entirely.
    pub error: Option<Error>,
}

/// Decodes heard text into a [Memory].
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    codec: Codec,
}

impl Dispatcher {
    /// Create a new [Dispatcher] decoding with `codec`.
    pub fn new(codec: Codec) -> Self {
        Self { codec }
    }

    /// Returns the codec used for decoding.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Decodes every message in `text`, said by `sender` and heard at `tick`, into `memory`.
    pub fn hear(&self, memory: &mut Memory, sender: u8, text: &str, tick: Tick) -> Report {
        let mut report = Report {
            consumed: 0,
            messages: 0,
            error: None,
        };
        while report.consumed < text.len() {
            let rest = &text[report.consumed..];
            let (message, consumed) = match Message::decode(&self.codec, rest) {
                Ok(decoded) => decoded,
                Err(err) => {
                    if err.is_malformed() {
                        warn!(sender, tick, offset = report.consumed, ?err, "malformed message");
                    } else {
                        warn!(sender, tick, offset = report.consumed, ?err, "unknown header");
                    }
                    report.error = Some(err);
                    break;
                }
            };
            debug!(sender, tick, kind = message.kind(), consumed, "heard message");
            memory.apply(sender, message, tick);
            report.consumed += consumed;
            report.messages += 1;
        }
        report
    }
}

fn player(sender: u8, player: Player) -> record::Player {
    record::Player {
        sender,
        unum: player.unum,
        pos: player.pos,
        body: None,
        stamina: None,
    }
}

fn goalie(sender: u8, goalie: Goalie) -> record::Goalie {
    record::Goalie {
        sender,
        pos: goalie.pos,
        body: goalie.body,
    }
}

fn ball(sender: u8, ball: hearsay_codec::message::Ball) -> record::Ball {
    record::Ball {
        sender,
        pos: ball.pos,
        vel: ball.vel,
    }
}

impl Memory {
    /// Records every fact carried by `message`, said by `sender` and heard at `tick`.
    pub fn apply(&mut self, sender: u8, message: Message, tick: Tick) {
        match message {
            Message::Ball(m) => self.record_ball(ball(sender, m), tick),
            Message::Pass(m) => {
                self.record_pass(
                    record::Pass {
                        sender,
                        receiver: m.receiver,
                        target: m.target,
                    },
                    tick,
                );
                self.record_ball(ball(sender, m.ball), tick);
            }
            Message::Intercept(m) => self.record_intercept(
                record::Intercept {
                    sender,
                    unum: m.unum,
                    cycle: m.cycle,
                },
                tick,
            ),
            Message::Goalie(m) => self.record_goalie(goalie(sender, m), tick),
            Message::GoaliePlayer(m) => {
                self.record_goalie(goalie(sender, m.goalie), tick);
                self.record_player(player(sender, m.player), tick);
            }
            Message::OffsideLine(m) => {
                self.record_offside_line(record::Line { sender, x: m.x }, tick)
            }
            Message::DefenseLine(m) => {
                self.record_defense_line(record::Line { sender, x: m.x }, tick)
            }
            Message::WaitRequest(_) => self.record_wait_request(record::Wait { sender }, tick),
            Message::Setplay(m) => self.record_setplay(
                record::Setplay {
                    sender,
                    wait_step: m.wait_step,
                },
                tick,
            ),
            Message::PassRequest(m) => self.record_pass_request(
                record::PassRequest {
                    sender,
                    target: m.target,
                },
                tick,
            ),
            Message::RunRequest(m) => self.record_run_request(
                record::RunRequest {
                    sender,
                    runner: m.runner,
                    target: m.target,
                },
                tick,
            ),
            Message::Stamina(m) => self.record_stamina(
                record::Stamina {
                    sender,
                    value: m.value,
                },
                tick,
            ),
            Message::Recovery(m) => self.record_recovery(
                record::Recovery {
                    sender,
                    value: m.value,
                },
                tick,
            ),
            Message::StaminaCapacity(m) => self.record_stamina_capacity(
                record::StaminaCapacity {
                    sender,
                    value: m.value,
                },
                tick,
            ),
            Message::Dribble(m) => self.record_dribble(
                record::Dribble {
                    sender,
                    target: m.target,
                    queue: m.queue,
                },
                tick,
            ),
            Message::BallGoalie(m) => {
                self.record_ball(ball(sender, m.ball), tick);
                self.record_goalie(goalie(sender, m.goalie), tick);
            }
            Message::OnePlayer(m) => self.record_players(sender, &m.0, tick),
            Message::TwoPlayer(m) => self.record_players(sender, &m.0, tick),
            Message::ThreePlayer(m) => self.record_players(sender, &m.0, tick),
            Message::Myself(m) => self.record_player(
                record::Player {
                    sender,
                    unum: sender,
                    pos: m.pos,
                    body: Some(m.body),
                    stamina: Some(m.stamina),
                },
                tick,
            ),
            Message::Teammate(m) => self.record_player(
                record::Player {
                    sender,
                    unum: m.unum,
                    pos: m.pos,
                    body: Some(m.body),
                    stamina: None,
                },
                tick,
            ),
            Message::Opponent(m) => self.record_player(
                record::Player {
                    sender,
                    unum: m.unum,
                    pos: m.pos,
                    body: Some(m.body),
                    stamina: None,
                },
                tick,
            ),
            Message::BallPlayer(m) => {
                self.record_ball(ball(sender, m.ball), tick);
                self.record_player(
                    record::Player {
                        body: Some(m.body),
                        ..player(sender, m.player)
                    },
                    tick,
                );
            }
            Message::Free(m) => self.record_free(
                record::Free {
                    sender,
                    text: m.text,
                },
                tick,
            ),
        }
    }

    fn record_players(&mut self, sender: u8, players: &[Player], tick: Tick) {
        for &p in players {
            self.record_player(player(sender, p), tick);
        }
    }
}
