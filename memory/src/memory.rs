use crate::{channel::Channel, record::*, Tick};
use paste::paste;
use std::collections::VecDeque;
use tracing::trace;

/// Uniform numbers above this belong to opponents.
const TEAM_SIZE: u8 = 11;

/// Configuration for [Memory].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of player sightings kept in the history, across ticks.
    pub history: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { history: 30 }
    }
}

macro_rules! categories {
    ($($name:ident: $record:ty),+ $(,)?) => {
        paste! {
            /// Facts heard from teammates, one [Channel] per category.
            ///
            /// Every write also advances [Memory::time]. A consumer checks whether a category was
            /// heard in the latest tick with [Memory::updated].
            #[derive(Clone, Debug)]
            pub struct Memory {
                cfg: Config,
                time: Option<Tick>,
                player: Channel<Player>,
                history: VecDeque<(Tick, Player)>,
                $($name: Channel<$record>,)+
            }

            impl Memory {
                /// Create an empty [Memory].
                pub fn new(cfg: Config) -> Self {
                    Self {
                        history: VecDeque::with_capacity(cfg.history),
                        cfg,
                        time: None,
                        player: Channel::new(),
                        $($name: Channel::new(),)+
                    }
                }

                $(
                    #[doc = "Records a `" $name "` fact heard at `tick`."]
                    pub fn [<record_ $name>](&mut self, record: $record, tick: Tick) {
                        self.touch(tick);
                        self.$name.push(tick, record);
                    }

                    #[doc = "Returns the `" $name "` facts of the latest tick they were heard."]
                    pub fn $name(&self) -> &[$record] {
                        self.$name.records()
                    }

                    #[doc = "Returns the tick `" $name "` facts were last heard."]
                    pub fn [<$name _tick>](&self) -> Option<Tick> {
                        self.$name.tick()
                    }
                )+
            }
        }
    };
}

categories! {
    ball: Ball,
    pass: Pass,
    our_intercept: Intercept,
    opp_intercept: Intercept,
    goalie: Goalie,
    offside_line: Line,
    defense_line: Line,
    wait_request: Wait,
    setplay: Setplay,
    pass_request: PassRequest,
    run_request: RunRequest,
    stamina: Stamina,
    recovery: Recovery,
    stamina_capacity: StaminaCapacity,
    dribble: Dribble,
    free: Free,
}

impl Memory {
    /// Returns the last tick anything was recorded.
    pub fn time(&self) -> Option<Tick> {
        self.time
    }

    /// Returns `true` if `tick` (a category tick) is the last tick anything was recorded.
    pub fn updated(&self, tick: Option<Tick>) -> bool {
        tick.is_some() && tick == self.time
    }

    /// Records an intercept estimate with `unum` in `1..=22` on the channel of its side.
    ///
    /// Opponent uniform numbers are stored without their offset.
    pub fn record_intercept(&mut self, mut record: Intercept, tick: Tick) {
        if record.unum > TEAM_SIZE {
            record.unum -= TEAM_SIZE;
            self.record_opp_intercept(record, tick);
        } else {
            self.record_our_intercept(record, tick);
        }
    }

    /// Records a player sighting heard at `tick`, also appending it to the history.
    pub fn record_player(&mut self, record: Player, tick: Tick) {
        self.touch(tick);
        self.player.push(tick, record);
        if self.cfg.history == 0 {
            return;
        }
        if self.history.len() == self.cfg.history {
            self.history.pop_front();
        }
        self.history.push_back((tick, record));
    }

    /// Returns the player sightings of the latest tick they were heard.
    pub fn player(&self) -> &[Player] {
        self.player.records()
    }

    /// Returns the tick player sightings were last heard.
    pub fn player_tick(&self) -> Option<Tick> {
        self.player.tick()
    }

    /// Iterate over the retained player sightings, oldest first.
    pub fn player_history(&self) -> impl Iterator<Item = &(Tick, Player)> + '_ {
        self.history.iter()
    }

    fn touch(&mut self, tick: Tick) {
        if self.time != Some(tick) {
            trace!(tick, "first record of tick");
        }
        self.time = Some(tick);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
