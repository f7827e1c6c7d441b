//! Configuration shared by every peer on the channel.
//!
//! All values must be identical across agents at decode time: they size the quantization of
//! velocities and the percentage fields, and a mismatch silently decodes to wrong values.

/// Configuration for [crate::Codec].
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Cyclic rotation applied to the alphabet (digit `d` is written as `chars[(d + shift) % N]`).
    ///
    /// Every deployed format uses `0`. Non-zero values are experimental.
    pub shift: usize,

    /// Maximum ball speed, used to quantize ball velocities.
    pub ball_speed_max: f64,

    /// Maximum player speed.
    pub player_speed_max: f64,

    /// Maximum stamina of a player.
    pub stamina_max: f64,

    /// Lower bound of the recovery rate.
    pub recover_min: f64,

    /// Stamina capacity of a player at kick off.
    pub stamina_capacity: f64,

    /// Half the pitch length (x axis).
    pub pitch_half_length: f64,

    /// Half the pitch width (y axis).
    pub pitch_half_width: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shift: 0,
            ball_speed_max: 3.0,
            player_speed_max: 1.05,
            stamina_max: 8000.0,
            recover_min: 0.5,
            stamina_capacity: 130600.0,
            pitch_half_length: 52.5,
            pitch_half_width: 34.0,
        }
    }
}
