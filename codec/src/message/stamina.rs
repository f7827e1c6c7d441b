//! Stamina family: each value is sent as a one-character percentage of its configured range.

use crate::{
    codec::{Codec, Read, Reader, Write},
    config::Config,
    error::{EncodeError, Error},
    message::header,
};

/// Writes `(value - min) / (max - min)`, clamped to `[0, 1]`, as a percentage.
fn write_rate(codec: &Codec, (min, max): (f64, f64), value: f64, buf: &mut String) -> Result<(), EncodeError> {
    let rate = ((value - min) / (max - min)).clamp(0.0, 1.0);
    buf.push(codec.alphabet().encode_percentage(rate)?);
    Ok(())
}

fn read_rate(codec: &Codec, (min, max): (f64, f64), reader: &mut Reader<'_>) -> Result<f64, Error> {
    let rate = codec.alphabet().decode_percentage(reader.next_char()?)?;
    Ok(min + rate * (max - min))
}

macro_rules! impl_rate {
    ($ty:ident, $header:expr, $range:expr) => {
        impl Write for $ty {
            fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
                let range: fn(&Config) -> (f64, f64) = $range;
                write_rate(codec, range(codec.config()), self.value, buf)
            }
        }

        impl Read for $ty {
            fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
                let range: fn(&Config) -> (f64, f64) = $range;
                Ok(Self {
                    value: read_rate(codec, range(codec.config()), reader)?,
                })
            }
        }

        impl_message!($ty, $header, 2);
    };
}

/// The sender's current stamina.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stamina {
    pub value: f64,
}

impl_rate!(Stamina, header::STAMINA, |cfg| (0.0, cfg.stamina_max));

/// The sender's current recovery rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Recovery {
    pub value: f64,
}

impl_rate!(Recovery, header::RECOVERY, |cfg| (cfg.recover_min, 1.0));

/// The sender's remaining stamina capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaminaCapacity {
    pub value: f64,
}

impl_rate!(StaminaCapacity, header::STAMINA_CAPACITY, |cfg| (
    0.0,
    cfg.stamina_capacity
));
