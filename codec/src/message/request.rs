//! Requests and coordination signals between teammates.

use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::{
        geometry::Vector2,
        primitives::{hex_to_unum, unum_to_hex},
    },
};

/// Asks teammates to hold their position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaitRequest;

impl Write for WaitRequest {
    fn write(&self, _: &Codec, _: &mut String) -> Result<(), EncodeError> {
        Ok(())
    }
}

impl Read for WaitRequest {
    fn read(_: &Codec, _: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Self)
    }
}

impl_message!(WaitRequest, header::WAIT_REQUEST, 1);

/// Number of cycles to wait before a set play is taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Setplay {
    pub wait_step: u8,
}

impl Write for Setplay {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let c = codec
            .alphabet()
            .digit_to_char(usize::from(self.wait_step))
            .ok_or(EncodeError::OutOfRange {
                field: "wait step",
                value: f64::from(self.wait_step),
            })?;
        buf.push(c);
        Ok(())
    }
}

impl Read for Setplay {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let wait_step = codec.alphabet().read_digit(reader)?;
        Ok(Self {
            wait_step: wait_step as u8,
        })
    }
}

impl_message!(Setplay, header::SETPLAY, 2);

/// Asks the ball holder to pass to `target`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PassRequest {
    pub target: Vector2,
}

impl Write for PassRequest {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        codec.write_pos18(self.target, buf)
    }
}

impl Read for PassRequest {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Self {
            target: codec.read_pos18(reader)?,
        })
    }
}

impl_message!(PassRequest, header::PASS_REQUEST, 4);

/// Announces that `runner` will run towards `target`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunRequest {
    /// Uniform number of the runner (`1..=11`).
    pub runner: u8,
    pub target: Vector2,
}

impl Write for RunRequest {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        let c = unum_to_hex(self.runner).ok_or(EncodeError::OutOfRange {
            field: "runner",
            value: f64::from(self.runner),
        })?;
        buf.push(c);
        codec.write_pos18(self.target, buf)
    }
}

impl Read for RunRequest {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let c = reader.next_char()?;
        let runner =
            hex_to_unum(c).ok_or_else(|| Error::InvalidData("run request", format!("runner {c:?}")))?;
        Ok(Self {
            runner,
            target: codec.read_pos18(reader)?,
        })
    }
}

impl_message!(RunRequest, header::RUN_REQUEST, 5);
