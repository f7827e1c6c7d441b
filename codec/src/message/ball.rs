use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
    types::geometry::Vector2,
};

/// Ball position and velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ball {
    pub pos: Vector2,
    pub vel: Vector2,
}

impl Write for Ball {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        codec.write_pos_vel(self.pos, self.vel, buf)
    }
}

impl Read for Ball {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        let (pos, vel) = codec.read_pos_vel(reader)?;
        Ok(Self { pos, vel })
    }
}

impl_message!(Ball, header::BALL, 6);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_round_trip() {
        let codec = Codec::default();
        let ball = Ball {
            pos: Vector2::new(-10.3, 22.0),
            vel: Vector2::new(1.2, -0.4),
        };
        let encoded = ball.encode(&codec).unwrap();
        assert_eq!(encoded.len(), 6);
        assert!(encoded.starts_with('b'));

        let (decoded, consumed) = Ball::decode(&codec, &encoded).unwrap();
        assert_eq!(consumed, 6);
        let (pos, vel) = codec.decode_pos_vel(&encoded[1..]).unwrap();
        assert_eq!(decoded, Ball { pos, vel });
        assert!((decoded.pos.x - ball.pos.x).abs() <= 105.0 / 1023.0 / 2.0);
        assert!((decoded.vel.x - ball.vel.x).abs() <= 3.0 / 31.0 / 2.0);
    }

    #[test]
    fn test_trailing_text() {
        let codec = Codec::default();
        let mut text = Ball::default().encode(&codec).unwrap();
        text.push_str("w");
        let (_, consumed) = Ball::decode(&codec, &text).unwrap();
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_malformed() {
        let codec = Codec::default();
        assert!(matches!(
            Ball::decode(&codec, "p00000"),
            Err(Error::HeaderMismatch {
                expected: Some('b'),
                found: Some('p')
            })
        ));
        assert!(matches!(
            Ball::decode(&codec, "b000"),
            Err(Error::EndOfText {
                needed: 6,
                remaining: 4
            })
        ));
        assert!(matches!(
            Ball::decode(&codec, "b00!00"),
            Err(Error::InvalidChar('!'))
        ));
        // Above 31 bits
        assert!(matches!(
            Ball::decode(&codec, "b-----"),
            Err(Error::InvalidData(..))
        ));
    }
}
