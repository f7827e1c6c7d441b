use crate::{
    codec::{Codec, Read, Reader, Write},
    error::{EncodeError, Error},
    message::header,
};

/// Range of x covered by an offside line.
const OFFSIDE: (f64, f64) = (10.0, 52.5);

/// Range of x covered by a defense line.
const DEFENSE: (f64, f64) = (-52.5, -10.0);

fn write_line(
    codec: &Codec,
    (min, max): (f64, f64),
    field: &'static str,
    x: f64,
    buf: &mut String,
) -> Result<(), EncodeError> {
    if !x.is_finite() {
        return Err(EncodeError::OutOfRange { field, value: x });
    }
    let rate = (x.clamp(min, max) - min) / (max - min);
    buf.push(codec.alphabet().encode_percentage(rate)?);
    Ok(())
}

fn read_line(
    codec: &Codec,
    (min, max): (f64, f64),
    reader: &mut Reader<'_>,
) -> Result<f64, Error> {
    let rate = codec.alphabet().decode_percentage(reader.next_char()?)?;
    Ok(min + rate * (max - min))
}

/// The x coordinate of the opponent offside line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsideLine {
    pub x: f64,
}

impl Write for OffsideLine {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        write_line(codec, OFFSIDE, "offside line", self.x, buf)
    }
}

impl Read for OffsideLine {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Self {
            x: read_line(codec, OFFSIDE, reader)?,
        })
    }
}

impl_message!(OffsideLine, header::OFFSIDE_LINE, 2);

/// The x coordinate of our defense line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DefenseLine {
    pub x: f64,
}

impl Write for DefenseLine {
    fn write(&self, codec: &Codec, buf: &mut String) -> Result<(), EncodeError> {
        write_line(codec, DEFENSE, "defense line", self.x, buf)
    }
}

impl Read for DefenseLine {
    fn read(codec: &Codec, reader: &mut Reader<'_>) -> Result<Self, Error> {
        Ok(Self {
            x: read_line(codec, DEFENSE, reader)?,
        })
    }
}

impl_message!(DefenseLine, header::DEFENSE_LINE, 2);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, Encode};

    #[test]
    fn test_offside_line() {
        let codec = Codec::default();
        let encoded = OffsideLine { x: 10.0 }.encode(&codec).unwrap();
        assert_eq!(encoded, "o0");
        let encoded = OffsideLine { x: 52.5 }.encode(&codec).unwrap();
        assert_eq!(encoded, "o-");
        let (decoded, consumed) = OffsideLine::decode(&codec, &encoded).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(decoded.x, 52.5);

        let (decoded, _) =
            OffsideLine::decode(&codec, &OffsideLine { x: 31.3 }.encode(&codec).unwrap())
                .unwrap();
        assert!((decoded.x - 31.3).abs() <= 42.5 / 73.0 / 2.0);
    }

    #[test]
    fn test_defense_line() {
        let codec = Codec::default();
        let (decoded, _) =
            DefenseLine::decode(&codec, &DefenseLine { x: -60.0 }.encode(&codec).unwrap())
                .unwrap();
        assert_eq!(decoded.x, -52.5);
        let (decoded, _) =
            DefenseLine::decode(&codec, &DefenseLine { x: -20.0 }.encode(&codec).unwrap())
                .unwrap();
        assert!((decoded.x + 20.0).abs() <= 42.5 / 73.0 / 2.0);
        assert!(DefenseLine { x: f64::NAN }.encode(&codec).is_err());
    }

    #[test]
    fn test_invalid() {
        let codec = Codec::default();
        assert!(matches!(
            DefenseLine::decode(&codec, "d!"),
            Err(Error::InvalidChar('!'))
        ));
        assert!(matches!(
            DefenseLine::decode(&codec, "o1"),
            Err(Error::HeaderMismatch { .. })
        ));
        assert!(matches!(
            OffsideLine::decode(&codec, "o"),
            Err(Error::EndOfText { .. })
        ));
    }
}
