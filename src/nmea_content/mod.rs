//! # Sentence Dispatcher
//!
//! Turns a framed sentence into a typed [`Sentence`], or rejects it.
//!
//! [`dispatch`] checks, in this order:
//! 1. the six-byte tag (`$GPGGA`, `$GPVTG` or `$GPRMC`),
//! 2. the `*` three bytes before the end of the sentence,
//! 3. the two hex digits after `*` against the checksum accumulated by the
//!    framer,
//!
//! and only then walks the comma-delimited fields. Nothing is decoded from a
//! sentence that fails any check.

mod parse;
mod sentences;

pub use parse::{COORDINATE_SCALE, Fields, coordinate};
pub use sentences::*;

use nom::{Parser, bytes::complete::take};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CompletedSentence, Error, IResult, SentenceError, parsing::hex_byte};

/// A decoded fix sentence.
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                              | Fields kept                       |
/// |--------------|--------------------------------------------|-----------------------------------|
/// | GGA([`GGA`]) | Global Positioning System Fix Data         | time, position, fix, HDOP, height |
/// | VTG([`VTG`]) | Track made good and Ground speed           | course and speed over ground      |
/// | RMC([`RMC`]) | Recommended Minimum Navigation Information | date                              |
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentence {
    /// Global Positioning System Fix Data
    GGA(GGA),
    /// Track made good and Ground speed
    VTG(VTG),
    /// Recommended Minimum Navigation Information
    RMC(RMC),
}

impl Sentence {
    /// The three-letter sentence formatter, e.g. `"GGA"`.
    pub fn formatter(&self) -> &'static str {
        match self {
            Sentence::GGA(_) => "GGA",
            Sentence::VTG(_) => "VTG",
            Sentence::RMC(_) => "RMC",
        }
    }
}

/// Validates a framed sentence and decodes its fields.
///
/// # Errors
///
/// - [`Error::UnrecognizedMessage`] if the tag is not a supported sentence,
/// - [`Error::MissingChecksum`] if there is no `*` before the last two bytes,
/// - [`Error::ChecksumMismatch`] if the trailer disagrees with the framer,
/// - [`Error::MissingField`] if the sentence is shorter than its layout.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{CompletedSentence, Error, Sentence, dispatch};
///
/// let framed = CompletedSentence::from_sentence(b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A");
/// let Ok(Sentence::RMC(rmc)) = dispatch(framed) else { panic!() };
/// assert_eq!(rmc.fix_date, 230394);
///
/// let framed = CompletedSentence::new(b"$GPGSV,3,2,12,01,40,083,45*44", 0x44);
/// assert!(matches!(dispatch(framed), Err(Error::UnrecognizedMessage(_))));
/// ```
pub fn dispatch(sentence: CompletedSentence<'_>) -> Result<Sentence, SentenceError<'_>> {
    let bytes = sentence.as_bytes();

    let tag: IResult<&[u8], &[u8]> = take(6usize).parse(bytes);
    let tag = match tag {
        Ok((_, tag)) => tag,
        Err(_) => return Err(Error::UnrecognizedMessage(bytes)),
    };

    let kind = match tag {
        GGA::TAG => Kind::GGA,
        VTG::TAG => Kind::VTG,
        RMC::TAG => Kind::RMC,
        _ => return Err(Error::UnrecognizedMessage(tag)),
    };

    let (content, found) = split_checksum(bytes)?;
    if found != sentence.checksum() {
        return Err(Error::ChecksumMismatch {
            expected: sentence.checksum(),
            found,
        });
    }

    let payload = content.strip_prefix(b"$").unwrap_or(content);
    let mut fields = Fields::new(payload);
    fields.skip_fields(1)?;

    match kind {
        Kind::GGA => GGA::parser(&mut fields).map(Sentence::GGA),
        Kind::VTG => VTG::parser(&mut fields).map(Sentence::VTG),
        Kind::RMC => RMC::parser(&mut fields).map(Sentence::RMC),
    }
}

#[derive(Clone, Copy)]
enum Kind {
    GGA,
    VTG,
    RMC,
}

/// Splits `$...*CC` into `$...` and the value of `CC`.
fn split_checksum(bytes: &[u8]) -> Result<(&[u8], u8), SentenceError<'_>> {
    let at = bytes.len().checked_sub(3).ok_or(Error::MissingChecksum)?;

    match bytes.split_at(at) {
        (content, &[b'*', high, low]) => Ok((content, hex_byte(high, low))),
        _ => Err(Error::MissingChecksum),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GGA_SENTENCE: &[u8] =
        b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

    #[test]
    fn test_dispatch_gga() {
        let sentence = dispatch(CompletedSentence::from_sentence(GGA_SENTENCE)).unwrap();
        let Sentence::GGA(gga) = sentence else {
            panic!("expected GGA, got {sentence:?}");
        };

        assert_eq!(sentence.formatter(), "GGA");
        assert_eq!(gga.satellite_count, 8);
    }

    #[test]
    fn test_dispatch_vtg() {
        let framed = CompletedSentence::new(b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", 0x48);
        assert_eq!(
            dispatch(framed),
            Ok(Sentence::VTG(VTG {
                course_over_ground: 5470,
                speed_over_ground: 283,
            }))
        );
    }

    #[test]
    fn test_checksum_mismatch() {
        let framed = CompletedSentence::new(GGA_SENTENCE, 0x46);
        assert_eq!(
            dispatch(framed),
            Err(Error::ChecksumMismatch {
                expected: 0x46,
                found: 0x47,
            })
        );
    }

    #[test]
    fn test_checksum_is_uppercase_hex() {
        let framed = CompletedSentence::new(b"$GPVTG,,T,,M,,N,,K*4a", 0x4A);
        assert_eq!(
            dispatch(framed),
            Err(Error::ChecksumMismatch {
                expected: 0x4A,
                found: 0x40,
            })
        );
    }

    #[test]
    fn test_missing_checksum() {
        let framed = CompletedSentence::from_sentence(b"$GPGGA,123519,4807.038,N");
        assert_eq!(dispatch(framed), Err(Error::MissingChecksum));

        // one hex digit only
        let framed = CompletedSentence::from_sentence(b"$GPGGA,123519*4");
        assert_eq!(dispatch(framed), Err(Error::MissingChecksum));

        let framed = CompletedSentence::from_sentence(b"$GPGGA");
        assert_eq!(dispatch(framed), Err(Error::MissingChecksum));
    }

    #[test]
    fn test_unrecognized() {
        let framed = CompletedSentence::from_sentence(b"$GPXXX,1,2,3*53");
        assert_eq!(
            dispatch(framed),
            Err(Error::UnrecognizedMessage(&b"$GPXXX"[..]))
        );

        let framed = CompletedSentence::from_sentence(b"$GP");
        assert_eq!(
            dispatch(framed),
            Err(Error::UnrecognizedMessage(&b"$GP"[..]))
        );

        // the tag is matched before the checksum is looked at
        let framed = CompletedSentence::new(b"$GNGGA,1,2,3*00", 0x7F);
        assert!(matches!(
            dispatch(framed),
            Err(Error::UnrecognizedMessage(_))
        ));
    }

    #[test]
    fn test_high_bytes_outside_decoded_fields() {
        // station id holds 0xB0; the trailer covers it
        let framed = CompletedSentence::from_sentence(
            b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,\xB0*F7",
        );
        assert_eq!(framed.checksum(), 0xF7);

        let Ok(Sentence::GGA(gga)) = dispatch(framed) else {
            panic!("expected GGA");
        };
        assert_eq!(gga.satellite_count, 8);
        assert_eq!(gga.latitude, 481_173_000);

        let framed = CompletedSentence::new(b"$GPX\xB0X,1*00", 0x00);
        assert_eq!(
            dispatch(framed),
            Err(Error::UnrecognizedMessage(&b"$GPX\xB0X"[..]))
        );
    }

    #[test]
    fn test_missing_field() {
        let framed = CompletedSentence::from_sentence(b"$GPRMC,123519,A*07");
        assert_eq!(
            dispatch(framed),
            Err(Error::MissingField(&b"GPRMC,123519,A"[..]))
        );
    }
}
