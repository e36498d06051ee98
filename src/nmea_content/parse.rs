use nom::{
    Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::opt,
};

use crate::{
    Error, IResult, SentenceError,
    parsing::{fixed_width, scaled_decimal},
};

/// Scale of latitudes and longitudes: degrees × 10 000 000.
pub const COORDINATE_SCALE: u64 = 10_000_000;

/// Fraction digits kept from the minutes of a coordinate.
const MINUTE_FRACTION_DIGITS: usize = 4;

/// Walks the comma-delimited fields of a sentence payload, in order.
///
/// A payload of `n` commas always holds `n + 1` fields, some of which may be
/// empty. Walking past the last one is reported as [`Error::MissingField`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::nmea_content::Fields;
///
/// let mut fields = Fields::new(b"GPVTG,054.7,T,,M");
/// assert_eq!(fields.field().unwrap(), b"GPVTG");
/// fields.skip_fields(2).unwrap();
/// assert_eq!(fields.field().unwrap(), b"");
/// assert_eq!(fields.field().unwrap(), b"M");
/// assert!(fields.field().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    payload: &'a [u8],
    rest: Option<&'a [u8]>,
}

impl<'a> Fields<'a> {
    /// Starts a walk at the first field of `payload`.
    pub fn new(payload: &'a [u8]) -> Self {
        Self {
            payload,
            rest: Some(payload),
        }
    }

    /// Returns the next field, failing if the payload has no more fields.
    pub fn field(&mut self) -> Result<&'a [u8], SentenceError<'a>> {
        self.next().ok_or(Error::MissingField(self.payload))
    }

    /// Steps over `count` fields.
    pub fn skip_fields(&mut self, count: usize) -> Result<(), SentenceError<'a>> {
        for _ in 0..count {
            self.field()?;
        }

        Ok(())
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.rest?;
        let result: IResult<&'a [u8], (&'a [u8], Option<char>)> =
            (take_till(|b: u8| b == b','), opt(char(','))).parse(i);

        match result {
            Ok((rest, (field, comma))) => {
                self.rest = comma.map(|_| rest);
                Some(field)
            }
            Err(_) => {
                self.rest = None;
                None
            }
        }
    }
}

/// Decodes a `ddmm.mmmm` / `dddmm.mmmm` coordinate into degrees × 10 000 000.
///
/// `degree_width` is 2 for latitudes and 3 for longitudes. The minutes are
/// read with four fraction digits and converted with `minutes * 50 / 3`, the
/// integer form of `minutes / 60 * 10 000 000`. The result is negated when
/// the hemisphere field starts with `negative` (`S` or `W`).
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::nmea_content::coordinate;
///
/// assert_eq!(coordinate(b"4807.038", b"N", 2, b'S'), 481_173_000);
/// assert_eq!(coordinate(b"01131.000", b"W", 3, b'W'), -115_166_666);
/// ```
pub fn coordinate(value: &[u8], hemisphere: &[u8], degree_width: usize, negative: u8) -> i32 {
    let degrees = fixed_width(value, degree_width);
    let minutes = scaled_decimal(
        value.get(degree_width..).unwrap_or_default(),
        MINUTE_FRACTION_DIGITS,
    );

    let scaled = degrees
        .saturating_mul(COORDINATE_SCALE)
        .saturating_add(minutes.saturating_mul(50) / 3);
    let scaled = saturating_i32(scaled);

    if hemisphere.first() == Some(&negative) {
        -scaled
    } else {
        scaled
    }
}

pub(crate) fn saturating_i32(value: u64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub(crate) fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

pub(crate) fn saturating_u16(value: u64) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

pub(crate) fn saturating_u8(value: u64) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
