//! # Fixed-Point Field Decoders
//!
//! Best-effort decoders for the ASCII numbers found in NMEA fields.
//!
//! None of these fail. A decoder that meets a byte it does not expect stops
//! there and returns what it has accumulated so far, so a torn or truncated
//! field yields a truncated value rather than an error. Accumulation
//! saturates at [`u64::MAX`] instead of overflowing.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0},
    combinator::opt,
    sequence::preceded,
};

use crate::IResult;

/// Decodes one ASCII hex digit into its 4-bit value.
///
/// Only `0-9` and uppercase `A-F` are hex digits here. Every other byte,
/// including lowercase `a-f`, decodes to `0`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parsing::hex_digit;
///
/// assert_eq!(hex_digit(b'7'), 7);
/// assert_eq!(hex_digit(b'C'), 12);
/// assert_eq!(hex_digit(b'c'), 0);
/// ```
pub fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Decodes a two-digit hex checksum such as the `47` of `*47`.
pub fn hex_byte(high: u8, low: u8) -> u8 {
    (hex_digit(high) << 4) | hex_digit(low)
}

/// Decodes at most `max_digits` leading decimal digits of `field`.
///
/// Stops at the first non-digit or after `max_digits` digits, whichever
/// comes first.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parsing::fixed_width;
///
/// assert_eq!(fixed_width(b"4807.038", 2), 48);
/// assert_eq!(fixed_width(b"08", 2), 8);
/// assert_eq!(fixed_width(b"7,", 2), 7);
/// assert_eq!(fixed_width(b"", 2), 0);
/// ```
pub fn fixed_width(field: &[u8], max_digits: usize) -> u64 {
    let result: IResult<&[u8], &[u8]> =
        take_while_m_n(0, max_digits, |b: u8| b.is_ascii_digit()).parse(field);

    match result {
        Ok((_, digits)) => accumulate(0, digits),
        Err(_) => 0,
    }
}

/// Decodes a decimal number into an integer scaled by `10^max_fraction_digits`.
///
/// Digits before the decimal point are all taken. After the point at most
/// `max_fraction_digits` digits are taken; extra precision is truncated, not
/// rounded. Missing fraction digits, including a missing decimal point, count
/// as zeros, so the result always carries the same scale:
///
/// | input       | `max_fraction_digits` | result   |
/// |-------------|-----------------------|----------|
/// | `1234.5678` | 2                     | `123456` |
/// | `12345.6`   | 1                     | `123456` |
/// | `12`        | 2                     | `1200`   |
/// | `0.9`       | 1                     | `9`      |
///
/// Decoding stops at the first byte that is neither a digit nor the first `.`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::parsing::scaled_decimal;
///
/// assert_eq!(scaled_decimal(b"545.4,M", 1), 5454);
/// assert_eq!(scaled_decimal(b"123519", 2), 12351900);
/// ```
pub fn scaled_decimal(field: &[u8], max_fraction_digits: usize) -> u64 {
    let (integer, fraction) = match decimal_parts(field, max_fraction_digits) {
        Ok((_, parts)) => parts,
        Err(_) => return 0,
    };

    let fraction = fraction.unwrap_or_default();
    let value = accumulate(accumulate(0, integer), fraction);

    let missing = max_fraction_digits.saturating_sub(fraction.len());
    let scale = 10u64.saturating_pow(u32::try_from(missing).unwrap_or(u32::MAX));

    value.saturating_mul(scale)
}

/// Splits `field` into its integer digits and, if a `.` follows them, up to
/// `max_fraction_digits` fraction digits.
fn decimal_parts(
    i: &[u8],
    max_fraction_digits: usize,
) -> IResult<&[u8], (&[u8], Option<&[u8]>)> {
    (
        digit0,
        opt(preceded(
            char('.'),
            take_while_m_n(0, max_fraction_digits, |b: u8| b.is_ascii_digit()),
        )),
    )
        .parse(i)
}

fn accumulate(acc: u64, digits: &[u8]) -> u64 {
    digits.iter().fold(acc, |acc, &digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'))
    })
}
