//! # Error Types
//!
//! This module defines the reasons a framed sentence can be rejected.
//!
//! None of these ever reach the caller of [`Decoder::feed`](crate::Decoder::feed):
//! a rejected sentence is silently discarded and decoding carries on with the
//! next `$`. They are only visible through [`Diagnostics`](crate::Diagnostics),
//! the rejection observer and the `debug` log.

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// The error produced when the dispatcher rejects a framed sentence.
pub type SentenceError<'a> = Error<&'a [u8], nom::error::Error<&'a [u8]>>;

/// Represents all the reasons a framed sentence can be discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum Error<I, E> {
    /// The checksum of the sentence was corrupt or incorrect.
    ///
    /// Contains both the expected checksum (accumulated while framing)
    /// and the actual checksum found in the trailer.
    ChecksumMismatch {
        /// The checksum calculated from the sentence content
        expected: u8,
        /// The checksum found in the sentence trailer
        found: u8,
    },

    /// No `*` delimiter three bytes before the end of the sentence.
    ///
    /// The trailer is always `*` followed by exactly two hex digits, so anything
    /// else means the sentence was cut or carries no checksum at all.
    MissingChecksum,

    /// The sentence tag is not one of the supported fix sentences.
    ///
    /// Contains the tag that was found.
    UnrecognizedMessage(I),

    /// The sentence ended before all the fields of its layout were seen.
    ///
    /// Contains the sentence payload.
    MissingField(I),

    /// A nom parser failed.
    ///
    /// [`dispatch`](crate::dispatch) never returns this: its field decoders
    /// are best-effort and swallow nom errors. The variant lets nom
    /// combinators run with [`IResult`] as their result type. Observers and
    /// [`Diagnostics`](crate::Diagnostics) count it as malformed.
    ParsingError(E),
}

impl<I, E> Error<I, E> {
    /// Short, stable name of the rejection reason, used in log lines.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::ChecksumMismatch { .. } => "checksum mismatch",
            Error::MissingChecksum => "missing checksum",
            Error::UnrecognizedMessage(_) => "unrecognized message",
            Error::MissingField(_) => "missing field",
            Error::ParsingError(_) => "parsing error",
        }
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_wraps_nom_error() {
        let error: SentenceError = Error::from_error_kind(b"abc".as_slice(), ErrorKind::Char);
        assert_eq!(
            error,
            Error::ParsingError(nom::error::Error::new(b"abc".as_slice(), ErrorKind::Char))
        );
        assert_eq!(error.reason(), "parsing error");
    }
}
