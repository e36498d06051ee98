//! # Decoder
//!
//! Ties the framer, the dispatcher and the fix record together behind a
//! byte-at-a-time push interface.

use core::{fmt, mem};

use log::{debug, trace};

use crate::{Error, FixRecord, Framer, Sentence, SentenceError, dispatch};

type Observer = Box<dyn FnMut(&SentenceError<'_>) + Send>;

/// Streaming NMEA 0183 decoder.
///
/// Feed it the bytes coming from the receiver, in order and one at a time,
/// and read the latest fix from [`fix`](Self::fix). Bytes can arrive in any
/// chunking: sentences split across reads, several sentences per read, noise
/// between sentences.
///
/// Sentences that are torn, corrupt or of an unsupported type are dropped
/// without touching the fix record and without interrupting the stream. They
/// are counted in [`Diagnostics`] and can be watched with
/// [`on_reject`](Self::on_reject).
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::{Decoder, Quality};
///
/// let mut decoder = Decoder::new();
/// decoder.feed_all(*b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n");
///
/// let fix = decoder.fix();
/// assert_eq!(fix.satellites, 8);
/// assert_eq!(fix.quality, Quality::Good);
/// assert!(decoder.take_new_data());
/// assert!(!decoder.has_new_data());
/// ```
#[derive(Default)]
pub struct Decoder {
    framer: Framer,
    fix: FixRecord,
    new_data: bool,
    diagnostics: Diagnostics,
    observer: Option<Observer>,
}

impl Decoder {
    /// Creates a decoder in its power-up state: empty buffer, zeroed record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one byte of the stream.
    ///
    /// Returns the sentence that was applied to the fix record if `byte`
    /// completed a valid one, and [`None`] otherwise.
    pub fn feed(&mut self, byte: u8) -> Option<Sentence> {
        let overflows = self.framer.overflows();
        let Some(framed) = self.framer.feed(byte) else {
            if self.framer.overflows() != overflows {
                self.diagnostics.overflows = self.diagnostics.overflows.saturating_add(1);
            }
            return None;
        };

        trace!("framed sentence {}", framed.as_bytes().escape_ascii());
        self.diagnostics.sentences = self.diagnostics.sentences.saturating_add(1);

        match dispatch(framed) {
            Ok(sentence) => {
                self.fix.apply(&sentence);
                if let Sentence::GGA(_) = sentence {
                    self.new_data = true;
                }

                self.diagnostics.accepted = self.diagnostics.accepted.saturating_add(1);
                Some(sentence)
            }
            Err(error) => {
                debug!(
                    "discarding sentence ({}): {}",
                    error.reason(),
                    framed.as_bytes().escape_ascii()
                );

                self.diagnostics.record(&error);
                if let Some(observer) = self.observer.as_mut() {
                    observer(&error);
                }

                None
            }
        }
    }

    /// Feeds every byte of `bytes` and returns how many sentences were applied.
    pub fn feed_all(&mut self, bytes: impl IntoIterator<Item = u8>) -> usize {
        bytes
            .into_iter()
            .filter_map(|byte| self.feed(byte))
            .count()
    }

    /// The latest decoded fix.
    pub fn fix(&self) -> &FixRecord {
        &self.fix
    }

    /// Returns `true` if a `GGA` sentence was applied since the flag was last
    /// taken, and clears the flag.
    pub fn take_new_data(&mut self) -> bool {
        mem::take(&mut self.new_data)
    }

    /// Returns `true` if a `GGA` sentence was applied since the flag was last
    /// taken.
    pub fn has_new_data(&self) -> bool {
        self.new_data
    }

    /// Counters of framed, accepted and rejected sentences.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Zeroes the diagnostic counters.
    pub fn reset_diagnostics(&mut self) {
        self.diagnostics = Diagnostics::default();
    }

    /// Installs a callback invoked with the reason of every rejected sentence.
    ///
    /// Replaces any previous callback. The callback only observes: the
    /// sentence is discarded whatever it does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    ///
    /// use nmea0183_fix::{Decoder, Error};
    ///
    /// let mismatches = Arc::new(Mutex::new(Vec::new()));
    /// let seen = Arc::clone(&mismatches);
    ///
    /// let mut decoder = Decoder::new();
    /// decoder.on_reject(move |error| {
    ///     if let Error::ChecksumMismatch { found, .. } = error {
    ///         seen.lock().unwrap().push(*found);
    ///     }
    /// });
    ///
    /// decoder.feed_all(*b"$GPVTG,,T,,M,,N,,K*00\r\n");
    /// assert_eq!(*mismatches.lock().unwrap(), [0x00]);
    /// ```
    pub fn on_reject<F>(&mut self, observer: F)
    where
        F: FnMut(&SentenceError<'_>) + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Brings the decoder back to its power-up state.
    ///
    /// The rejection callback, if any, is kept.
    pub fn reset(&mut self) {
        self.framer.reset();
        self.fix = FixRecord::default();
        self.new_data = false;
        self.diagnostics = Diagnostics::default();
    }

    /// The underlying framer.
    pub fn framer(&self) -> &Framer {
        &self.framer
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("framer", &self.framer)
            .field("fix", &self.fix)
            .field("new_data", &self.new_data)
            .field("diagnostics", &self.diagnostics)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Running counts of what the decoder did with the stream.
///
/// Every framed sentence ends up either `accepted` or in exactly one of the
/// rejection counters, so `sentences` is always their sum. Overflowed
/// sentences are never framed and are counted apart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    /// Sentences framed and handed to the dispatcher
    pub sentences: u32,
    /// Sentences applied to the fix record
    pub accepted: u32,
    /// Sentences dropped because they outgrew the buffer
    pub overflows: u32,
    /// Sentences without a `*` three bytes before the end
    pub missing_checksum: u32,
    /// Sentences whose trailer disagreed with the accumulated checksum
    pub checksum_mismatches: u32,
    /// Sentences with an unsupported tag
    pub unrecognized: u32,
    /// Checksum-valid sentences that could not be decoded
    pub malformed: u32,
}

impl Diagnostics {
    /// Total number of framed sentences that were discarded.
    pub fn rejected(&self) -> u32 {
        self.missing_checksum
            .saturating_add(self.checksum_mismatches)
            .saturating_add(self.unrecognized)
            .saturating_add(self.malformed)
    }

    fn record(&mut self, error: &SentenceError<'_>) {
        let counter = match error {
            Error::MissingChecksum => &mut self.missing_checksum,
            Error::ChecksumMismatch { .. } => &mut self.checksum_mismatches,
            Error::UnrecognizedMessage(_) => &mut self.unrecognized,
            Error::MissingField(_) | Error::ParsingError(_) => {
                &mut self.malformed
            }
        };

        *counter = counter.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use nom::error::{ErrorKind, ParseError};

    use super::*;

    #[test]
    fn test_diagnostics_record() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.record(&Error::MissingChecksum);
        diagnostics.record(&Error::ChecksumMismatch {
            expected: 1,
            found: 2,
        });
        diagnostics.record(&Error::UnrecognizedMessage(b"$GPXXX".as_slice()));
        diagnostics.record(&Error::from_error_kind(b"$GP".as_slice(), ErrorKind::Eof));
        diagnostics.record(&Error::MissingField(b"GPRMC".as_slice()));

        assert_eq!(diagnostics.missing_checksum, 1);
        assert_eq!(diagnostics.checksum_mismatches, 1);
        assert_eq!(diagnostics.unrecognized, 1);
        assert_eq!(diagnostics.malformed, 2);
        assert_eq!(diagnostics.rejected(), 5);
    }

    #[test]
    fn test_reset_keeps_observer() {
        let mut decoder = Decoder::new();
        decoder.on_reject(|_| {});
        decoder.feed_all(*b"$GPXXX,1,2,3*53\r\n$GPGGA,12");
        assert_eq!(decoder.diagnostics().unrecognized, 1);
        assert!(decoder.framer().is_collecting());

        decoder.reset();
        assert_eq!(*decoder.diagnostics(), Diagnostics::default());
        assert_eq!(*decoder.fix(), FixRecord::default());
        assert!(!decoder.framer().is_collecting());
        assert!(format!("{decoder:?}").contains("observer: true"));
    }
}
