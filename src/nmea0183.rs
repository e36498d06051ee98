//! # NMEA 0183 Stream Framer
//!
//! This module finds sentence boundaries in an unaligned byte stream.
//!
//! A sentence has the form `$HHHHH,D1,D2,...,Dn*CC\r\n`. The framer is fed one
//! byte at a time and:
//! - restarts on every `$`, whatever it was doing,
//! - XORs every byte after `$` and before `*` into a running checksum,
//! - hands out the buffered sentence (without `\r`) when it sees `\r`,
//! - drops the sentence if it outgrows the buffer and waits for the next `$`.
//!
//! `\n` is not a boundary. It only ever shows up between a `\r` and the next
//! `$`, where the framer is idle and ignores it.

use heapless::Vec;
use log::debug;

/// Capacity of the sentence buffer, in bytes.
///
/// One byte of it is always held back for the terminator, so the longest
/// sentence that can be framed is `SENTENCE_CAPACITY - 1` bytes, `$` included.
pub const SENTENCE_CAPACITY: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for `$`.
    Idle,
    /// Inside a sentence.
    Collecting,
}

/// A sentence framed by [`Framer::feed`], from `$` up to (not including) `\r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSentence<'a> {
    bytes: &'a [u8],
    checksum: u8,
}

impl<'a> CompletedSentence<'a> {
    /// Wraps a sentence together with the checksum accumulated while framing it.
    pub fn new(bytes: &'a [u8], checksum: u8) -> Self {
        Self { bytes, checksum }
    }

    /// Wraps a complete sentence, computing the checksum the way the framer
    /// would: over the bytes strictly between `$` and the first `*`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_fix::CompletedSentence;
    ///
    /// let sentence = CompletedSentence::from_sentence(b"$GPGGA,123456,data*41");
    /// assert_eq!(sentence.checksum(), 0x41);
    /// ```
    pub fn from_sentence(bytes: &'a [u8]) -> Self {
        let content = bytes.strip_prefix(b"$").unwrap_or(bytes);
        let content = match content.iter().position(|&b| b == b'*') {
            Some(end) => &content[..end],
            None => content,
        };

        Self::new(bytes, checksum(content))
    }

    /// The sentence bytes, starting with `$`.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The XOR of all the bytes between `$` and `*`.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }
}

/// Byte-at-a-time sentence framer over a fixed buffer of `N` bytes.
///
/// The framer never allocates and never blocks: every call to
/// [`feed`](Self::feed) does a constant amount of work.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::Framer;
///
/// let mut framer: Framer = Framer::new();
/// let mut framed = None;
///
/// for &byte in b"noise$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n" {
///     if let Some(sentence) = framer.feed(byte) {
///         framed = Some((sentence.as_bytes().to_vec(), sentence.checksum()));
///     }
/// }
///
/// let (bytes, checksum) = framed.unwrap();
/// assert_eq!(bytes, b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48");
/// assert_eq!(checksum, 0x48);
/// ```
#[derive(Debug, Clone)]
pub struct Framer<const N: usize = SENTENCE_CAPACITY> {
    buffer: Vec<u8, N>,
    checksum: u8,
    accumulating: bool,
    state: State,
    overflows: u32,
}

impl<const N: usize> Default for Framer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Framer<N> {
    /// Creates an idle framer with an empty buffer.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            checksum: 0,
            accumulating: false,
            state: State::Idle,
            overflows: 0,
        }
    }

    /// Consumes one byte of the stream.
    ///
    /// Returns the completed sentence when `byte` is the `\r` that closes it.
    /// The returned sentence borrows the framer's buffer, which is reused for
    /// the next sentence.
    pub fn feed(&mut self, byte: u8) -> Option<CompletedSentence<'_>> {
        match byte {
            b'$' => {
                self.start();
                None
            }
            b'\r' => {
                if self.state != State::Collecting {
                    return None;
                }

                // The buffer always keeps a spare byte, so the sentence and
                // its terminator can never exceed the capacity here.
                self.state = State::Idle;
                Some(CompletedSentence::new(self.buffer.as_slice(), self.checksum))
            }
            _ if self.state == State::Idle => None,
            _ => {
                self.push(byte);
                None
            }
        }
    }

    /// Number of bytes buffered for the current sentence.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Size of the sentence buffer.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` between a `$` and the `\r` (or overflow) that ends it.
    pub fn is_collecting(&self) -> bool {
        self.state == State::Collecting
    }

    /// Number of sentences dropped because they outgrew the buffer.
    pub fn overflows(&self) -> u32 {
        self.overflows
    }

    /// Drops any partial sentence and goes back to waiting for `$`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn start(&mut self) {
        self.buffer.clear();
        self.checksum = 0;
        self.accumulating = true;
        self.state = match self.buffer.push(b'$') {
            Ok(()) => State::Collecting,
            Err(_) => State::Idle,
        };
    }

    fn push(&mut self, byte: u8) {
        if self.buffer.len() >= N.saturating_sub(1) || self.buffer.push(byte).is_err() {
            self.overflow();
            return;
        }

        if byte == b'*' {
            self.accumulating = false;
        } else if self.accumulating {
            self.checksum ^= byte;
        }
    }

    fn overflow(&mut self) {
        debug!("sentence outgrew the {N} byte buffer, discarding");

        self.buffer.clear();
        self.state = State::Idle;
        self.overflows = self.overflows.saturating_add(1);
    }
}

/// Calculates the NMEA 0183 checksum: the XOR of all bytes in `content`.
///
/// `content` is everything between the `$` prefix and the `*` delimiter,
/// excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::checksum;
///
/// assert_eq!(checksum(b"GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(content: &[u8]) -> u8 {
    content
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_fix::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame<const N: usize>(framer: &mut Framer<N>, input: &[u8]) -> std::vec::Vec<std::vec::Vec<u8>> {
        input
            .iter()
            .filter_map(|&byte| framer.feed(byte).map(|s| s.as_bytes().to_vec()))
            .collect()
    }

    #[test]
    fn test_frames_back_to_back_sentences() {
        let mut framer: Framer = Framer::new();
        let sentences = frame(&mut framer, b"$GPAAA,1*00\r\n$GPBBB,2*00\r\n");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], b"$GPAAA,1*00");
        assert_eq!(sentences[1], b"$GPBBB,2*00");
    }

    #[test]
    fn test_checksum_stops_at_star() {
        let mut framer: Framer = Framer::new();
        let mut found = None;
        for &byte in b"$GPGGA,123456,data*41\r" {
            if let Some(sentence) = framer.feed(byte) {
                found = Some(sentence.checksum());
            }
        }

        assert_eq!(found, Some(checksum(b"GPGGA,123456,data")));
    }

    #[test]
    fn test_dollar_restarts_sentence() {
        let mut framer: Framer = Framer::new();
        let sentences = frame(&mut framer, b"$GPGGA,torn$GPVTG,1*00\r");

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], b"$GPVTG,1*00");
    }

    #[test]
    fn test_ignores_bytes_outside_sentence() {
        let mut framer: Framer = Framer::new();
        assert!(frame(&mut framer, b"\r\n,garbage\r\r").is_empty());
        assert!(framer.is_empty());
        assert!(!framer.is_collecting());
    }

    #[test]
    fn test_newline_is_not_a_boundary() {
        let mut framer: Framer = Framer::new();
        let sentences = frame(&mut framer, b"$GP\nA*00\r");

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0], b"$GP\nA*00");
    }

    #[test]
    fn test_overflow_discards_sentence() {
        let mut framer: Framer<16> = Framer::new();

        // 15 bytes fit, the 16th is reserved for the terminator
        let sentences = frame(&mut framer, b"$0123456789ABCD\r");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].len(), 15);
        assert_eq!(framer.overflows(), 0);

        let sentences = frame(&mut framer, b"$0123456789ABCDE\r");
        assert!(sentences.is_empty());
        assert_eq!(framer.len(), 0);
        assert_eq!(framer.overflows(), 1);

        // framing resumes on the next '$'
        let sentences = frame(&mut framer, b"$A*00\r");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_default_capacity_boundary() {
        let mut framer: Framer = Framer::new();
        assert_eq!(framer.capacity(), SENTENCE_CAPACITY);

        let mut longest = vec![b'$'];
        longest.resize(SENTENCE_CAPACITY - 1, b'A');
        longest.push(b'\r');

        let sentences = frame(&mut framer, &longest);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].len(), 119);
        assert_eq!(framer.overflows(), 0);

        let mut too_long = vec![b'$'];
        too_long.resize(SENTENCE_CAPACITY, b'A');
        too_long.push(b'\r');

        assert!(frame(&mut framer, &too_long).is_empty());
        assert_eq!(framer.overflows(), 1);
    }

    #[test]
    fn test_overflow_without_dollar() {
        let mut framer: Framer = Framer::new();
        framer.feed(b'$');
        for _ in 0..130 {
            assert!(framer.feed(b'7').is_none());
            assert!(framer.len() < framer.capacity());
        }

        assert_eq!(framer.len(), 0);
        assert_eq!(framer.overflows(), 1);
        assert!(framer.feed(b'\r').is_none());
    }

    #[test]
    fn test_from_sentence() {
        let sentence = CompletedSentence::from_sentence(b"$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48");
        assert_eq!(sentence.checksum(), 0x48);

        let sentence = CompletedSentence::from_sentence(b"GP");
        assert_eq!(sentence.checksum(), b'G' ^ b'P');
    }

    #[test]
    fn test_format_checksum() {
        assert_eq!(format_checksum(0x47), "47");
        assert_eq!(format_checksum(0x00), "00");
    }
}
