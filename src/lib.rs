//! # NMEA 0183 Fix Decoder
//!
//! This library turns the raw byte stream of a GPS receiver into a fix record.
//! It understands sentences of the form `$HHHHH,D1,D2,...,Dn*CC\r\n` and
//! decodes the three that describe a fix:
//!
//! - `GGA`: time, position, fix status, satellites, HDOP and altitude,
//! - `VTG`: course and speed over ground,
//! - `RMC`: date.
//!
//! Decoding is incremental. The stream is pushed one byte at a time into a
//! [`Decoder`], which never allocates, never blocks and never fails: sentences
//! that are torn, corrupt or unsupported are dropped and decoding resumes at
//! the next `$`.
//!
//! Values are kept as fixed-point integers (see [`FixRecord`] for the scale
//! of each field) and the fix gets a [`Quality`] tier derived from the fix
//! status, satellite count and HDOP.
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_fix::{Decoder, Quality};
//!
//! let stream = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
//!                $GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48\r\n";
//!
//! let mut decoder = Decoder::new();
//! for &byte in stream {
//!     decoder.feed(byte);
//! }
//!
//! let fix = decoder.fix();
//! assert_eq!(fix.quality, Quality::Good);
//! assert_eq!(fix.latitude, 481_173_000);
//! assert_eq!(fix.course, 5470);
//! ```
//!
//! The building blocks are public as well: [`Framer`] finds sentences in the
//! stream, [`dispatch`] validates and decodes one, and [`parsing`] holds the
//! fixed-point field decoders.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the record and the sentences.
//! - `time`: [`time`](https://docs.rs/time) accessors for the UTC time and date.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod decoder;
pub mod error;
mod fix;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;
pub mod quality;

pub use decoder::{Decoder, Diagnostics};
pub use error::{Error, IResult, SentenceError};
pub use fix::FixRecord;
pub use nmea0183::*;
pub use nmea_content::{Sentence, dispatch};
pub use quality::Quality;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
