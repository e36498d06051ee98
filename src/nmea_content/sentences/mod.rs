mod gga;
mod rmc;
mod vtg;

pub use gga::GGA;
pub use rmc::RMC;
pub use vtg::VTG;

use crate::{SentenceError, nmea_content::Fields};

/// A sentence whose fields can be decoded into `Self`.
///
/// Implemented by every supported sentence struct. The dispatcher picks the
/// implementation whose [`TAG`](Parsable::TAG) starts the framed sentence,
/// checks the checksum, then hands over the fields that follow the tag.
///
/// A parser either returns the complete sentence or an error; it never
/// produces half a sentence, which keeps updates of the fix record
/// all-or-nothing.
///
/// # Example
///
/// ```rust
/// use nmea0183_fix::nmea_content::{Fields, Parsable, VTG};
///
/// let mut fields = Fields::new(b"054.7,T,034.4,M,005.5,N,010.2,K");
/// let vtg = VTG::parser(&mut fields).unwrap();
/// assert_eq!(vtg.course_over_ground, 5470);
/// ```
pub trait Parsable: Sized {
    /// The first six bytes of the sentence, `$` included.
    const TAG: &'static [u8];

    /// Decodes the fields that follow the tag.
    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, SentenceError<'a>>;
}
