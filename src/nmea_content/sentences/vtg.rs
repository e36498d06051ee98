#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    SentenceError,
    nmea_content::{Fields, Parsable, parse::saturating_u32},
    parsing::scaled_decimal,
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// Field 1 (true course) and field 7 (speed in km/h) are decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VTG {
    /// Course over ground in degrees true × 100
    pub course_over_ground: u32,
    /// Speed over ground in meters per second × 100
    pub speed_over_ground: u32,
}

impl Parsable for VTG {
    const TAG: &'static [u8] = b"$GPVTG";

    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, SentenceError<'a>> {
        let course_over_ground = fields.field()?;
        fields.skip_fields(5)?;
        let speed_over_ground_kph = fields.field()?;

        Ok(Self {
            course_over_ground: saturating_u32(scaled_decimal(course_over_ground, 2)),
            speed_over_ground: saturating_u32(kph_to_mps(scaled_decimal(speed_over_ground_kph, 2))),
        })
    }
}

/// km/h to m/s, keeping the ×100 scale.
fn kph_to_mps(kph: u64) -> u64 {
    kph.saturating_mul(10) / 36
}
