#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    SentenceError,
    nmea_content::{Fields, Parsable, parse::saturating_u32},
    parsing::fixed_width,
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// Position and velocity already come from `GGA` and `VTG`, so only the date
/// in field 9 is decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RMC {
    /// Fix date in UTC, packed as the digits `ddmmyy`
    pub fix_date: u32,
}

impl Parsable for RMC {
    const TAG: &'static [u8] = b"$GPRMC";

    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, SentenceError<'a>> {
        fields.skip_fields(8)?;
        let fix_date = fields.field()?;

        Ok(Self {
            fix_date: saturating_u32(fixed_width(fix_date, 6)),
        })
    }
}
