#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Quality, SentenceError,
    nmea_content::{
        Fields, Parsable,
        parse::{coordinate, saturating_i32, saturating_u8, saturating_u16, saturating_u32},
    },
    parsing::{fixed_width, scaled_decimal},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Only fields 1 to 9 are decoded.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GGA {
    /// Fix time in UTC, packed as the digits `hhmmsscc`
    pub fix_time: u32,
    /// Latitude in degrees × 10 000 000, negative in the south
    pub latitude: i32,
    /// Longitude in degrees × 10 000 000, negative in the west
    pub longitude: i32,
    /// GPS quality indicator, `0` when there is no fix
    pub fix: u8,
    /// Number of satellites in use
    pub satellite_count: u8,
    /// Horizontal dilution of precision × 10
    pub hdop: u16,
    /// Altitude above mean sea level, in whole meters
    pub altitude: i32,
    /// Tier derived from `fix`, `satellite_count` and `hdop`
    pub quality: Quality,
}

impl Parsable for GGA {
    const TAG: &'static [u8] = b"$GPGGA";

    fn parser<'a>(fields: &mut Fields<'a>) -> Result<Self, SentenceError<'a>> {
        let fix_time = fields.field()?;
        let latitude = fields.field()?;
        let north_south = fields.field()?;
        let longitude = fields.field()?;
        let east_west = fields.field()?;
        let fix = fields.field()?;
        let satellite_count = fields.field()?;
        let hdop = fields.field()?;
        let altitude = fields.field()?;

        let fix = saturating_u8(fixed_width(fix, 1));
        let satellite_count = saturating_u8(fixed_width(satellite_count, 2));
        let hdop = saturating_u16(scaled_decimal(hdop, 1));

        Ok(Self {
            fix_time: saturating_u32(scaled_decimal(fix_time, 2)),
            latitude: coordinate(latitude, north_south, 2, b'S'),
            longitude: coordinate(longitude, east_west, 3, b'W'),
            fix,
            satellite_count,
            hdop,
            // decimeters, truncated to whole meters
            altitude: saturating_i32(scaled_decimal(altitude, 1) / 10),
            quality: Quality::classify(fix, satellite_count, hdop),
        })
    }
}
