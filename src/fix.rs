//! # Fix Record
//!
//! The latest decoded GPS state, assembled from `GGA`, `VTG` and `RMC`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Quality, Sentence,
    nmea_content::{COORDINATE_SCALE, GGA, RMC, VTG},
};

/// The decoded GPS state.
///
/// Every field keeps the fixed-point scale it is decoded with; the methods
/// convert to physical units. Fields that no sentence has set yet are zero.
///
/// The record only changes through [`FixRecord::apply`], which writes all
/// the fields carried by one sentence at once.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixRecord {
    /// UTC time packed as the digits `hhmmsscc` (`GGA`)
    pub time: u32,
    /// UTC date packed as the digits `ddmmyy` (`RMC`)
    pub date: u32,
    /// Latitude in degrees × 10 000 000, negative in the south (`GGA`)
    pub latitude: i32,
    /// Longitude in degrees × 10 000 000, negative in the west (`GGA`)
    pub longitude: i32,
    /// Altitude above mean sea level in whole meters (`GGA`)
    pub altitude: i32,
    /// Course over ground in degrees × 100 (`VTG`)
    pub course: u32,
    /// Speed over ground in meters per second × 100 (`VTG`)
    pub speed: u32,
    /// Horizontal dilution of precision × 10 (`GGA`)
    pub hdop: u16,
    /// Number of satellites in use (`GGA`)
    pub satellites: u8,
    /// GPS quality indicator, `0` when there is no fix (`GGA`)
    pub fix: u8,
    /// Tier derived from `fix`, `satellites` and `hdop` (`GGA`)
    pub quality: Quality,
}

impl FixRecord {
    /// Writes the fields carried by `sentence`, leaving the others untouched.
    pub fn apply(&mut self, sentence: &Sentence) {
        match *sentence {
            Sentence::GGA(GGA {
                fix_time,
                latitude,
                longitude,
                fix,
                satellite_count,
                hdop,
                altitude,
                quality,
            }) => {
                self.time = fix_time;
                self.latitude = latitude;
                self.longitude = longitude;
                self.fix = fix;
                self.satellites = satellite_count;
                self.hdop = hdop;
                self.altitude = altitude;
                self.quality = quality;
            }
            Sentence::VTG(VTG {
                course_over_ground,
                speed_over_ground,
            }) => {
                self.course = course_over_ground;
                self.speed = speed_over_ground;
            }
            Sentence::RMC(RMC { fix_date }) => {
                self.date = fix_date;
            }
        }
    }

    /// Returns `true` if the last `GGA` reported a fix.
    pub fn has_fix(&self) -> bool {
        self.fix >= 1
    }

    /// Latitude in degrees.
    pub fn latitude_degrees(&self) -> f64 {
        f64::from(self.latitude) / COORDINATE_SCALE as f64
    }

    /// Longitude in degrees.
    pub fn longitude_degrees(&self) -> f64 {
        f64::from(self.longitude) / COORDINATE_SCALE as f64
    }

    /// Course over ground in degrees.
    pub fn course_over_ground(&self) -> f32 {
        self.course as f32 / 100.0
    }

    /// Speed over ground in meters per second.
    pub fn speed_over_ground(&self) -> f32 {
        self.speed as f32 / 100.0
    }

    /// Horizontal dilution of precision.
    pub fn horizontal_dilution(&self) -> f32 {
        f32::from(self.hdop) / 10.0
    }

    /// The UTC time of the fix.
    ///
    /// Returns [`None`] if the packed digits do not form a valid time.
    #[cfg(feature = "time")]
    #[cfg_attr(docsrs, doc(cfg(feature = "time")))]
    pub fn utc_time(&self) -> Option<time::Time> {
        let [hour, minute, second, centis] = split_pairs(self.time);

        time::Time::from_hms_milli(hour, minute, second, u16::from(centis) * 10).ok()
    }

    /// The UTC date of the fix.
    ///
    /// Two-digit years from 83 to 99 are taken as 19xx, all others as 20xx.
    /// Returns [`None`] if the packed digits do not form a valid date.
    #[cfg(feature = "time")]
    #[cfg_attr(docsrs, doc(cfg(feature = "time")))]
    pub fn utc_date(&self) -> Option<time::Date> {
        let [_, day, month, year] = split_pairs(self.date);

        let month = time::Month::try_from(month).ok()?;
        let year = match year {
            83..=99 => 1900 + i32::from(year),
            _ => 2000 + i32::from(year),
        };

        time::Date::from_calendar_date(year, month, day).ok()
    }
}

/// Splits the last eight decimal digits of `value` into pairs, most
/// significant first.
#[cfg(feature = "time")]
fn split_pairs(value: u32) -> [u8; 4] {
    let pair = |shift: u32| (value / 10u32.pow(shift) % 100) as u8;
    [pair(6), pair(4), pair(2), pair(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gga() -> GGA {
        GGA {
            fix_time: 12351900,
            latitude: 481_173_000,
            longitude: -115_166_666,
            fix: 1,
            satellite_count: 8,
            hdop: 9,
            altitude: 545,
            quality: Quality::Good,
        }
    }

    #[test]
    fn test_apply_only_touches_sentence_fields() {
        let mut record = FixRecord::default();
        record.apply(&Sentence::VTG(VTG {
            course_over_ground: 5470,
            speed_over_ground: 283,
        }));
        record.apply(&Sentence::RMC(RMC { fix_date: 230394 }));

        let before = record;
        record.apply(&Sentence::GGA(gga()));

        assert_eq!(record.course, before.course);
        assert_eq!(record.speed, before.speed);
        assert_eq!(record.date, 230394);
        assert_eq!(record.time, 12351900);
        assert_eq!(record.satellites, 8);
        assert_eq!(record.quality, Quality::Good);
    }

    #[test]
    fn test_physical_units() {
        let mut record = FixRecord::default();
        record.apply(&Sentence::GGA(gga()));
        record.apply(&Sentence::VTG(VTG {
            course_over_ground: 5470,
            speed_over_ground: 283,
        }));

        assert!(record.has_fix());
        assert!((record.latitude_degrees() - 48.1173).abs() < 1e-6);
        assert!((record.longitude_degrees() + 11.516_666_6).abs() < 1e-6);
        assert!((record.course_over_ground() - 54.7).abs() < 1e-4);
        assert!((record.speed_over_ground() - 2.83).abs() < 1e-4);
        assert!((record.horizontal_dilution() - 0.9).abs() < 1e-6);
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_utc_time_and_date() {
        let mut record = FixRecord::default();
        record.apply(&Sentence::GGA(gga()));
        record.apply(&Sentence::RMC(RMC { fix_date: 230394 }));

        assert_eq!(
            record.utc_time(),
            Some(time::Time::from_hms(12, 35, 19).unwrap())
        );
        assert_eq!(
            record.utc_date(),
            Some(time::Date::from_calendar_date(1994, time::Month::March, 23).unwrap())
        );

        record.apply(&Sentence::RMC(RMC { fix_date: 10125 }));
        assert_eq!(
            record.utc_date(),
            Some(time::Date::from_calendar_date(2025, time::Month::January, 1).unwrap())
        );

        record.apply(&Sentence::RMC(RMC { fix_date: 321394 }));
        assert_eq!(record.utc_date(), None);
    }
}
