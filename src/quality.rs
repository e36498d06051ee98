//! # Quality Classifier
//!
//! Collapses the fix indicator, the satellite count and the horizontal
//! dilution of precision of a `GGA` sentence into a single tier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Satellites needed before a fix is better than [`Quality::Bad`].
pub const MIN_SATELLITES: u8 = 5;

/// HDOP (×10) above which a fix is [`Quality::Poor`].
pub const POOR_HDOP: u16 = 30;

/// HDOP (×10) above which a fix is [`Quality::Medium`].
pub const MEDIUM_HDOP: u16 = 25;

/// Quality tier of the last decoded fix, from `0` (no fix) to `4` (good).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Quality {
    /// 0 - No fix
    #[default]
    NoFix = 0,
    /// 1 - Fewer than five satellites in use
    Bad = 1,
    /// 2 - HDOP above 3.0
    Poor = 2,
    /// 3 - HDOP above 2.5
    Medium = 3,
    /// 4 - Everything else
    Good = 4,
}

impl Quality {
    /// Derives the tier from a fix indicator, a satellite count and an HDOP
    /// scaled by ten.
    ///
    /// The rules are checked in order and the first match wins, so a sentence
    /// without a fix is [`Quality::NoFix`] whatever its HDOP says.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmea0183_fix::Quality;
    ///
    /// assert_eq!(Quality::classify(1, 8, 9), Quality::Good);
    /// assert_eq!(Quality::classify(1, 4, 9), Quality::Bad);
    /// assert_eq!(Quality::classify(0, 12, 9), Quality::NoFix);
    /// ```
    pub fn classify(fix: u8, satellites: u8, hdop: u16) -> Self {
        if fix < 1 {
            Quality::NoFix
        } else if satellites < MIN_SATELLITES {
            Quality::Bad
        } else if hdop > POOR_HDOP {
            Quality::Poor
        } else if hdop > MEDIUM_HDOP {
            Quality::Medium
        } else {
            Quality::Good
        }
    }

    /// The numeric tier, `0..=4`.
    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.tier()
    }
}
