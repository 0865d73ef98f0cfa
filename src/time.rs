//! Absolute time representation and julian day conversions.
use crate::constants::MJD_OFFSET;

use hifitime::{Epoch, TimeScale};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [AbsoluteTime] wraps one UTC instant and provides the time
/// representations used in mission analysis: Julian Date, Modified
/// Julian Date and GPS time of week. Immutable value object:
/// construct once, read many.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AbsoluteTime {
    epoch: Epoch,
}

impl From<Epoch> for AbsoluteTime {
    fn from(epoch: Epoch) -> Self {
        Self::new(epoch)
    }
}

impl std::fmt::Display for AbsoluteTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.epoch)
    }
}

impl AbsoluteTime {
    /// Builds a new [AbsoluteTime] from provided [Epoch],
    /// assumed expressed in [TimeScale::UTC].
    pub fn new(epoch: Epoch) -> Self {
        Self { epoch }
    }

    /// Builds a new [AbsoluteTime] from a UTC Gregorian calendar
    /// timestamp. The representable range is the [Epoch] range,
    /// no further validation applies.
    pub fn from_gregorian_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanos: u32,
    ) -> Self {
        Self::new(Epoch::from_gregorian_utc(
            year, month, day, hour, minute, second, nanos,
        ))
    }

    /// Returns the stored UTC [Epoch], unchanged.
    pub fn utc(&self) -> Epoch {
        self.epoch
    }

    /// Returns the Julian Date: elapsed days since January 1,
    /// 4713 BCE at 12:00 UT, in the UTC scale. Correct for instants
    /// prior to the MJD epoch (1858-11-17) as well.
    pub fn julian_date(&self) -> f64 {
        self.epoch.to_jde_utc_days()
    }

    /// Returns the Modified Julian Date, which starts at midnight
    /// rather than noon: JD - 2400000.5, always.
    pub fn modified_julian_date(&self) -> f64 {
        self.julian_date() - MJD_OFFSET
    }

    /// Returns elapsed weeks and nanoseconds into the week,
    /// in [TimeScale::GPST].
    pub fn gpst_time_of_week(&self) -> (u32, u64) {
        self.epoch.to_time_scale(TimeScale::GPST).to_time_of_week()
    }
}
