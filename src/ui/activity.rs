//! Steps, calories and distance slots

use core::fmt;

use super::{Label, WatchFace};
use crate::{ActivityReading, Error, UnitSystem};

/// Shown in every activity slot while access is not granted
pub const PLACEHOLDER: &str = "----";

/// Miles per meter (0.000621371192) scaled by 10^12
const MILES_PER_METER_E12: u64 = 621_371_192;

/// Integer with comma thousands separators
///
/// Every group is separated, so values from a million up read "1,234,567"
/// rather than "1234,567".
pub struct Grouped(u32);

/// Display `value` with comma thousands separators ("12,345")
pub fn grouped(value: u32) -> Grouped {
    Grouped(value)
}

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 1000 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{},{:03}", Grouped(self.0 / 1000), self.0 % 1000)
        }
    }
}

/// Distance in tenths of the display unit, rounded half up
fn distance_tenths(meters: u32, units: UnitSystem) -> u64 {
    let meters = meters as u64;
    match units {
        UnitSystem::Metric => (meters + 50) / 100,
        UnitSystem::Imperial => (meters * MILES_PER_METER_E12 + 50_000_000_000) / 100_000_000_000,
    }
}

fn write_distance(label: &mut Label, meters: u32, units: UnitSystem) -> Result<(), Error> {
    let suffix = match units {
        UnitSystem::Metric => "km",
        UnitSystem::Imperial => "mi",
    };
    let tenths = distance_tenths(meters, units);

    label.set_fmt(format_args!("{}.{} {}", tenths / 10, tenths % 10, suffix))
}

pub(super) fn update_activity(
    face: &mut WatchFace,
    reading: &ActivityReading,
    units: UnitSystem,
) -> Result<(), Error> {
    match reading {
        ActivityReading::Denied => {
            face.steps.set(PLACEHOLDER)?;
            face.calories.set(PLACEHOLDER)?;
            face.distance.set(PLACEHOLDER)
        }
        ActivityReading::Granted(totals) => {
            face.steps
                .set_fmt(format_args!("{}", grouped(totals.steps.unwrap_or(0))))?;
            face.calories
                .set_fmt(format_args!("{}", grouped(totals.calories.unwrap_or(0))))?;
            write_distance(&mut face.distance, totals.distance_m.unwrap_or(0), units)
        }
    }
}
