//! Host capabilities read by the watch face
//!
//! The face never talks to hardware itself. Each refresh is fed a snapshot
//! taken from these providers, so every field on screen is a function of the
//! latest snapshot only.

use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

use crate::Error;

/// Snapshot of the current instant
///
/// Month, day, weekday and time fields come from `local`. The year shown on
/// the face is taken from the UTC instant, which can differ from the local
/// year around midnight on New Year's Eve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    local: NaiveDateTime,
    utc_year: i32,
}

impl ClockReading {
    /// Create a reading from an already localised time
    pub fn new(local: NaiveDateTime, utc_year: i32) -> Self {
        Self { local, utc_year }
    }

    /// Create a reading from a UTC instant and a fixed offset in seconds
    pub fn from_utc(utc: NaiveDateTime, offset_secs: i32) -> Result<Self, Error> {
        let local = utc
            .checked_add_signed(Duration::seconds(offset_secs as i64))
            .ok_or(Error::InvalidTime)?;

        Ok(Self {
            local,
            utc_year: utc.year(),
        })
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn utc_year(&self) -> i32 {
        self.utc_year
    }

    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    pub fn minute(&self) -> u32 {
        self.local.minute()
    }
}

/// How often the clock source raises a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickGranularity {
    Seconds,
    Minutes,
    Hours,
}

impl TickGranularity {
    /// Seconds from `now` until the next tick boundary (never zero)
    pub fn secs_until_next(&self, now: NaiveDateTime) -> u64 {
        let (sec, min) = (now.second() as u64, now.minute() as u64);
        match self {
            TickGranularity::Seconds => 1,
            TickGranularity::Minutes => 60 - sec,
            TickGranularity::Hours => 3_600 - (min * 60 + sec),
        }
    }
}

/// Today's activity as reported by the host; any value may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityTotals {
    pub steps: Option<u32>,
    pub calories: Option<u32>,
    /// Distance in meters
    pub distance_m: Option<u32>,
}

/// Activity snapshot gated by the activity permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityReading {
    /// The host has not granted access to activity data
    Denied,
    Granted(ActivityTotals),
}

impl ActivityReading {
    /// Take a snapshot, asking the registry first
    pub fn read<P, R>(provider: &P, registry: &R) -> Self
    where
        P: ActivityProvider + ?Sized,
        R: PermissionRegistry + ?Sized,
    {
        if !registry.activity_granted() {
            return ActivityReading::Denied;
        }

        ActivityReading::Granted(ActivityTotals {
            steps: provider.steps(),
            calories: provider.calories(),
            distance_m: provider.distance_m(),
        })
    }
}

/// Battery charge (0–100) and charging flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    pub level: u8,
    pub charging: bool,
}

impl BatteryState {
    pub fn read<B: BatteryProvider + ?Sized>(provider: &B) -> Self {
        Self {
            level: provider.charge_level().min(100),
            charging: provider.is_charging(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockMode {
    H12,
    #[default]
    H24,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Display preferences, constant for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UserPreferences {
    pub clock: ClockMode,
    pub units: UnitSystem,
}

impl UserPreferences {
    pub fn read<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        Self {
            clock: store.clock_mode(),
            units: store.unit_system(),
        }
    }
}

/// Wall clock
pub trait ClockSource {
    /// Current instant
    fn now(&self) -> Result<ClockReading, Error>;

    /// Tick rate the face should be refreshed at
    fn granularity(&self) -> TickGranularity {
        TickGranularity::Minutes
    }
}

/// Day-scoped activity counters
pub trait ActivityProvider {
    fn steps(&self) -> Option<u32>;
    fn calories(&self) -> Option<u32>;
    /// Distance walked today in meters
    fn distance_m(&self) -> Option<u32>;
}

pub trait BatteryProvider {
    /// Charge level in percent (0–100)
    fn charge_level(&self) -> u8;
    fn is_charging(&self) -> bool;
}

pub trait PermissionRegistry {
    /// Whether access to activity data has been granted
    fn activity_granted(&self) -> bool;
}

pub trait PreferenceStore {
    fn clock_mode(&self) -> ClockMode;
    fn unit_system(&self) -> UnitSystem;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Tracker {
        granted: bool,
    }

    impl ActivityProvider for Tracker {
        fn steps(&self) -> Option<u32> {
            Some(4_200)
        }

        fn calories(&self) -> Option<u32> {
            None
        }

        fn distance_m(&self) -> Option<u32> {
            Some(3_100)
        }
    }

    impl PermissionRegistry for Tracker {
        fn activity_granted(&self) -> bool {
            self.granted
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_reading_keeps_utc_year() {
        // 23:30 UTC on Dec 31st is already Jan 1st in UTC+1
        let reading = ClockReading::from_utc(at(2023, 12, 31, 23, 30, 0), 3_600).unwrap();

        assert_eq!(reading.local(), at(2024, 1, 1, 0, 30, 0));
        assert_eq!(reading.utc_year(), 2023);
        assert_eq!(reading.hour(), 0);
        assert_eq!(reading.minute(), 30);
    }

    #[test]
    fn test_reading_negative_offset() {
        let reading = ClockReading::from_utc(at(2024, 3, 1, 2, 0, 0), -5 * 3_600).unwrap();
        assert_eq!(reading.local(), at(2024, 2, 29, 21, 0, 0));
    }

    #[test]
    fn test_tick_alignment() {
        let now = at(2024, 5, 5, 10, 41, 17);
        assert_eq!(TickGranularity::Seconds.secs_until_next(now), 1);
        assert_eq!(TickGranularity::Minutes.secs_until_next(now), 43);
        assert_eq!(TickGranularity::Hours.secs_until_next(now), 3_600 - (41 * 60 + 17));

        // Exactly on a boundary waits a full period
        let boundary = at(2024, 5, 5, 11, 0, 0);
        assert_eq!(TickGranularity::Minutes.secs_until_next(boundary), 60);
        assert_eq!(TickGranularity::Hours.secs_until_next(boundary), 3_600);
    }

    #[test]
    fn test_activity_permission_gate() {
        let denied = Tracker { granted: false };
        assert_eq!(ActivityReading::read(&denied, &denied), ActivityReading::Denied);

        let granted = Tracker { granted: true };
        assert_eq!(
            ActivityReading::read(&granted, &granted),
            ActivityReading::Granted(ActivityTotals {
                steps: Some(4_200),
                calories: None,
                distance_m: Some(3_100),
            })
        );
    }
}
