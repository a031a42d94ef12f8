//! Time keeping module for PineTime
//!
//! The watch has no battery-backed RTC. Wall-clock time is a reference
//! instant plus the uptime elapsed since that reference was taken.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::{
    sources::{ClockReading, ClockSource, TickGranularity},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReference {
    /// Clock time (UTC)
    time: NaiveDateTime,
    /// Uptime in seconds when `time` was valid
    uptime_secs: u64,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: DateTime::<Utc>::UNIX_EPOCH.naive_utc(),
            uptime_secs: 0,
        }
    }
}

impl TimeReference {
    /// Create new time reference from NaiveDateTime
    pub fn from_datetime(time: NaiveDateTime, uptime_secs: u64) -> Self {
        Self { time, uptime_secs }
    }

    /// Create new time reference from a UNIX timestamp
    pub fn from_epoch(epoch_secs: i64, uptime_secs: u64) -> Result<Self, Error> {
        let time = DateTime::from_timestamp(epoch_secs, 0)
            .ok_or(Error::InvalidTime)?
            .naive_utc();
        Ok(Self::from_datetime(time, uptime_secs))
    }
}

pub struct TimeManager {
    reference: TimeReference,
    /// Offset of local time from UTC in seconds
    utc_offset_secs: i32,
    granularity: TickGranularity,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference, utc_offset_secs: i32, granularity: TickGranularity) -> Self {
        Self {
            reference,
            utc_offset_secs,
            granularity,
        }
    }

    /// Current UTC time for the given uptime
    pub fn get_time(&self, uptime_secs: u64) -> Result<NaiveDateTime, Error> {
        let elapsed = uptime_secs.saturating_sub(self.reference.uptime_secs);
        let elapsed = i64::try_from(elapsed).map_err(|_| Error::InvalidTime)?;
        let elapsed = Duration::try_seconds(elapsed).ok_or(Error::InvalidTime)?;

        self.reference
            .time
            .checked_add_signed(elapsed)
            .ok_or(Error::InvalidTime)
    }

    /// Current reading for the given uptime
    pub fn reading(&self, uptime_secs: u64) -> Result<ClockReading, Error> {
        ClockReading::from_utc(self.get_time(uptime_secs)?, self.utc_offset_secs)
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        self.reference = reference;
    }

    pub fn granularity(&self) -> TickGranularity {
        self.granularity
    }
}

/// A `TimeManager` paired with an uptime counter forms a clock source
pub struct UptimeClock<'a, F: Fn() -> u64> {
    manager: &'a TimeManager,
    uptime: F,
}

impl<'a, F: Fn() -> u64> UptimeClock<'a, F> {
    pub fn new(manager: &'a TimeManager, uptime: F) -> Self {
        Self { manager, uptime }
    }
}

impl<F: Fn() -> u64> ClockSource for UptimeClock<'_, F> {
    fn now(&self) -> Result<ClockReading, Error> {
        self.manager.reading((self.uptime)())
    }

    fn granularity(&self) -> TickGranularity {
        self.manager.granularity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_time_advances_with_uptime() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let manager = TimeManager::init(
            TimeReference::from_datetime(start, 100),
            0,
            TickGranularity::Minutes,
        );

        assert_eq!(manager.get_time(100).unwrap(), start);
        assert_eq!(manager.get_time(190).unwrap().minute(), 1);
        assert_eq!(manager.get_time(190).unwrap().second(), 30);
        // Uptime before the reference clamps to the reference
        assert_eq!(manager.get_time(50).unwrap(), start);
    }

    #[test]
    fn test_epoch_reference() {
        let reference = TimeReference::from_epoch(1_700_000_000, 0).unwrap();
        let manager = TimeManager::init(reference, 2 * 3_600, TickGranularity::Minutes);

        let reading = manager.reading(0).unwrap();
        // 2023-11-14 22:13:20 UTC
        assert_eq!(reading.utc_year(), 2023);
        assert_eq!(reading.local().day(), 15);
        assert_eq!(reading.hour(), 0);
        assert_eq!(reading.minute(), 13);
    }

    #[test]
    fn test_set_time_replaces_reference() {
        let mut manager = TimeManager::init(TimeReference::default(), 0, TickGranularity::Minutes);
        assert_eq!(manager.get_time(0).unwrap().year(), 1970);

        manager.set_time(TimeReference::from_epoch(1_704_067_200, 10).unwrap());
        assert_eq!(manager.get_time(10).unwrap().year(), 2024);
    }

    #[test]
    fn test_uptime_clock_source() {
        let manager = TimeManager::init(
            TimeReference::from_epoch(1_704_067_200, 0).unwrap(),
            0,
            TickGranularity::Hours,
        );
        let clock = UptimeClock::new(&manager, || 3_661);

        let reading = clock.now().unwrap();
        assert_eq!((reading.hour(), reading.minute()), (1, 1));
        assert_eq!(clock.granularity(), TickGranularity::Hours);
    }
}
