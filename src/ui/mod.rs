//! Watch face context and refresh entry points
//!
//! The face owns one `Label` per display slot plus the battery icon. Both
//! refresh functions rewrite their slots from scratch; nothing carries over
//! from a previous refresh apart from the storage itself.

use core::fmt;

use crate::{ActivityReading, BatteryState, ClockReading, Error, UserPreferences};

mod activity;
mod battery;
mod clock;

pub use activity::{grouped, Grouped, PLACEHOLDER};
pub use battery::BatteryIcon;
pub use clock::{MONTHS, WEEKDAYS};

/// Capacity of a single label in bytes
pub const LABEL_LEN: usize = 16;

/// Fixed-capacity text slot
#[derive(Clone, Copy)]
pub struct Label {
    str_buf: [u8; LABEL_LEN],
    len: usize,
}

impl Label {
    /// Create new empty label
    pub const fn new() -> Self {
        Self {
            str_buf: [0; LABEL_LEN],
            len: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Replace the text with a plain string
    pub fn set(&mut self, text: &str) -> Result<(), Error> {
        self.set_fmt(format_args!("{}", text))
    }

    /// Replace the text with formatted output
    ///
    /// On overflow the label is left empty.
    pub fn set_fmt(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        match format_no_std::show(&mut self.str_buf, args).map(|s| s.len()) {
            Ok(len) => {
                self.len = len;
                Ok(())
            }
            Err(e) => {
                self.len = 0;
                Err(e.into())
            }
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Label {}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All display slots of the watch face
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WatchFace {
    /// "{hours}:{minutes}"
    pub time: Label,
    pub am: Label,
    pub pm: Label,
    /// "{Mon} {day} {year}"
    pub date: Label,
    /// One slot per weekday, Sunday first; at most one is non-empty
    pub days: [Label; 7],
    pub steps: Label,
    pub calories: Label,
    pub distance: Label,
    /// Charge level, "{level}%"
    pub battery: Label,
    /// Unset until the first battery refresh
    pub battery_icon: Option<BatteryIcon>,
}

impl WatchFace {
    /// Create new watch face with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// The weekday slot currently shown, if any
    pub fn active_day(&self) -> Option<usize> {
        self.days.iter().position(|day| !day.is_empty())
    }
}

/// Re-derive every slot from the given snapshot
pub fn refresh_all(
    face: &mut WatchFace,
    clock: &ClockReading,
    battery: &BatteryState,
    activity: &ActivityReading,
    prefs: &UserPreferences,
) -> Result<(), Error> {
    clock::update_time(face, clock, prefs.clock)?;
    clock::update_date(face, clock)?;
    clock::update_weekday(face, clock)?;
    activity::update_activity(face, activity, prefs.units)?;
    refresh_battery(face, battery)
}

/// Re-derive the battery label and icon only
pub fn refresh_battery(face: &mut WatchFace, battery: &BatteryState) -> Result<(), Error> {
    battery::update_battery(face, battery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityTotals, ClockMode, UnitSystem};
    use chrono::NaiveDate;

    fn reading(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> ClockReading {
        let local = NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap();
        ClockReading::new(local, y)
    }

    #[test]
    fn test_label_set_and_clear() {
        let mut label = Label::new();
        assert!(label.is_empty());

        label.set("Mon").unwrap();
        assert_eq!(label.as_str(), "Mon");

        label.set_fmt(format_args!("{}%", 42)).unwrap();
        assert_eq!(label.as_str(), "42%");

        label.clear();
        assert_eq!(label.as_str(), "");
    }

    #[test]
    fn test_label_overflow() {
        let mut label = Label::new();
        label.set("ok").unwrap();

        assert_eq!(
            label.set("this text is far too long for a label"),
            Err(Error::LabelOverflow)
        );
        assert!(label.is_empty());
    }

    #[test]
    fn test_refresh_all_fills_every_slot() {
        let mut face = WatchFace::new();
        let prefs = UserPreferences {
            clock: ClockMode::H12,
            units: UnitSystem::Metric,
        };
        let activity = ActivityReading::Granted(ActivityTotals {
            steps: Some(8_456),
            calories: Some(312),
            distance_m: Some(6_180),
        });
        let battery = BatteryState {
            level: 85,
            charging: false,
        };

        // Friday
        refresh_all(&mut face, &reading(2024, 3, 8, 15, 7), &battery, &activity, &prefs).unwrap();

        assert_eq!(face.time.as_str(), "3:07");
        assert_eq!(face.am.as_str(), "");
        assert_eq!(face.pm.as_str(), "PM");
        assert_eq!(face.date.as_str(), "Mar 8 2024");
        assert_eq!(face.active_day(), Some(5));
        assert_eq!(face.days[5].as_str(), "Fri");
        assert_eq!(face.steps.as_str(), "8,456");
        assert_eq!(face.calories.as_str(), "312");
        assert_eq!(face.distance.as_str(), "6.2 km");
        assert_eq!(face.battery.as_str(), "85%");
        assert_eq!(face.battery_icon, Some(BatteryIcon::Full));
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let prefs = UserPreferences::default();
        let activity = ActivityReading::Granted(ActivityTotals {
            steps: Some(1_000),
            calories: None,
            distance_m: Some(5_000),
        });
        let battery = BatteryState {
            level: 50,
            charging: true,
        };
        let clock = reading(2024, 12, 31, 23, 59);

        let mut face = WatchFace::new();
        refresh_all(&mut face, &clock, &battery, &activity, &prefs).unwrap();
        let first = face.clone();
        refresh_all(&mut face, &clock, &battery, &activity, &prefs).unwrap();

        assert_eq!(face, first);
    }

    #[test]
    fn test_next_refresh_replaces_previous_values() {
        let prefs = UserPreferences::default();
        let battery = BatteryState::default();
        let mut face = WatchFace::new();

        let granted = ActivityReading::Granted(ActivityTotals {
            steps: Some(10),
            calories: Some(20),
            distance_m: Some(30),
        });
        refresh_all(&mut face, &reading(2024, 1, 1, 9, 0), &battery, &granted, &prefs).unwrap();
        assert_eq!(face.active_day(), Some(1));
        assert_eq!(face.am.as_str(), "AM");

        refresh_all(&mut face, &reading(2024, 1, 2, 13, 0), &battery, &ActivityReading::Denied, &prefs)
            .unwrap();
        assert_eq!(face.active_day(), Some(2));
        assert_eq!(face.days.iter().filter(|d| !d.is_empty()).count(), 1);
        assert_eq!(face.am.as_str(), "");
        assert_eq!(face.steps.as_str(), PLACEHOLDER);
    }

    #[test]
    fn test_refresh_battery_leaves_other_slots() {
        let mut face = WatchFace::new();
        face.time.set("12:00").unwrap();

        refresh_battery(
            &mut face,
            &BatteryState {
                level: 10,
                charging: false,
            },
        )
        .unwrap();

        assert_eq!(face.time.as_str(), "12:00");
        assert_eq!(face.battery.as_str(), "10%");
        assert_eq!(face.battery_icon, Some(BatteryIcon::Low));
    }
}
