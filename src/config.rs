//! Compile-time watch face configuration

use crate::sources::{ClockMode, PreferenceStore, TickGranularity, UnitSystem, UserPreferences};

/// Settings the face runs with; there is no settings storage on the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Clock and distance display preferences
    pub preferences: UserPreferences,
    /// How often the full face is refreshed
    pub tick: TickGranularity,
    /// Battery sampling period in seconds
    pub battery_poll_secs: u64,
    /// Offset of local time from UTC in seconds
    pub utc_offset_secs: i32,
}

impl FaceConfig {
    pub const DEFAULT: Self = Self {
        preferences: UserPreferences {
            clock: ClockMode::H24,
            units: UnitSystem::Metric,
        },
        tick: TickGranularity::Minutes,
        battery_poll_secs: 1,
        utc_offset_secs: 3_600,
    };
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PreferenceStore for FaceConfig {
    fn clock_mode(&self) -> ClockMode {
        self.preferences.clock
    }

    fn unit_system(&self) -> UnitSystem {
        self.preferences.units
    }
}
