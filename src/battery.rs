//! Battery measurement helpers
//!
//! Conversion based upon https://wiki.pine64.org/wiki/PineTime: the battery
//! voltage reaches the SAADC through a 1:2 divider, sampled at 12 bit
//! against a 3.3 V reference.

use crate::{sources::BatteryProvider, BatteryState, Error};

/// Convert a raw 12 bit SAADC sample into battery millivolts
pub fn millivolts_from_sample(raw: i16) -> Result<u16, Error> {
    match raw {
        0..=4095 => {
            // Use u32 during calculation to prevent overflow
            Ok((raw as u32 * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the charge level in percent from the battery voltage
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    // Fixed data points with linear interpolation in between
    (match voltage {
        0..=3449 => 0,
        3450..=3699 => (voltage - 3450) / 5,
        3700..=4199 => 50 + (voltage - 3700) / 10,
        _ => 100,
    }) as u8
}

/// Last published battery state
///
/// Sampling is periodic; a change notification is only raised when the
/// derived state differs from the previous one.
#[derive(Debug, Default)]
pub struct BatteryMonitor {
    state: Option<BatteryState>,
}

impl BatteryMonitor {
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Start from a sample taken before the first poll
    pub const fn seeded(initial: BatteryState) -> Self {
        Self {
            state: Some(initial),
        }
    }

    /// Record a fresh sample. Return whether or not the state changed.
    pub fn update(&mut self, sample: BatteryState) -> bool {
        let changed = self.state != Some(sample);
        self.state = Some(sample);
        changed
    }

    /// Latest recorded state, if any sample was taken yet
    pub fn state(&self) -> Option<BatteryState> {
        self.state
    }
}

impl BatteryProvider for BatteryMonitor {
    fn charge_level(&self) -> u8 {
        self.state.map(|s| s.level).unwrap_or(0)
    }

    fn is_charging(&self) -> bool {
        self.state.map(|s| s.charging).unwrap_or(false)
    }
}
