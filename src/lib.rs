//! Activity watch face for the PineTime
//!
//! Everything that decides what ends up on screen lives here, free of any
//! hardware dependency:
//!
//! - `ui`: the watch face context and its two refresh entry points
//! - `sources`: the host capabilities a refresh reads from
//! - `render`: drawing a refreshed face onto any Rgb565 target
//! - `time`, `battery`: clock keeping and battery measurement helpers
//!
//! The firmware binary wires these to the real peripherals.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod battery;
pub mod config;
pub mod error;
pub mod render;
pub mod sources;
pub mod time;
pub mod ui;

pub use error::Error;
pub use sources::{
    ActivityReading, ActivityTotals, BatteryState, ClockMode, ClockReading, UnitSystem,
    UserPreferences,
};
pub use ui::{refresh_all, refresh_battery, BatteryIcon, Label, WatchFace};
