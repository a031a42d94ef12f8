//! Battery label and icon

use super::WatchFace;
use crate::{BatteryState, Error};

/// The four battery images the face can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryIcon {
    Charging,
    Full,
    Half,
    Low,
}

impl BatteryIcon {
    /// Pick the icon for a battery state; charging wins over any level
    pub fn select(state: &BatteryState) -> Self {
        match state.level {
            _ if state.charging => BatteryIcon::Charging,
            70..=u8::MAX => BatteryIcon::Full,
            30..=69 => BatteryIcon::Half,
            _ => BatteryIcon::Low,
        }
    }

    /// Image identifier
    pub fn asset(&self) -> &'static str {
        match self {
            BatteryIcon::Charging => "battery-charging",
            BatteryIcon::Full => "battery-full",
            BatteryIcon::Half => "battery-half",
            BatteryIcon::Low => "battery-low",
        }
    }
}

pub(super) fn update_battery(face: &mut WatchFace, state: &BatteryState) -> Result<(), Error> {
    face.battery.set_fmt(format_args!("{}%", state.level))?;
    face.battery_icon = Some(BatteryIcon::select(state));
    Ok(())
}
