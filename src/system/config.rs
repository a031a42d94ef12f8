//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};
use watchface::config::FaceConfig;

/// Watch face settings baked into the image
pub const FACE: FaceConfig = FaceConfig::DEFAULT;

/// Whether the wearer consented to activity tracking
pub const ACTIVITY_TRACKING: bool = false;

/// Backlight level (0–7) after boot
pub const BACKLIGHT_LEVEL: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }
}
