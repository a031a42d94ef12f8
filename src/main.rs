#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, battery::Battery, display::Display};
use system::{
    activity::ActivityTracker,
    config::{SystemConfig, ACTIVITY_TRACKING, BACKLIGHT_LEVEL, FACE},
};
use watchface::{
    battery::BatteryMonitor,
    refresh_all, refresh_battery,
    sources::ClockSource,
    time::{TimeManager, TimeReference, UptimeClock},
    ActivityReading, BatteryState, ClockReading, UserPreferences, WatchFace,
};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static BATTERY_STATUS: Signal<ThreadModeRawMutex, BatteryState> = Signal::new();
static TIME: Signal<ThreadModeRawMutex, ClockReading> = Signal::new();

/// Fetch the battery status from the hardware, signal on change.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: Battery, initial: BatteryState) {
    let mut monitor = BatteryMonitor::seeded(initial);
    loop {
        Timer::after(Duration::from_secs(FACE.battery_poll_secs)).await;

        match battery.get_state().await {
            Ok(state) => {
                if monitor.update(state) {
                    defmt::info!("Battery status updated");
                    BATTERY_STATUS.signal(BatteryState::read(&monitor));
                }
            }
            Err(e) => defmt::warn!("Battery measurement failed: {}", e),
        }
    }
}

/// Raise a time tick on every minute boundary.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(manager: TimeManager) {
    let clock = UptimeClock::new(&manager, || Instant::now().as_secs());
    loop {
        let wait = match clock.now() {
            Ok(reading) => {
                defmt::info!("Time updated: {}:{}", reading.hour(), reading.minute());
                TIME.signal(reading);
                clock.granularity().secs_until_next(reading.local())
            }
            Err(e) => {
                defmt::warn!("Clock unavailable: {}", e);
                60
            }
        };

        Timer::after(Duration::from_secs(wait)).await;
    }
}

/// Refresh the watch face on ticks and battery changes and draw it.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(
    mut display: Display<SPI2>,
    backlight: Backlight<'static>,
    initial: BatteryState,
) {
    defmt::debug!("Backlight level {}", backlight.get_brightness());
    let tracker = ActivityTracker::new(ACTIVITY_TRACKING);
    let prefs = UserPreferences::read(&FACE);
    let mut face = WatchFace::new();
    let mut battery = initial;

    loop {
        let refreshed = match select(TIME.wait(), BATTERY_STATUS.wait()).await {
            Either::First(reading) => {
                let activity = ActivityReading::read(&tracker, &tracker);
                refresh_all(&mut face, &reading, &battery, &activity, &prefs)
            }
            Either::Second(status) => {
                defmt::info!(
                    "Battery status: {}% ({})",
                    status.level,
                    if status.charging {
                        "charging"
                    } else {
                        "discharging"
                    }
                );
                battery = status;
                refresh_battery(&mut face, &battery)
            }
        };

        if let Err(e) = refreshed.and_then(|_| display.draw(&face)) {
            defmt::warn!("Watch face update failed: {}", e);
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(&mut p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize battery, the first sample seeds the face before any tick
    let mut battery = Battery::init(saadc, Input::new(p.P0_12, Pull::None));
    let initial_battery = unwrap!(battery.get_state().await);

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::High, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Initialize backlight, the pins are active low
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        BACKLIGHT_LEVEL,
    ));

    // Initialize clock from the build time reference
    let reference = unwrap!(TimeReference::from_epoch(
        UTC_EPOCH,
        Instant::now().as_secs()
    ));
    let time = TimeManager::init(reference, FACE.utc_offset_secs, FACE.tick);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(display, backlight, initial_battery)));
    unwrap!(spawner.spawn(update_battery_status(battery, initial_battery)));
    unwrap!(spawner.spawn(update_time(time)));
}
