//! Time, date and weekday slots

use chrono::Datelike;

use super::WatchFace;
use crate::{ClockMode, ClockReading, Error};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sunday first, matching `num_days_from_sunday`
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// 0 and 12 both read as 12 on a 12 hour dial
fn dial_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

pub(super) fn update_time(
    face: &mut WatchFace,
    reading: &ClockReading,
    mode: ClockMode,
) -> Result<(), Error> {
    let (hour, minute) = (reading.hour(), reading.minute());

    match mode {
        ClockMode::H12 => face
            .time
            .set_fmt(format_args!("{}:{:02}", dial_hour(hour), minute))?,
        ClockMode::H24 => face.time.set_fmt(format_args!("{:02}:{:02}", hour, minute))?,
    }

    if hour < 12 {
        face.am.set("AM")?;
        face.pm.clear();
    } else {
        face.am.clear();
        face.pm.set("PM")?;
    }

    Ok(())
}

pub(super) fn update_date(face: &mut WatchFace, reading: &ClockReading) -> Result<(), Error> {
    let local = reading.local();

    face.date.set_fmt(format_args!(
        "{} {} {}",
        MONTHS[local.month0() as usize],
        local.day(),
        reading.utc_year()
    ))
}

pub(super) fn update_weekday(face: &mut WatchFace, reading: &ClockReading) -> Result<(), Error> {
    for day in face.days.iter_mut() {
        day.clear();
    }

    let index = reading.local().weekday().num_days_from_sunday() as usize;
    face.days[index].set(WEEKDAYS[index])
}
