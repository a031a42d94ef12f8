//! Draw a watch face onto a 240x240 Rgb565 target

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use profont::PROFONT_24_POINT;

use crate::{ui::Label, BatteryIcon, Error, WatchFace};

pub const LCD_W: i32 = 240;
pub const LCD_H: i32 = 240;

const MARGIN: i32 = 10;

pub const BACKGROUND_COLOR: Rgb565 = Rgb565::BLACK;
pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;
/// Day-of-week and meridiem highlight
pub const ACCENT_COLOR: Rgb565 = Rgb565::CYAN;

// Battery glyph geometry, top right corner
const ICON_ORIGIN: Point = Point::new(LCD_W - MARGIN - 28, MARGIN);
const ICON_SIZE: Size = Size::new(24, 12);
const ICON_INNER: u32 = 20;

/// Draw a single label, skipping empty slots
fn draw_label<D>(
    target: &mut D,
    label: &Label,
    position: Point,
    font: &MonoFont<'_>,
    color: Rgb565,
    alignment: Alignment,
) -> Result<(), Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if label.is_empty() {
        return Ok(());
    }

    let style = MonoTextStyle::new(font, color);
    Text::with_alignment(label.as_str(), position, style, alignment)
        .draw(target)
        .map_err(|_| Error::Draw)?;
    Ok(())
}

/// Fill color and filled width of the battery glyph
fn icon_fill(icon: BatteryIcon) -> (Rgb565, u32) {
    match icon {
        BatteryIcon::Charging => (Rgb565::BLUE, ICON_INNER),
        BatteryIcon::Full => (Rgb565::GREEN, ICON_INNER),
        BatteryIcon::Half => (Rgb565::YELLOW, ICON_INNER / 2),
        BatteryIcon::Low => (Rgb565::RED, ICON_INNER / 5),
    }
}

fn draw_battery_icon<D>(target: &mut D, icon: BatteryIcon) -> Result<(), Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    // Casing and terminal
    Rectangle::new(ICON_ORIGIN, ICON_SIZE)
        .into_styled(PrimitiveStyle::with_stroke(TEXT_COLOR, 1))
        .draw(target)
        .map_err(|_| Error::Draw)?;
    Rectangle::new(
        ICON_ORIGIN + Point::new(ICON_SIZE.width as i32, 3),
        Size::new(2, ICON_SIZE.height - 6),
    )
    .into_styled(PrimitiveStyle::with_fill(TEXT_COLOR))
    .draw(target)
    .map_err(|_| Error::Draw)?;

    let (color, width) = icon_fill(icon);
    Rectangle::new(ICON_ORIGIN + Point::new(2, 2), Size::new(width, ICON_SIZE.height - 4))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
        .map_err(|_| Error::Draw)?;

    Ok(())
}

/// Clear the target and draw every slot of the face
pub fn draw<D>(face: &WatchFace, target: &mut D) -> Result<(), Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BACKGROUND_COLOR).map_err(|_| Error::Draw)?;

    // Battery status in the top right corner
    draw_label(
        target,
        &face.battery,
        Point::new(ICON_ORIGIN.x - 4, MARGIN + 11),
        &FONT_10X20,
        TEXT_COLOR,
        Alignment::Right,
    )?;
    if let Some(icon) = face.battery_icon {
        draw_battery_icon(target, icon)?;
    }

    // Weekday row, only the active day is filled in
    let day_pitch = (LCD_W - 2 * MARGIN) / 7;
    for (index, day) in face.days.iter().enumerate() {
        let x = MARGIN + day_pitch * index as i32 + day_pitch / 2;
        draw_label(
            target,
            day,
            Point::new(x, 60),
            &FONT_10X20,
            ACCENT_COLOR,
            Alignment::Center,
        )?;
    }

    // Time in the center, meridiem stacked to its right
    draw_label(
        target,
        &face.time,
        Point::new(LCD_W / 2, LCD_H / 2),
        &PROFONT_24_POINT,
        TEXT_COLOR,
        Alignment::Center,
    )?;
    draw_label(
        target,
        &face.am,
        Point::new(LCD_W - MARGIN, LCD_H / 2 - 14),
        &FONT_10X20,
        ACCENT_COLOR,
        Alignment::Right,
    )?;
    draw_label(
        target,
        &face.pm,
        Point::new(LCD_W - MARGIN, LCD_H / 2 + 6),
        &FONT_10X20,
        ACCENT_COLOR,
        Alignment::Right,
    )?;

    draw_label(
        target,
        &face.date,
        Point::new(LCD_W / 2, LCD_H / 2 + 36),
        &FONT_10X20,
        TEXT_COLOR,
        Alignment::Center,
    )?;

    // Activity summary along the bottom edge
    draw_label(
        target,
        &face.steps,
        Point::new(MARGIN, LCD_H - MARGIN - 24),
        &FONT_10X20,
        TEXT_COLOR,
        Alignment::Left,
    )?;
    draw_label(
        target,
        &face.calories,
        Point::new(MARGIN, LCD_H - MARGIN),
        &FONT_10X20,
        TEXT_COLOR,
        Alignment::Left,
    )?;
    draw_label(
        target,
        &face.distance,
        Point::new(LCD_W - MARGIN, LCD_H - MARGIN),
        &FONT_10X20,
        TEXT_COLOR,
        Alignment::Right,
    )?;

    Ok(())
}
