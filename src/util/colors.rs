//! Color conversion for series rendering.

use crate::series::SeriesColor;
use ratatui::style::Color;

/// Map a unit-range RGB triple to a 24-bit terminal color.
pub fn to_terminal_color(color: SeriesColor) -> Color {
    Color::Rgb(
        channel_to_u8(color.r),
        channel_to_u8(color.g),
        channel_to_u8(color.b),
    )
}

fn channel_to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
