//! User interface rendering.

mod chart;
mod formatters;
mod theme;

pub use chart::{draw_chart, PlotData, PlottedSeries};
pub use formatters::{format_axis_label, truncate_label};
pub use theme::ThemeColors;
