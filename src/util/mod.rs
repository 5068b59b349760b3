//! Utility types and helpers.
//!
//! This module provides layout configuration and the color helpers
//! used when drawing series.

mod colors;
mod layout_config;

pub use colors::to_terminal_color;
pub use layout_config::PlotLayoutConfig;
