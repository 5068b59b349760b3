//! Livescatter - a live-updating terminal scatter plot.
//!
//! Livescatter draws several named numeric series against a shared x axis and
//! redraws them as new points arrive. The caller drives the loop: create a
//! [`Visualizer`], feed it with [`Visualizer::add_data`], and call
//! [`Visualizer::update`] whenever the chart should refresh.
//!
//! # Features
//!
//! - One scatter series per label, each in its own random color
//! - Legend keyed by label
//! - Optional log10 y axis
//! - Real terminal or headless in-memory surface
//! - Data checked on arrival so every series stays in lockstep with the x axis
//!
//! # Example
//!
//! ```ignore
//! use livescatter::{Surface, Visualizer};
//!
//! let surface = Surface::stdout()?;
//! let mut vis = Visualizer::new(surface, false, ["a", "b"])?;
//!
//! vis.add_data(1.0, [("a", 10.0), ("b", 20.0)])?;
//! vis.add_data(2.0, [("a", 15.0), ("b", 5.0)])?;
//! vis.update()?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod series;
pub mod surface;
pub mod ui;
pub mod util;
pub mod visualizer;

pub use config::{PointMarker, Theme, VisualizerConfig};
pub use error::{Result, VisualizerError};
pub use series::{SeriesColor, SeriesState};
pub use surface::Surface;
pub use visualizer::{Visualizer, YScale};
