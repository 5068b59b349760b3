//! Visualizer configuration.

use crate::util::PlotLayoutConfig;
use ratatui::symbols::Marker;
use std::time::Duration;

/// Pause after each render, giving the display time to refresh.
pub const DEFAULT_REFRESH_PAUSE: Duration = Duration::from_micros(100);

/// Chart theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Glyph used to draw each scatter point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointMarker {
    /// One dot per cell.
    Dot,
    /// Braille patterns, 2x4 points per cell.
    #[default]
    Braille,
    /// Full block per cell.
    Block,
    /// Half blocks, 1x2 points per cell.
    HalfBlock,
}

impl PointMarker {
    /// The ratatui marker for this glyph.
    pub fn symbol(self) -> Marker {
        match self {
            Self::Dot => Marker::Dot,
            Self::Braille => Marker::Braille,
            Self::Block => Marker::Block,
            Self::HalfBlock => Marker::HalfBlock,
        }
    }
}

/// Settings for a [`Visualizer`](crate::Visualizer).
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    /// Plot y values on a log10 scale once `update` runs.
    pub log_scale: bool,
    /// Pause taken at the end of every `update`.
    pub refresh_pause: Duration,
    /// Point glyph.
    pub marker: PointMarker,
    /// Color theme for axes, borders and title.
    pub theme: Theme,
    /// Optional chart title.
    pub title: Option<String>,
    /// Seed for series colors. `None` draws from OS entropy.
    pub color_seed: Option<u64>,
    /// Chart layout.
    pub layout: PlotLayoutConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            log_scale: false,
            refresh_pause: DEFAULT_REFRESH_PAUSE,
            marker: PointMarker::default(),
            theme: Theme::default(),
            title: None,
            color_seed: None,
            layout: PlotLayoutConfig::default(),
        }
    }
}

impl VisualizerConfig {
    /// Set log scaling.
    pub fn with_log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Set the pause taken after each render.
    pub fn with_refresh_pause(mut self, pause: Duration) -> Self {
        self.refresh_pause = pause;
        self
    }

    /// Set the point glyph.
    pub fn with_marker(mut self, marker: PointMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Seed the color source for reproducible series colors.
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    /// Replace the layout settings.
    pub fn with_layout(mut self, layout: PlotLayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}
