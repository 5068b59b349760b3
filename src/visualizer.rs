//! The live scatter visualizer.
//!
//! A [`Visualizer`] buffers an x axis and a fixed set of named y series, and
//! redraws all of them as scatter points whenever [`Visualizer::update`] is
//! called. Every series advances in lockstep with the x axis: each call to
//! [`Visualizer::add_data`] must supply exactly one value per registered
//! series, otherwise nothing is appended.

use crate::config::VisualizerConfig;
use crate::error::{Result, VisualizerError};
use crate::series::{SeriesColor, SeriesState};
use crate::surface::Surface;
use crate::ui::{draw_chart, PlotData};
use indexmap::IndexMap;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::backend::Backend;

/// Scale of the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    /// Values plotted as-is.
    #[default]
    Linear,
    /// Values plotted as log10; non-positive values are not drawn.
    Log,
}

/// Live scatter plot of named series against a shared x axis.
#[derive(Debug)]
pub struct Visualizer<B: Backend> {
    surface: Surface<B>,
    config: VisualizerConfig,
    x: Vec<f64>,
    series: IndexMap<String, SeriesState>,
    y_scale: YScale,
    frames: u64,
}

impl<B: Backend> Visualizer<B> {
    /// Create a visualizer with default settings and draw the empty chart.
    pub fn new<I, S>(surface: Surface<B>, log_scale: bool, series_labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = VisualizerConfig::default().with_log_scale(log_scale);
        Self::with_config(surface, config, series_labels)
    }

    /// Create a visualizer and draw the empty chart with its legend.
    ///
    /// Each series gets an independently sampled color. The set of series is
    /// fixed from here on.
    pub fn with_config<I, S>(
        surface: Surface<B>,
        config: VisualizerConfig,
        series_labels: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut series = IndexMap::new();
        for label in series_labels {
            let label = label.into();
            if series.contains_key(&label) {
                return Err(VisualizerError::duplicate_series(label));
            }
            series.insert(label, SeriesState::new(SeriesColor::random(&mut rng)));
        }

        let mut visualizer = Self {
            surface,
            config,
            x: Vec::new(),
            series,
            y_scale: YScale::Linear,
            frames: 0,
        };
        tracing::debug!(
            series = visualizer.series.len(),
            log_scale = visualizer.config.log_scale,
            theme = visualizer.config.theme.name(),
            "Created visualizer"
        );

        visualizer.render()?;
        Ok(visualizer)
    }

    /// Append one x value and one value for every registered series.
    ///
    /// The data is checked before anything is appended: an unknown label, a
    /// missing series, or a series given twice is rejected and the buffers
    /// are left as they were.
    pub fn add_data<I, K>(&mut self, x: f64, data: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut row: Vec<Option<f64>> = vec![None; self.series.len()];
        for (label, value) in data {
            let label = label.as_ref();
            let idx = self
                .series
                .get_index_of(label)
                .ok_or_else(|| VisualizerError::unknown_series(label))?;
            if row[idx].replace(value).is_some() {
                return Err(VisualizerError::duplicate_datum(label));
            }
        }

        let values = row
            .into_iter()
            .zip(self.series.keys())
            .map(|(value, label)| value.ok_or_else(|| VisualizerError::missing_series(label)))
            .collect::<Result<Vec<f64>>>()?;

        self.x.push(x);
        for (state, value) in self.series.values_mut().zip(values) {
            state.push(value);
        }
        tracing::trace!(x, points = self.x.len(), "Appended data point");

        Ok(())
    }

    /// Redraw every series from the current buffers, then pause briefly so the
    /// display can refresh.
    ///
    /// Switches the y axis to log scale when configured. Buffers are not modified.
    pub fn update(&mut self) -> Result<()> {
        if self.config.log_scale {
            self.y_scale = YScale::Log;
        }

        self.render()?;

        if !self.config.refresh_pause.is_zero() {
            std::thread::sleep(self.config.refresh_pause);
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let data = PlotData::prepare(&self.x, &self.series, self.y_scale, &self.config.layout);
        if data.skipped > 0 {
            tracing::debug!(skipped = data.skipped, "Left out points with no place on the axes");
        }

        let config = &self.config;
        self.surface.draw(|f| draw_chart(f, &data, config))?;
        self.frames += 1;
        tracing::debug!(frame = self.frames, points = self.x.len(), "Rendered frame");

        Ok(())
    }

    /// Buffered x values.
    pub fn x_values(&self) -> &[f64] {
        &self.x
    }

    /// State of the series called `label`.
    pub fn series(&self, label: &str) -> Option<&SeriesState> {
        self.series.get(label)
    }

    /// Registered labels, in registration order.
    pub fn series_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(String::as_str)
    }

    /// Color assigned to `label` at setup.
    pub fn series_color(&self, label: &str) -> Option<SeriesColor> {
        self.series.get(label).map(SeriesState::color)
    }

    /// Number of buffered data points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether no data point has been added yet.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Current y axis scale.
    pub fn y_scale(&self) -> YScale {
        self.y_scale
    }

    /// Whether log scaling was requested.
    pub fn is_log_scale(&self) -> bool {
        self.config.log_scale
    }

    /// Number of frames drawn so far, including the initial one.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Active configuration.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The surface being drawn on.
    pub fn surface(&self) -> &Surface<B> {
        &self.surface
    }
}
