//! Scatter chart - pure rendering layer.
//!
//! [`PlotData::prepare`] turns the visualizer buffers into plottable points and
//! axis bounds; [`draw_chart`] lays them out as a ratatui [`Chart`].

use super::formatters::{format_axis_label, truncate_label};
use super::ThemeColors;
use crate::config::VisualizerConfig;
use crate::series::SeriesState;
use crate::util::{to_terminal_color, PlotLayoutConfig};
use crate::visualizer::YScale;
use indexmap::IndexMap;
use ratatui::{
    layout::Constraint,
    style::{Color, Style},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

/// One series ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    /// Legend label, already truncated.
    pub label: String,
    /// Point color.
    pub color: Color,
    /// Points in plot space (y is log10 on a log scale).
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// Series in registration order.
    pub series: Vec<PlottedSeries>,
    /// X axis bounds.
    pub x_bounds: [f64; 2],
    /// Y axis bounds, in plot space.
    pub y_bounds: [f64; 2],
    /// Scale the y bounds are expressed in.
    pub y_scale: YScale,
    /// Points left out because they cannot be placed on the axes.
    pub skipped: usize,
}

impl PlotData {
    /// Build plottable points from the x buffer and the series buffers.
    pub fn prepare(
        x: &[f64],
        series: &IndexMap<String, SeriesState>,
        y_scale: YScale,
        layout: &PlotLayoutConfig,
    ) -> Self {
        let mut skipped = 0;
        let plotted: Vec<PlottedSeries> = series
            .iter()
            .map(|(label, state)| {
                let mut points = Vec::with_capacity(state.len());
                for (&xv, &yv) in x.iter().zip(state.values()) {
                    match to_plot_space(xv, yv, y_scale) {
                        Some(p) => points.push(p),
                        None => skipped += 1,
                    }
                }
                PlottedSeries {
                    label: truncate_label(label, layout.legend_label_width),
                    color: to_terminal_color(state.color()),
                    points,
                }
            })
            .collect();

        let all_points = || plotted.iter().flat_map(|s| s.points.iter());
        let x_bounds = axis_bounds(all_points().map(|p| p.0), layout.y_axis_padding_factor);
        let y_bounds = axis_bounds(all_points().map(|p| p.1), layout.y_axis_padding_factor);

        Self {
            series: plotted,
            x_bounds,
            y_bounds,
            y_scale,
            skipped,
        }
    }
}

/// Map a data point into plot space, or `None` if it has no place on the axes.
fn to_plot_space(x: f64, y: f64, y_scale: YScale) -> Option<(f64, f64)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    match y_scale {
        YScale::Linear => Some((x, y)),
        YScale::Log if y > 0.0 => Some((x, y.log10())),
        YScale::Log => None,
    }
}

/// Padded `[min, max]` of the values, `[0, 1]` when there are none.
fn axis_bounds(values: impl Iterator<Item = f64>, padding_factor: f64) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }

    if min > max {
        return [0.0, 1.0];
    }

    let span = max - min;
    if span == 0.0 {
        // Scale with magnitude so the window stays wider than one ulp.
        let half = (min.abs() * 0.05).max(0.5);
        return widen_or_keep(min, max, half);
    }
    if !span.is_finite() {
        return [min, max];
    }

    widen_or_keep(min, max, span * padding_factor.max(0.0))
}

/// `[min - pad, max + pad]`, or `[min, max]` if padding leaves the finite range.
fn widen_or_keep(min: f64, max: f64, pad: f64) -> [f64; 2] {
    let lo = min - pad;
    let hi = max + pad;
    if pad.is_finite() && lo.is_finite() && hi.is_finite() {
        [lo, hi]
    } else {
        [min, max]
    }
}

/// Min, mid and max labels for an axis.
fn axis_labels(bounds: [f64; 2], scale: YScale) -> Vec<String> {
    let [lo, hi] = bounds;
    [lo, (lo + hi) / 2.0, hi]
        .into_iter()
        .map(|v| match scale {
            YScale::Linear => format_axis_label(v),
            YScale::Log => format_axis_label(10f64.powf(v)),
        })
        .collect()
}

/// Draw the scatter chart over the whole frame.
pub fn draw_chart(f: &mut Frame<'_>, data: &PlotData, config: &VisualizerConfig) {
    let colors = ThemeColors::from_theme(config.theme);

    let datasets: Vec<Dataset<'_>> = data
        .series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.label.clone())
                .marker(config.marker.symbol())
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(s.color))
                .data(&s.points)
        })
        .collect();

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.text))
        .bounds(data.x_bounds)
        .labels(axis_labels(data.x_bounds, YScale::Linear));

    let y_axis_title = match data.y_scale {
        YScale::Linear => "value",
        YScale::Log => "value (log)",
    };
    let y_axis = Axis::default()
        .title(y_axis_title)
        .style(Style::default().fg(colors.text))
        .bounds(data.y_bounds)
        .labels(axis_labels(data.y_bounds, data.y_scale));

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    if let Some(ref title) = config.title {
        block = block
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(colors.heading));
    }

    let chart = Chart::new(datasets)
        .block(block)
        .style(Style::default().bg(colors.bg))
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Percentage(100), Constraint::Percentage(100)));

    f.render_widget(chart, f.area());
}
