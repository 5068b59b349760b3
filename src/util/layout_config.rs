//! Layout configuration constants for the scatter chart.

/// Configuration for the scatter chart layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayoutConfig {
    /// Padding factor for both axes (0.1 = 10% margin on each side).
    pub y_axis_padding_factor: f64,
    /// Maximum display width of a legend label, in terminal columns.
    pub legend_label_width: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            legend_label_width: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_leaves_room_around_points() {
        let layout = PlotLayoutConfig::default();
        assert!(layout.y_axis_padding_factor > 0.0);
        assert!(layout.legend_label_width >= 8);
    }
}
