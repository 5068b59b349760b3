//! Per-series state: display color and buffered y values.

use rand::Rng;

/// An RGB color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColor {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl SeriesColor {
    /// Create a color from unit-range channels.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Sample each channel independently and uniformly from `[0, 1)`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

/// Buffered state of one named series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesState {
    color: SeriesColor,
    values: Vec<f64>,
}

impl SeriesState {
    /// Create an empty series drawn in `color`.
    pub fn new(color: SeriesColor) -> Self {
        Self {
            color,
            values: Vec::new(),
        }
    }

    /// Display color assigned at setup.
    pub fn color(&self) -> SeriesColor {
        self.color
    }

    /// Buffered values, in arrival order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of buffered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no value has been buffered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_colors_stay_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let c = SeriesColor::random(&mut rng);
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_color() {
        let a = SeriesColor::random(&mut StdRng::seed_from_u64(42));
        let b = SeriesColor::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn push_keeps_order() {
        let mut series = SeriesState::new(SeriesColor::new(0.1, 0.2, 0.3));
        assert!(series.is_empty());
        series.push(3.0);
        series.push(1.0);
        assert_eq!(series.values(), &[3.0, 1.0]);
        assert_eq!(series.len(), 2);
    }
}
