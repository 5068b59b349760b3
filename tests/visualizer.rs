//! Behavior of the visualizer driven through a headless surface.

use livescatter::{Surface, Visualizer, VisualizerConfig, VisualizerError, YScale};
use ratatui::backend::TestBackend;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

fn headless(log_scale: bool, labels: &[&str]) -> Visualizer<TestBackend> {
    let config = VisualizerConfig::default()
        .with_log_scale(log_scale)
        .with_refresh_pause(Duration::ZERO)
        .with_color_seed(3);
    Visualizer::with_config(
        Surface::headless(80, 24).unwrap(),
        config,
        labels.iter().copied(),
    )
    .unwrap()
}

#[test]
fn buffers_follow_call_order() {
    let mut vis = headless(false, &["a", "b"]);

    vis.add_data(1.0, HashMap::from([("a", 10.0), ("b", 20.0)])).unwrap();
    vis.add_data(2.0, HashMap::from([("a", 15.0), ("b", 5.0)])).unwrap();

    assert_eq!(vis.x_values(), &[1.0, 2.0]);
    assert_eq!(vis.series("a").unwrap().values(), &[10.0, 15.0]);
    assert_eq!(vis.series("b").unwrap().values(), &[20.0, 5.0]);
}

#[test]
fn every_series_advances_with_the_x_axis() {
    let labels = ["cpu", "mem", "disk"];
    let mut vis = headless(false, &labels);

    for n in 1..=25 {
        let row: BTreeMap<String, f64> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.to_string(), (n * (i + 1)) as f64))
            .collect();
        vis.add_data(n as f64, row).unwrap();

        assert_eq!(vis.len(), n);
        for label in labels {
            assert_eq!(vis.series(label).unwrap().len(), n);
        }
    }
}

#[test]
fn colors_are_stable_across_renders() {
    let mut vis = headless(false, &["a", "b"]);
    let before: Vec<_> = ["a", "b"]
        .iter()
        .map(|l| vis.series_color(l).unwrap())
        .collect();

    for i in 0..5 {
        vis.add_data(i as f64, [("a", 1.0), ("b", 2.0)]).unwrap();
        vis.update().unwrap();
    }

    let after: Vec<_> = ["a", "b"]
        .iter()
        .map(|l| vis.series_color(l).unwrap())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn update_does_not_touch_buffers() {
    let mut vis = headless(true, &["a"]);
    vis.add_data(0.0, [("a", 4.0)]).unwrap();
    vis.add_data(1.0, [("a", -1.0)]).unwrap();

    let x = vis.x_values().to_vec();
    let a = vis.series("a").unwrap().clone();
    vis.update().unwrap();
    vis.update().unwrap();

    assert_eq!(vis.x_values(), x.as_slice());
    assert_eq!(vis.series("a").unwrap(), &a);
}

#[test]
fn log_scale_applies_on_update() {
    let mut vis = headless(true, &["x"]);
    assert!(vis.is_log_scale());
    assert_eq!(vis.y_scale(), YScale::Linear);

    vis.add_data(0.0, [("x", 1.0)]).unwrap();
    vis.update().unwrap();

    assert_eq!(vis.y_scale(), YScale::Log);
}

#[test]
fn linear_visualizer_never_switches_scale() {
    let mut vis = headless(false, &["x"]);
    vis.add_data(0.0, [("x", 1.0)]).unwrap();
    vis.update().unwrap();
    assert_eq!(vis.y_scale(), YScale::Linear);
}

#[test]
fn unregistered_label_is_rejected_at_add_time() {
    let mut vis = headless(false, &["a"]);

    let err = vis.add_data(1.0, [("unregistered", 5.0)]).unwrap_err();

    assert!(matches!(err, VisualizerError::UnknownSeries { ref label } if label == "unregistered"));
    assert!(vis.is_empty());
    assert!(vis.series("a").unwrap().is_empty());
}

#[test]
fn partial_data_is_rejected() {
    let mut vis = headless(false, &["a", "b"]);

    let err = vis.add_data(1.0, [("a", 1.0)]).unwrap_err();

    assert_eq!(err.to_string(), "Missing value for series: b");
    assert!(vis.is_empty());
}

#[test]
fn duplicate_labels_are_rejected_at_setup() {
    let err =
        Visualizer::new(Surface::headless(40, 10).unwrap(), false, ["a", "b", "a"]).unwrap_err();
    assert!(matches!(err, VisualizerError::DuplicateSeries { ref label } if label == "a"));
}

#[test]
fn no_series_still_renders() {
    let mut vis = headless(false, &[]);
    vis.add_data(1.0, Vec::<(&str, f64)>::new()).unwrap();
    vis.update().unwrap();
    assert_eq!(vis.len(), 1);
    assert_eq!(vis.frame_count(), 2);
}

#[test]
fn legend_shows_every_label() {
    let mut vis = headless(false, &["north", "south"]);
    assert!(vis.surface().snapshot().contains("north"));

    vis.add_data(1.0, [("north", 3.0), ("south", 7.0)]).unwrap();
    vis.update().unwrap();

    let frame = vis.surface().snapshot();
    assert!(frame.contains("north"));
    assert!(frame.contains("south"));
}

#[test]
fn seeded_colors_are_reproducible() {
    let a = headless(false, &["a", "b"]);
    let b = headless(false, &["a", "b"]);
    assert_eq!(a.series_color("a"), b.series_color("a"));
    assert_eq!(a.series_color("b"), b.series_color("b"));
}

#[test]
fn extreme_magnitudes_keep_readable_axes() {
    let mut vis = headless(false, &["a"]);
    vis.add_data(-1e308, [("a", -1e308)]).unwrap();
    vis.add_data(1e308, [("a", 1e308)]).unwrap();
    vis.update().unwrap();

    assert!(!vis.surface().snapshot().contains('?'));
}
