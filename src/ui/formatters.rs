//! Shared formatting utilities for chart labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Truncate `label` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_pick_precision_by_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(0.256), "0.26");
        assert_eq!(format_axis_label(12.34), "12.3");
        assert_eq!(format_axis_label(1234.0), "1234");
        assert_eq!(format_axis_label(250000.0), "2.5e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_label("cpu", 8), "cpu");
    }

    #[test]
    fn long_labels_end_in_ellipsis() {
        assert_eq!(truncate_label("temperature", 6), "tempe…");
        assert_eq!(truncate_label("temperature", 6).width(), 6);
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK char takes two columns.
        assert_eq!(truncate_label("温度温度", 5), "温度…");
    }
}
