//! Error types for livescatter.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for visualizer operations.
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Errors that can occur while setting up or feeding a visualizer.
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The same series label was registered twice.
    #[error("Series registered more than once: {label}")]
    DuplicateSeries {
        /// Offending series label.
        label: String,
    },

    /// A data point referenced a label that was never registered.
    #[error("Unknown series: {label}")]
    UnknownSeries {
        /// Offending series label.
        label: String,
    },

    /// A data point omitted a registered series.
    #[error("Missing value for series: {label}")]
    MissingSeries {
        /// Offending series label.
        label: String,
    },

    /// A data point supplied the same series twice.
    #[error("Series given more than one value in a single update: {label}")]
    DuplicateDatum {
        /// Offending series label.
        label: String,
    },

    /// IO error from the rendering surface.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisualizerError {
    /// Create a DuplicateSeries error.
    pub fn duplicate_series(label: impl Into<String>) -> Self {
        Self::DuplicateSeries {
            label: label.into(),
        }
    }

    /// Create an UnknownSeries error.
    pub fn unknown_series(label: impl Into<String>) -> Self {
        Self::UnknownSeries {
            label: label.into(),
        }
    }

    /// Create a MissingSeries error.
    pub fn missing_series(label: impl Into<String>) -> Self {
        Self::MissingSeries {
            label: label.into(),
        }
    }

    /// Create a DuplicateDatum error.
    pub fn duplicate_datum(label: impl Into<String>) -> Self {
        Self::DuplicateDatum {
            label: label.into(),
        }
    }

    /// The series label this error refers to, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::DuplicateSeries { label }
            | Self::UnknownSeries { label }
            | Self::MissingSeries { label }
            | Self::DuplicateDatum { label } => Some(label),
            Self::Io(_) => None,
        }
    }
}
