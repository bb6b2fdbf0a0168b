//! Gradient descriptors and the fixed preset table.
//!
//! A descriptor is a color-interpolation mode plus an ordered list of stops.
//! Descriptors are compared structurally and order-sensitively, so two
//! descriptors with the same stops in a different order are distinct.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color interpolation mode between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GradientMode {
    /// Interpolate in RGB space.
    Rgb,
    /// Interpolate in HSV space.
    Hsv,
}

/// A single color stop of a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientStop {
    /// Normalized position in `[0, 1]`.
    pub position: f64,
    /// RGBA color at this position.
    pub color: [u8; 4],
}

/// An ordered color ramp mapping normalized scalar values to colors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradientDescriptor {
    /// Interpolation mode.
    pub mode: GradientMode,
    /// Color stops, in the order supplied by the source.
    pub stops: Vec<GradientStop>,
}

impl GradientDescriptor {
    /// Creates an RGB-mode descriptor from `(position, rgba)` pairs.
    #[must_use]
    pub fn rgb(stops: &[(f64, [u8; 4])]) -> Self {
        Self::with_mode(GradientMode::Rgb, stops)
    }

    /// Creates an HSV-mode descriptor from `(position, rgba)` pairs.
    #[must_use]
    pub fn hsv(stops: &[(f64, [u8; 4])]) -> Self {
        Self::with_mode(GradientMode::Hsv, stops)
    }

    fn with_mode(mode: GradientMode, stops: &[(f64, [u8; 4])]) -> Self {
        Self {
            mode,
            stops: stops
                .iter()
                .map(|&(position, color)| GradientStop { position, color })
                .collect(),
        }
    }
}

/// The fixed preset table, in presentation order.
///
/// Names are the lowercase preset keys; hosts display them capitalized.
/// Stop order within each preset is part of the preset's identity.
#[must_use]
pub fn presets() -> Vec<(&'static str, GradientDescriptor)> {
    vec![
        (
            "thermal",
            GradientDescriptor::rgb(&[
                (0.3333, [185, 0, 0, 255]),
                (0.6666, [255, 220, 0, 255]),
                (1.0, [255, 255, 255, 255]),
                (0.0, [0, 0, 0, 255]),
            ]),
        ),
        (
            "flame",
            GradientDescriptor::rgb(&[
                (0.2, [7, 0, 220, 255]),
                (0.5, [236, 0, 134, 255]),
                (0.8, [246, 246, 0, 255]),
                (1.0, [255, 255, 255, 255]),
                (0.0, [0, 0, 0, 255]),
            ]),
        ),
        (
            "yellowy",
            GradientDescriptor::rgb(&[
                (0.0, [0, 0, 0, 255]),
                (0.2328863796753704, [32, 0, 129, 255]),
                (0.8362738179251941, [255, 255, 0, 255]),
                (0.5257586450247, [115, 15, 255, 255]),
                (1.0, [255, 255, 255, 255]),
            ]),
        ),
        (
            "bipolar",
            GradientDescriptor::rgb(&[
                (0.0, [0, 255, 255, 255]),
                (1.0, [255, 255, 0, 255]),
                (0.5, [0, 0, 0, 255]),
                (0.25, [0, 0, 255, 255]),
                (0.75, [255, 0, 0, 255]),
            ]),
        ),
        (
            "spectrum",
            GradientDescriptor::hsv(&[(1.0, [255, 0, 255, 255]), (0.0, [255, 0, 0, 255])]),
        ),
        (
            "cyclic",
            GradientDescriptor::hsv(&[(0.0, [255, 0, 4, 255]), (1.0, [255, 0, 0, 255])]),
        ),
        (
            "greyclip",
            GradientDescriptor::rgb(&[
                (0.0, [0, 0, 0, 255]),
                (0.99, [255, 255, 255, 255]),
                (1.0, [255, 0, 0, 255]),
            ]),
        ),
        (
            "grey",
            GradientDescriptor::rgb(&[(0.0, [0, 0, 0, 255]), (1.0, [255, 255, 255, 255])]),
        ),
        (
            "viridis",
            GradientDescriptor::rgb(&[
                (0.0, [68, 1, 84, 255]),
                (0.25, [58, 82, 139, 255]),
                (0.5, [32, 144, 140, 255]),
                (0.75, [94, 201, 97, 255]),
                (1.0, [253, 231, 36, 255]),
            ]),
        ),
        (
            "inferno",
            GradientDescriptor::rgb(&[
                (0.0, [0, 0, 3, 255]),
                (0.25, [87, 15, 109, 255]),
                (0.5, [187, 55, 84, 255]),
                (0.75, [249, 142, 8, 255]),
                (1.0, [252, 254, 164, 255]),
            ]),
        ),
        (
            "plasma",
            GradientDescriptor::rgb(&[
                (0.0, [12, 7, 134, 255]),
                (0.25, [126, 3, 167, 255]),
                (0.5, [203, 71, 119, 255]),
                (0.75, [248, 149, 64, 255]),
                (1.0, [239, 248, 33, 255]),
            ]),
        ),
        (
            "magma",
            GradientDescriptor::rgb(&[
                (0.0, [0, 0, 3, 255]),
                (0.25, [80, 18, 123, 255]),
                (0.5, [182, 54, 121, 255]),
                (0.75, [251, 136, 97, 255]),
                (1.0, [251, 252, 191, 255]),
            ]),
        ),
    ]
}
