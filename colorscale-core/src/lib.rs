//! colorscale-core: Auto-level algorithms and colormap data model.
//!
//! This crate provides the pure, side-effect-free layer of the colorscale
//! workspace: statistical auto-level algorithms deriving a display range
//! from a data distribution, a validated histogram container, gradient
//! descriptors with the fixed preset table, and normalization scales.
//!
//! Reactive state (range/gradient/normalization holders with change
//! notification) lives in `colorscale-session`.
#![warn(missing_docs)]

pub mod autolevel;
pub mod error;
pub mod gradient;
pub mod histogram;
pub mod normalization;

pub use autolevel::{
    auto_level, auto_level_histogram, auto_level_histogram_with_config, auto_level_samples,
    auto_level_samples_with_config, auto_level_with_config, AutoLevelConfig, AutoLevelInput,
    AutoLevelMode,
};
pub use error::{Error, Result};
pub use gradient::{presets, GradientDescriptor, GradientMode, GradientStop};
pub use histogram::HistogramBins;
pub use normalization::NormalizationMode;
