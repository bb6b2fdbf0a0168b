//! colorscale-session: Reactive state for colormap controls.
//!
//! This crate keeps a display range, a gradient selection, a normalization
//! mode and a reset-mode selector mutually consistent and observable. Four
//! independent notification channels deliver changes synchronously, in
//! subscription order, with per-holder dedup:
//! - range-changed
//! - gradient-changed
//! - normalization-changed
//! - mode-changed
//!
//! The algorithms themselves live in `colorscale-core` and are re-exported
//! here for convenience.

mod gradient;
mod normalization;
mod range;
mod session;
mod signal;

pub use gradient::{GradientEntry, GradientSelector, CUSTOM_NAME};
pub use normalization::NormalizationSelector;
pub use range::{range_from_text, LevelRange, RangeHolder};
pub use session::ColormapSession;
pub use signal::{Signal, SubscriptionId};

// Re-export the core types appearing in this crate's API.
pub use colorscale_core::{
    auto_level, AutoLevelConfig, AutoLevelInput, AutoLevelMode, Error, GradientDescriptor,
    GradientMode, GradientStop, HistogramBins, NormalizationMode, Result,
};
