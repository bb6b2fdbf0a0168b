//! Statistical auto-level algorithms.
//!
//! Derives a display value range `(min, max)` from a data distribution,
//! either from raw samples or from a precomputed histogram. Degenerate
//! input (empty, or nothing finite) yields `None` rather than an error,
//! so callers can keep their current range.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::histogram::HistogramBins;

/// Algorithm used to derive a display range from a distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AutoLevelMode {
    /// Histogram-based estimate that saturates the brightest 0.4% of counts.
    #[default]
    Default,
    /// Exact minimum and maximum of the distribution.
    MinMax,
    /// Mean ± 3 standard deviations, clipped to the distribution bounds.
    Mean3Std,
}

impl AutoLevelMode {
    /// All supported modes, in presentation order.
    pub const ALL: [AutoLevelMode; 3] = [
        AutoLevelMode::Default,
        AutoLevelMode::MinMax,
        AutoLevelMode::Mean3Std,
    ];

    /// Stable lowercase name used in host-facing state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AutoLevelMode::Default => "default",
            AutoLevelMode::MinMax => "minmax",
            AutoLevelMode::Mean3Std => "mean3std",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AutoLevelMode::Default => "Default",
            AutoLevelMode::MinMax => "Min/Max",
            AutoLevelMode::Mean3Std => "Mean±3 Std",
        }
    }

    /// Resolves a mode from its stable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] for any other name, so no engine
    /// or state code runs for an unsupported mode.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(AutoLevelMode::Default),
            "minmax" => Ok(AutoLevelMode::MinMax),
            "mean3std" => Ok(AutoLevelMode::Mean3Std),
            _ => Err(Error::UnsupportedMode(name.to_owned())),
        }
    }
}

impl FromStr for AutoLevelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for AutoLevelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunables for the histogram-based default estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoLevelConfig {
    /// Number of equal-width bins used to histogram raw samples.
    pub bins: usize,
    /// Fraction of the cumulative count kept below the upper bound.
    pub saturation_fraction: f64,
}

impl Default for AutoLevelConfig {
    fn default() -> Self {
        Self {
            bins: 3000,
            saturation_fraction: 0.996,
        }
    }
}

impl AutoLevelConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw-sample bin count.
    #[must_use]
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Sets the saturation fraction.
    #[must_use]
    pub fn with_saturation_fraction(mut self, fraction: f64) -> Self {
        self.saturation_fraction = fraction;
        self
    }
}

/// Input accepted by the auto-level engine.
///
/// Callers may hold either raw samples or an already-binned distribution;
/// both forms support every mode. Histogram-form statistics are weighted
/// approximations of the raw-sample statistics, not numerically identical
/// to them.
#[derive(Debug, Clone, PartialEq)]
pub enum AutoLevelInput {
    /// Raw sample values; non-finite entries are filtered before use.
    Samples(Vec<f64>),
    /// Pre-binned distribution, used as supplied.
    Histogram(HistogramBins),
}

/// Computes a display range from either input form.
#[must_use]
pub fn auto_level(input: &AutoLevelInput, mode: AutoLevelMode) -> Option<(f64, f64)> {
    auto_level_with_config(input, mode, AutoLevelConfig::default())
}

/// [`auto_level`] with explicit estimator tunables.
#[must_use]
pub fn auto_level_with_config(
    input: &AutoLevelInput,
    mode: AutoLevelMode,
    config: AutoLevelConfig,
) -> Option<(f64, f64)> {
    match input {
        AutoLevelInput::Samples(samples) => auto_level_samples_with_config(samples, mode, config),
        AutoLevelInput::Histogram(histogram) => {
            auto_level_histogram_with_config(histogram, mode, config)
        }
    }
}

/// Computes a display range from raw samples.
///
/// Non-finite values are filtered out first; `None` if nothing remains.
#[must_use]
pub fn auto_level_samples(samples: &[f64], mode: AutoLevelMode) -> Option<(f64, f64)> {
    auto_level_samples_with_config(samples, mode, AutoLevelConfig::default())
}

/// [`auto_level_samples`] with explicit estimator tunables.
#[must_use]
pub fn auto_level_samples_with_config(
    samples: &[f64],
    mode: AutoLevelMode,
    config: AutoLevelConfig,
) -> Option<(f64, f64)> {
    let filtered: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if filtered.is_empty() {
        return None;
    }
    match mode {
        AutoLevelMode::Default => {
            let histogram = HistogramBins::from_samples(&filtered, config.bins)?;
            default_levels(&histogram, config.saturation_fraction)
        }
        AutoLevelMode::MinMax => Some(sample_bounds(&filtered)),
        AutoLevelMode::Mean3Std => Some(sample_mean3std(&filtered)),
    }
}

/// Computes a display range from a precomputed histogram.
///
/// The histogram is taken to represent the full data; no further filtering
/// is applied. `None` for an empty histogram, or for modes that need counts
/// when every count is zero.
#[must_use]
pub fn auto_level_histogram(histogram: &HistogramBins, mode: AutoLevelMode) -> Option<(f64, f64)> {
    auto_level_histogram_with_config(histogram, mode, AutoLevelConfig::default())
}

/// [`auto_level_histogram`] with explicit estimator tunables.
#[must_use]
pub fn auto_level_histogram_with_config(
    histogram: &HistogramBins,
    mode: AutoLevelMode,
    config: AutoLevelConfig,
) -> Option<(f64, f64)> {
    match mode {
        AutoLevelMode::Default => default_levels(histogram, config.saturation_fraction),
        AutoLevelMode::MinMax => histogram.value_bounds(),
        AutoLevelMode::Mean3Std => weighted_mean3std(histogram),
    }
}

/// Cumulative-sum estimate over the non-empty bins of a histogram.
///
/// The minimum candidate is the mean of the two lowest surviving edges,
/// raised to the smallest strictly-positive edge if one exists. The maximum
/// is the left edge of the last bin whose cumulative count stays below
/// `saturation_fraction` of the total; when every bin crosses the threshold
/// (fully saturated histogram) the maximum falls back to half the largest
/// surviving edge. The bounds are reported as computed and may come out
/// inverted for degenerate distributions; ordering is the range holder's
/// concern, not the estimator's.
#[allow(clippy::cast_precision_loss)]
fn default_levels(histogram: &HistogramBins, saturation_fraction: f64) -> Option<(f64, f64)> {
    let surviving: Vec<(f64, u64)> = histogram
        .edges()
        .iter()
        .zip(histogram.counts())
        .filter(|(_, &count)| count > 0)
        .map(|(&edge, &count)| (edge, count))
        .collect();
    if surviving.is_empty() {
        return None;
    }

    let total: u64 = surviving.iter().map(|(_, count)| count).sum();
    let threshold = saturation_fraction * total as f64;

    let min_candidate = if surviving.len() >= 2 {
        (surviving[0].0 + surviving[1].0) / 2.0
    } else {
        surviving[0].0
    };
    let smallest_positive = surviving.iter().map(|(edge, _)| *edge).find(|&e| e > 0.0);
    let min_level = match smallest_positive {
        Some(edge) => min_candidate.max(edge),
        None => min_candidate,
    };

    let mut cumulative = 0u64;
    let mut max_level = None;
    for &(edge, count) in &surviving {
        cumulative += count;
        if (cumulative as f64) < threshold {
            max_level = Some(edge);
        }
    }
    let max_level = max_level.unwrap_or_else(|| 0.5 * surviving[surviving.len() - 1].0);

    Some((min_level, max_level))
}

fn sample_bounds(samples: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &value in samples {
        lo = lo.min(value);
        hi = hi.max(value);
    }
    (lo, hi)
}

/// Population mean ± 3 population standard deviations (divisor N), each
/// bound clipped into the sample min/max.
#[allow(clippy::cast_precision_loss)]
fn sample_mean3std(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let (lo, hi) = sample_bounds(samples);
    ((mean - 3.0 * std).max(lo), (mean + 3.0 * std).min(hi))
}

/// Count-weighted mean ± 3 weighted standard deviations over bin edges,
/// clipped to the bounds the histogram-form min/max would report.
#[allow(clippy::cast_precision_loss)]
fn weighted_mean3std(histogram: &HistogramBins) -> Option<(f64, f64)> {
    let total = histogram.total_count();
    if total == 0 {
        return None;
    }
    let weight = total as f64;
    let mean = histogram
        .edges()
        .iter()
        .zip(histogram.counts())
        .map(|(&edge, &count)| edge * count as f64)
        .sum::<f64>()
        / weight;
    let variance = histogram
        .edges()
        .iter()
        .zip(histogram.counts())
        .map(|(&edge, &count)| count as f64 * (edge - mean).powi(2))
        .sum::<f64>()
        / weight;
    let std = variance.sqrt();
    let (lo, hi) = histogram.value_bounds()?;
    Some(((mean - 3.0 * std).max(lo), (mean + 3.0 * std).min(hi)))
}
