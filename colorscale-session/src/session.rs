//! Session facade tying range, gradient, normalization and reset state
//! together.
//!
//! The session is single-threaded and exclusively owned; every mutating
//! call performs its computation and delivers all resulting notifications
//! before returning. A host embedding it in a multi-threaded environment
//! is responsible for serializing access.

use log::{debug, trace};

use colorscale_core::autolevel::{auto_level, AutoLevelInput, AutoLevelMode};
use colorscale_core::error::Result;
use colorscale_core::histogram::HistogramBins;

use crate::gradient::GradientSelector;
use crate::normalization::NormalizationSelector;
use crate::range::RangeHolder;
use crate::signal::{Signal, SubscriptionId};

/// Reactive state for one colormap control session.
///
/// The range, gradient and normalization holders are public; subscribe and
/// mutate them directly. The reset-mode state machine is mediated by the
/// session because a reset feeds the auto-level result into the range
/// holder.
#[derive(Debug)]
pub struct ColormapSession {
    /// Current display range.
    pub range: RangeHolder,
    /// Gradient registry and selection.
    pub gradients: GradientSelector,
    /// Normalization scale selection.
    pub normalization: NormalizationSelector,
    reset_mode: AutoLevelMode,
    mode_changed: Signal<AutoLevelMode>,
    input: Option<AutoLevelInput>,
}

impl Default for ColormapSession {
    fn default() -> Self {
        Self {
            range: RangeHolder::new(),
            gradients: GradientSelector::new(),
            normalization: NormalizationSelector::new(),
            reset_mode: AutoLevelMode::Default,
            mode_changed: Signal::new(),
            input: None,
        }
    }
}

impl ColormapSession {
    /// Creates a session with the documented defaults: range `(1, 1)`,
    /// reset mode `default`, normalization `linear`, first preset selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active auto-level policy.
    #[must_use]
    pub fn reset_mode(&self) -> AutoLevelMode {
        self.reset_mode
    }

    /// Returns true when data is attached, so a reset has something to do.
    /// Hosts use this to enable their reset control.
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.input.is_some()
    }

    /// The attached auto-level input, if any.
    #[must_use]
    pub fn input(&self) -> Option<&AutoLevelInput> {
        self.input.as_ref()
    }

    /// Attaches raw samples as the distribution resets operate on.
    pub fn set_samples(&mut self, samples: Vec<f64>) {
        debug!("attached {} raw samples", samples.len());
        self.input = Some(AutoLevelInput::Samples(samples));
    }

    /// Attaches a precomputed histogram as the distribution resets operate on.
    pub fn set_histogram(&mut self, histogram: HistogramBins) {
        debug!("attached histogram with {} bins", histogram.len());
        self.input = Some(AutoLevelInput::Histogram(histogram));
    }

    /// Detaches the distribution; subsequent resets are no-ops.
    pub fn clear_input(&mut self) {
        self.input = None;
    }

    /// Switches the auto-level policy.
    ///
    /// An actual mode change always emits `mode-changed`, then recomputes
    /// the range from the attached input; the recomputation may itself be a
    /// no-op (no input, no result, or an unchanged range) without
    /// suppressing the mode notification. Selecting the active mode again
    /// does nothing.
    pub fn set_reset_mode(&mut self, mode: AutoLevelMode) -> bool {
        if mode == self.reset_mode {
            trace!("reset mode unchanged ({mode})");
            return false;
        }
        self.reset_mode = mode;
        debug!("reset mode changed to {mode}");
        self.mode_changed.emit(&mode);
        self.apply_auto_level();
        true
    }

    /// [`set_reset_mode`](Self::set_reset_mode) from a stable mode name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names; neither the mode nor the range
    /// is touched.
    pub fn set_reset_mode_by_name(&mut self, name: &str) -> Result<bool> {
        let mode = AutoLevelMode::from_name(name)?;
        Ok(self.set_reset_mode(mode))
    }

    /// Recomputes the range from the attached input with the active mode.
    /// No-op without input; range-changed dedup applies downstream.
    pub fn request_reset(&mut self) {
        self.apply_auto_level();
    }

    fn apply_auto_level(&mut self) {
        let Some(input) = &self.input else {
            trace!("reset requested without attached data");
            return;
        };
        match auto_level(input, self.reset_mode) {
            Some((min, max)) => {
                self.range.set(min, max);
            }
            None => trace!("auto-level produced no result; range preserved"),
        }
    }

    /// Subscribes to `mode-changed`.
    pub fn on_mode_changed(
        &mut self,
        callback: impl FnMut(&AutoLevelMode) + 'static,
    ) -> SubscriptionId {
        self.mode_changed.subscribe(callback)
    }

    /// Removes a `mode-changed` subscriber.
    pub fn unsubscribe_mode_changed(&mut self, id: SubscriptionId) -> bool {
        self.mode_changed.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::LevelRange;

    #[test]
    fn test_defaults() {
        let session = ColormapSession::new();
        assert_eq!(session.range.get(), LevelRange { min: 1.0, max: 1.0 });
        assert_eq!(session.reset_mode(), AutoLevelMode::Default);
        assert!(!session.can_reset());
    }

    #[test]
    fn test_reset_without_input_is_a_no_op() {
        let mut session = ColormapSession::new();
        session.request_reset();
        assert_eq!(session.range.get(), LevelRange { min: 1.0, max: 1.0 });
    }

    #[test]
    fn test_clear_input_disables_reset() {
        let mut session = ColormapSession::new();
        session.set_samples(vec![0.0, 1.0, 2.0]);
        assert!(session.can_reset());
        session.clear_input();
        assert!(!session.can_reset());

        session.range.set(3.0, 4.0);
        session.request_reset();
        assert_eq!(session.range.get(), LevelRange::new(3.0, 4.0));
    }

    #[test]
    fn test_degenerate_input_preserves_range() {
        let mut session = ColormapSession::new();
        session.range.set(3.0, 4.0);
        session.set_samples(vec![f64::NAN, f64::INFINITY]);
        session.request_reset();
        assert_eq!(session.range.get(), LevelRange::new(3.0, 4.0));
    }
}
