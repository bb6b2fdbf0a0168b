//! Normalization scale selection state.

use log::{debug, trace};

use colorscale_core::error::Result;
use colorscale_core::normalization::NormalizationMode;

use crate::signal::{Signal, SubscriptionId};

/// Holds the current normalization scale, independent of range and gradient.
#[derive(Debug, Default)]
pub struct NormalizationSelector {
    mode: NormalizationMode,
    changed: Signal<NormalizationMode>,
}

impl NormalizationSelector {
    /// Creates a selector with the default `Linear` scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scale.
    #[must_use]
    pub fn get(&self) -> NormalizationMode {
        self.mode
    }

    /// Sets the scale, emitting `normalization-changed` unless unchanged.
    pub fn set(&mut self, mode: NormalizationMode) -> bool {
        if mode == self.mode {
            trace!("normalization unchanged ({mode})");
            return false;
        }
        self.mode = mode;
        debug!("normalization changed to {mode}");
        self.changed.emit(&mode);
        true
    }

    /// Sets the scale from its stable name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names; the selection is left untouched.
    pub fn set_by_name(&mut self, name: &str) -> Result<bool> {
        let mode = NormalizationMode::from_name(name)?;
        Ok(self.set(mode))
    }

    /// Subscribes to `normalization-changed`.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&NormalizationMode) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(callback)
    }

    /// Removes a `normalization-changed` subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }
}
