//! Gradient preset registry and selection state.
//!
//! The registry is populated once from the fixed preset table. Selecting a
//! descriptor matches structurally against the presets; a descriptor that
//! matches nothing is carried by a single transient "Custom" entry kept at
//! the front of the registry.

use log::{debug, trace};

use colorscale_core::error::{Error, Result};
use colorscale_core::gradient::{presets, GradientDescriptor};

use crate::signal::{Signal, SubscriptionId};

/// Display name given to descriptors that match no preset.
pub const CUSTOM_NAME: &str = "Custom";

/// A named gradient in the registry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientEntry {
    /// Display name (capitalized preset key, or "Custom").
    pub name: String,
    /// The gradient itself.
    pub descriptor: GradientDescriptor,
}

/// Holds the gradient registry and the current selection.
#[derive(Debug)]
pub struct GradientSelector {
    entries: Vec<GradientEntry>,
    current: usize,
    changed: Signal<GradientDescriptor>,
}

impl Default for GradientSelector {
    fn default() -> Self {
        let entries = presets()
            .into_iter()
            .map(|(name, descriptor)| GradientEntry {
                name: capitalize(name),
                descriptor,
            })
            .collect();
        Self {
            entries,
            current: 0,
            changed: Signal::new(),
        }
    }
}

impl GradientSelector {
    /// Creates a selector over the fixed preset table, with the first
    /// preset selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry entries in order; the transient Custom entry, when present,
    /// is always first.
    #[must_use]
    pub fn entries(&self) -> &[GradientEntry] {
        &self.entries
    }

    /// Descriptor of the current selection.
    #[must_use]
    pub fn current(&self) -> &GradientDescriptor {
        &self.entries[self.current].descriptor
    }

    /// Display name of the current selection.
    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.entries[self.current].name
    }

    /// Selects the registry entry with the given display name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGradient`] when no entry carries that name;
    /// the selection is left untouched.
    pub fn select_named(&mut self, name: &str) -> Result<bool> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_else(|| Error::UnknownGradient(name.to_owned()))?;
        if index == self.current {
            trace!("gradient selection unchanged ({name})");
            return Ok(false);
        }
        self.current = index;
        debug!("gradient changed to {name}");
        let descriptor = self.entries[index].descriptor.clone();
        self.changed.emit(&descriptor);
        Ok(true)
    }

    /// Makes `descriptor` the current selection.
    ///
    /// A structural match against the presets selects that preset without
    /// creating new entries. Otherwise the single transient Custom entry is
    /// inserted, or replaced, at the front and selected. Either way at most
    /// one `gradient-changed` notification is delivered, and none when the
    /// selection would not actually change.
    pub fn set_current(&mut self, descriptor: &GradientDescriptor) -> bool {
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| entry.name != CUSTOM_NAME && entry.descriptor == *descriptor)
        {
            if index == self.current {
                trace!("gradient selection unchanged ({})", self.entries[index].name);
                return false;
            }
            self.current = index;
            debug!("gradient changed to {}", self.entries[index].name);
            let selected = self.entries[index].descriptor.clone();
            self.changed.emit(&selected);
            return true;
        }

        let has_custom = self.entries.first().is_some_and(|e| e.name == CUSTOM_NAME);
        if has_custom {
            if self.current == 0 && self.entries[0].descriptor == *descriptor {
                trace!("custom gradient unchanged");
                return false;
            }
            self.entries[0].descriptor = descriptor.clone();
        } else {
            self.entries.insert(
                0,
                GradientEntry {
                    name: CUSTOM_NAME.to_owned(),
                    descriptor: descriptor.clone(),
                },
            );
        }
        self.current = 0;
        debug!("gradient changed to custom descriptor");
        self.changed.emit(descriptor);
        true
    }

    /// Subscribes to `gradient-changed`.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&GradientDescriptor) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(callback)
    }

    /// Removes a `gradient-changed` subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
