//! Display range state with ordering and change dedup.

use log::{debug, trace};

use crate::signal::{Signal, SubscriptionId};

/// A display value range; stored state always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl LevelRange {
    /// Creates a range, swapping the bounds if given in reverse order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if max < min {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }
}

impl From<(f64, f64)> for LevelRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Holds the current colormap range and notifies on actual changes.
///
/// Inverted bounds are corrected by swapping, never rejected. Setting the
/// stored pair again is an idempotent no-op with no notification.
#[derive(Debug)]
pub struct RangeHolder {
    range: LevelRange,
    changed: Signal<LevelRange>,
}

impl Default for RangeHolder {
    fn default() -> Self {
        Self {
            range: LevelRange { min: 1.0, max: 1.0 },
            changed: Signal::new(),
        }
    }
}

impl RangeHolder {
    /// Creates a holder with the documented default range `(1, 1)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored range.
    #[must_use]
    pub fn get(&self) -> LevelRange {
        self.range
    }

    /// Stores an ordered range and emits `range-changed` with the final
    /// ordered values. Returns false (and emits nothing) when the ordered
    /// pair equals the stored pair.
    pub fn set(&mut self, min: f64, max: f64) -> bool {
        let next = LevelRange::new(min, max);
        if next == self.range {
            trace!("range unchanged at [{}, {}]", next.min, next.max);
            return false;
        }
        self.range = next;
        debug!("range changed to [{}, {}]", next.min, next.max);
        self.changed.emit(&next);
        true
    }

    /// Subscribes to `range-changed`.
    pub fn subscribe(&mut self, callback: impl FnMut(&LevelRange) + 'static) -> SubscriptionId {
        self.changed.subscribe(callback)
    }

    /// Removes a `range-changed` subscriber.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }
}

/// Parses range editor text into a range, per the text-entry contract:
/// unparseable (or non-finite) minimum falls back to 1, unparseable maximum
/// falls back to the minimum. Never an error.
#[must_use]
pub fn range_from_text(min_text: &str, max_text: &str) -> LevelRange {
    let min = min_text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(1.0);
    let max = max_text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(min);
    LevelRange::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spy(holder: &mut RangeHolder) -> Rc<RefCell<Vec<LevelRange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        holder.subscribe(move |range| sink.borrow_mut().push(*range));
        seen
    }

    #[test]
    fn test_default_range() {
        let holder = RangeHolder::new();
        assert_eq!(holder.get(), LevelRange { min: 1.0, max: 1.0 });
    }

    #[test]
    fn test_set_orders_and_notifies_once() {
        let mut holder = RangeHolder::new();
        let seen = spy(&mut holder);

        assert!(holder.set(100.0, 1000.0));
        assert_eq!(holder.get(), LevelRange::new(100.0, 1000.0));

        // Inverted bounds are swapped before storing.
        assert!(holder.set(2000.0, 1000.0));
        assert_eq!(holder.get(), LevelRange { min: 1000.0, max: 2000.0 });

        assert_eq!(
            *seen.borrow(),
            vec![LevelRange::new(100.0, 1000.0), LevelRange::new(1000.0, 2000.0)]
        );
    }

    #[test]
    fn test_swapped_arguments_store_identical_state() {
        let mut a = RangeHolder::new();
        let mut b = RangeHolder::new();
        let seen_a = spy(&mut a);
        let seen_b = spy(&mut b);

        a.set(2.0, 9.0);
        b.set(9.0, 2.0);

        assert_eq!(a.get(), b.get());
        assert_eq!(seen_a.borrow().len(), 1);
        assert_eq!(seen_b.borrow().len(), 1);
    }

    #[test]
    fn test_repeated_set_is_a_no_op() {
        let mut holder = RangeHolder::new();
        let seen = spy(&mut holder);

        assert!(holder.set(5.0, 5.0));
        assert!(!holder.set(5.0, 5.0));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_range_from_text_fallbacks() {
        assert_eq!(range_from_text("10", "20"), LevelRange::new(10.0, 20.0));
        assert_eq!(range_from_text("oops", "20"), LevelRange::new(1.0, 20.0));
        assert_eq!(range_from_text("10", ""), LevelRange::new(10.0, 10.0));
        assert_eq!(range_from_text("", ""), LevelRange::new(1.0, 1.0));
        assert_eq!(range_from_text("nan", "inf"), LevelRange::new(1.0, 1.0));
    }
}
