//! Synchronous per-channel publish/subscribe.
//!
//! Each state holder owns its channel; the channel does not own its
//! subscribers beyond the registered callbacks. Delivery is synchronous and
//! sequential in subscription order, within the mutating call that produced
//! the change. No ordering is guaranteed across different channels.

use std::fmt;

type Callback<T> = Box<dyn FnMut(&T)>;

/// Identifier returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A single notification channel with an ordered subscriber list.
pub struct Signal<T> {
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u64,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Signal<T> {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscriber; it is invoked after all earlier subscribers.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber by identity. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Delivers `payload` to every subscriber, in subscription order.
    pub fn emit(&mut self, payload: &T) {
        for (_, callback) in &mut self.subscribers {
            callback(payload);
        }
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delivery_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut signal = Signal::new();

        let first = Rc::clone(&seen);
        signal.subscribe(move |&v: &i32| first.borrow_mut().push(("first", v)));
        let second = Rc::clone(&seen);
        signal.subscribe(move |&v: &i32| second.borrow_mut().push(("second", v)));

        signal.emit(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe_by_identity() {
        let count = Rc::new(RefCell::new(0));
        let mut signal = Signal::new();

        let counter = Rc::clone(&count);
        let id = signal.subscribe(move |_: &i32| *counter.borrow_mut() += 1);
        assert_eq!(signal.subscriber_count(), 1);

        signal.emit(&1);
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.emit(&2);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }
}
