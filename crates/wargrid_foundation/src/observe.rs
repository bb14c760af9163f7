//! Generic change-notification lists.
//!
//! Mutable aggregates expose an [`Observers`] list instead of a
//! framework signal system: consumers subscribe a callback, mutators
//! notify with an event value only when state actually changed, and
//! removal paths notify before ownership leaves the aggregate so
//! observers can drop their references first.

use std::fmt;

/// Identifies a subscription within one [`Observers`] list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

/// An ordered list of event callbacks.
///
/// Callbacks run synchronously, on the notifying thread, in
/// subscription order. The list is single-threaded like the aggregates
/// that own it.
pub struct Observers<E> {
    next: u64,
    callbacks: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
}

impl<E> Observers<E> {
    /// Creates an empty observer list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: 0,
            callbacks: Vec::new(),
        }
    }

    /// Registers a callback, returning its subscription id.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription.
    ///
    /// Returns true if the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    /// Invokes every callback with the event.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns true if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscriptions", &self.callbacks.len())
            .finish()
    }
}
