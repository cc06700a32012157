//! src/model/notifier.rs
//! ============================================================================
//! # Notifier: Synchronous In-Process Publish/Subscribe
//!
//! Small event distribution primitive used by [`Command`](crate::model::command::Command)
//! and composable into any other model object that needs observers. Delivery is
//! synchronous and in subscriber registration order; there is no replay for
//! late subscribers.
//!
//! Publishing snapshots the subscriber list before calling out, so a callback
//! may freely call back into the owning object (including subscribing,
//! unsubscribing or publishing again) while a publish is in flight.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Opaque handle identifying one subscription, returned by
/// [`Notifier::subscribe`] and consumed by [`Notifier::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Rc<dyn Fn(&E)>;

/// Single-threaded notifier with interior mutability. All methods take
/// `&self`; the type is neither `Send` nor `Sync` by construction.
pub struct Notifier<E> {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<E>)>>,
}

impl<E> Notifier<E> {
    /// Create a notifier with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback. Callbacks are invoked in registration order.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + 'static,
    {
        let id: SubscriptionId = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        self.subscribers.borrow_mut().push((id, Rc::new(callback)));

        id
    }

    /// Remove a subscription. Returns `false` if the id was already removed
    /// or never belonged to this notifier.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before: usize = subscribers.len();

        subscribers.retain(|(sub_id, _)| *sub_id != id);

        subscribers.len() != before
    }

    /// Deliver `event` to every current subscriber, synchronously.
    ///
    /// The subscriber list is snapshotted first: subscriptions added during
    /// delivery do not see this event, and removals during delivery do not
    /// suppress it.
    pub fn publish(&self, event: &E) {
        let snapshot: Vec<Callback<E>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_in_registration_order() {
        let notifier: Notifier<u32> = Notifier::new();
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        notifier.subscribe(move |_| first.borrow_mut().push("first"));

        let second = Rc::clone(&log);
        notifier.subscribe(move |_| second.borrow_mut().push("second"));

        notifier.publish(&1);

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let notifier: Notifier<u32> = Notifier::new();
        let count: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let id = notifier.subscribe(move |_| *counter.borrow_mut() += 1);

        notifier.publish(&1);
        assert!(notifier.unsubscribe(id));
        notifier.publish(&2);

        assert_eq!(*count.borrow(), 1);
        assert!(!notifier.unsubscribe(id));
    }

    #[test]
    fn subscriber_added_during_publish_misses_current_event() {
        let notifier: Rc<Notifier<u32>> = Rc::new(Notifier::new());
        let late_calls: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));

        let inner_notifier = Rc::clone(&notifier);
        let inner_calls = Rc::clone(&late_calls);
        notifier.subscribe(move |_| {
            let counter = Rc::clone(&inner_calls);
            inner_notifier.subscribe(move |_| *counter.borrow_mut() += 1);
        });

        notifier.publish(&1);
        assert_eq!(*late_calls.borrow(), 0);

        notifier.publish(&2);
        // Two late subscribers exist by now: one from each publish.
        assert_eq!(*late_calls.borrow(), 1);
    }

    #[test]
    fn unsubscribe_during_publish_does_not_suppress_current_event() {
        let notifier: Rc<Notifier<u32>> = Rc::new(Notifier::new());
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        let second_log = Rc::clone(&log);
        let second_id = notifier.subscribe(move |_| second_log.borrow_mut().push("second"));

        // Re-register "second"'s removal from inside "first". Snapshot
        // semantics mean "second" still sees the in-flight event.
        let inner_notifier = Rc::clone(&notifier);
        let first_log = Rc::clone(&log);
        notifier.subscribe(move |_| {
            first_log.borrow_mut().push("first");
            inner_notifier.unsubscribe(second_id);
        });

        notifier.publish(&1);
        assert_eq!(*log.borrow(), vec!["second", "first"]);

        notifier.publish(&2);
        assert_eq!(*log.borrow(), vec!["second", "first", "first"]);
    }
}
