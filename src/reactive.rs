//! Change notification for store consumers.
//!
//! Every store owns a [`Subscribers`] list and calls [`Subscribers::notify`]
//! after each state-changing operation. Consumers register a callback with
//! `subscribe` and keep the returned [`Subscription`] guard alive for as long
//! as they want to hear about changes. Dropping the guard unsubscribes.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each notification.
//! 2. Subscribers are notified in registration order.
//! 3. Dead subscribers (dropped guards) are pruned lazily during `notify`.
//!
//! Stores are single-threaded, so callbacks are held in `Rc` and the list
//! is not `Send`.

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

type CallbackRc<E> = Rc<dyn Fn(&E)>;
type CallbackWeak<E> = Weak<dyn Fn(&E)>;

/// Registered listeners for events of type `E`.
pub struct Subscribers<E> {
    callbacks: Vec<CallbackWeak<E>>,
    version: u64,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            version: 0,
        }
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("subscriber_count", &self.callbacks.len())
            .field("version", &self.version)
            .finish()
    }
}

impl<E: 'static> Subscribers<E> {
    /// Create an empty subscriber list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It stays registered while the guard is alive.
    pub fn subscribe(&mut self, callback: impl Fn(&E) + 'static) -> Subscription {
        let strong: CallbackRc<E> = Rc::new(callback);
        self.callbacks.push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Notify live subscribers and prune dead ones.
    pub fn notify(&mut self, event: &E) {
        self.version += 1;
        self.callbacks.retain(|w| w.strong_count() > 0);
        let live: Vec<CallbackRc<E>> = self.callbacks.iter().filter_map(Weak::upgrade).collect();
        for callback in live {
            callback(event);
        }
    }

    /// Number of notifications sent so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of registered callbacks, including dead ones not yet pruned.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// Guard returned by `subscribe`. Dropping it removes the callback.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
