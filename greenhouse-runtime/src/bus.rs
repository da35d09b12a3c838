//! Typed cross-context channels.
//!
//! The console's modules render in isolated contexts and cannot share
//! in-process state directly; they communicate over explicit, injected
//! channels instead of an ambient global bus. A [`Channel`] is one typed
//! topic with get/broadcast/watch semantics; a module's "bus" is simply
//! the set of channels handed to it at construction time.

use async_broadcast::{InactiveReceiver, Receiver, RecvError, Sender, TrySendError};
use futures::Stream;
use parking_lot::RwLock;
use pin_project::pin_project;
use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

/// Default number of in-flight values a slow subscriber may lag behind
const DEFAULT_CAPACITY: usize = 16;

/// A typed topic connecting independently-mounted modules
///
/// Values broadcast on a channel reach every live subscription, and the
/// latest value is retained for late joiners asking via [`Channel::get`].
/// Publishes are delivered to subscriptions registered before the publish
/// call; no further ordering is guaranteed.
///
/// Cloning produces another handle onto the same topic.
#[derive(Clone)]
pub struct Channel<T> {
    tx: Sender<T>,
    // Keeps the broadcast open while no subscription is live
    keepalive: InactiveReceiver<T>,
    retained: Arc<RwLock<Option<T>>>,
}

impl<T: Clone> Default for Channel<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T: Clone> Channel<T> {
    /// Creates a channel retaining up to `capacity` undelivered values per subscriber
    ///
    /// A subscriber that lags further behind observes only the newest
    /// values; this bus carries current state, not an event log.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (mut tx, rx) = async_broadcast::broadcast(capacity);
        tx.set_overflow(true);
        Self {
            tx,
            keepalive: rx.deactivate(),
            retained: Arc::new(RwLock::new(None)),
        }
    }

    /// Publishes a value to all current subscribers and retains it for future ones
    pub fn broadcast(&self, value: T) {
        *self.retained.write() = Some(value.clone());
        match self.tx.try_broadcast(value) {
            Ok(_) => {}
            // nobody watching right now; the retained value covers late joiners
            Err(TrySendError::Inactive(_)) => {}
            Err(err) => tracing::warn!(error = %err, "dropped channel broadcast"),
        }
    }

    /// Resolves with the current value for this topic
    ///
    /// Returns immediately if a value has ever been broadcast; otherwise
    /// waits for the first publish. There is no timeout at this layer --
    /// if no publisher ever answers, the future never resolves, and
    /// composition code is expected to wrap it (see
    /// [`await_auth`](crate::shell::await_auth)).
    pub async fn get(&self) -> T {
        // subscribe before inspecting the retained value so a publish
        // between the two cannot be missed
        let mut rx = self.keepalive.activate_cloned();
        if let Some(value) = self.retained.read().clone() {
            return value;
        }
        loop {
            match rx.recv().await {
                Ok(value) => return value,
                Err(RecvError::Overflowed(missed)) => {
                    tracing::trace!(missed, "channel subscriber lagged");
                }
                Err(RecvError::Closed) => return std::future::pending().await,
            }
        }
    }

    /// Subscribes to all future values for this topic
    ///
    /// Dropping the returned [`Subscription`] unsubscribes; consumers must
    /// drop it on teardown so the channel does not accumulate listeners.
    #[must_use]
    pub fn watch(&self) -> Subscription<T> {
        Subscription {
            rx: self.keepalive.activate_cloned(),
        }
    }
}

/// A live subscription to a [`Channel`], yielding each published value
///
/// Unsubscribes on drop.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Subscription<T> {
    #[pin]
    rx: Receiver<T>,
}

impl<T: Clone> Stream for Subscription<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().rx.poll_next(cx)
    }
}
