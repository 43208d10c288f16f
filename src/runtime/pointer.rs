//! Pointer-move notifications behind an injectable [`PointerSource`].
//!
//! [`PointerHub`] is the terminal's global pointer stream: the input reader
//! publishes every mouse move into it and each subscriber callback runs
//! synchronously, in publish order, until its subscription is cancelled.

use std::sync::{Arc, Mutex, MutexGuard};

use super::subscription::{CancelToken, Subscription};
use crate::app::state::PointerPosition;

pub type PointerCallback = Box<dyn FnMut(PointerPosition) + Send + 'static>;

pub trait PointerSource {
    fn subscribe(&self, name: &'static str, callback: PointerCallback) -> Subscription;
}

struct Subscriber {
    token: CancelToken,
    callback: PointerCallback,
}

#[derive(Clone, Default)]
pub struct PointerHub {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Subscriber>> {
        // A panicking callback must not take the whole stream down with it.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Deliver a move to every live subscriber. Returns the number reached.
    pub fn publish(&self, position: PointerPosition) -> usize {
        let mut subscribers = self.lock();
        subscribers.retain(|s| !s.token.is_cancelled());
        for subscriber in subscribers.iter_mut() {
            (subscriber.callback)(position);
        }
        subscribers.len()
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|s| !s.token.is_cancelled())
            .count()
    }
}

impl PointerSource for PointerHub {
    fn subscribe(&self, name: &'static str, callback: PointerCallback) -> Subscription {
        let token = CancelToken::new();
        self.lock().push(Subscriber {
            token: token.clone(),
            callback,
        });
        Subscription::new(name, token)
    }
}
