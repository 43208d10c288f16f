//! Cancellation handles for timer and pointer subscriptions.
//!
//! A [`Subscription`] is returned by every capability that hands out
//! callbacks. Cancelling it (explicitly or by dropping it) flips a shared
//! [`CancelToken`] that the emitter checks before every delivery, and aborts
//! the backing task when there is one. Cancellation is idempotent.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shared flag checked by an emitter before it delivers to a subscriber.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Returns `true` only for the call that actually cancelled.
    fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

/// Owning handle to an active subscription. Dropping it cancels.
#[derive(Debug)]
pub struct Subscription {
    name: &'static str,
    token: CancelToken,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn new(name: &'static str, token: CancelToken) -> Self {
        Self {
            name,
            token,
            task: None,
        }
    }

    /// A subscription backed by a spawned task that is aborted on cancel.
    pub fn with_task(name: &'static str, token: CancelToken, task: JoinHandle<()>) -> Self {
        Self {
            name,
            token,
            task: Some(task),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn cancel(&mut self) {
        if self.token.cancel() {
            tracing::debug!(subscription = self.name, "subscription cancelled");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Every subscription the page holds. Teardown cancels each one
/// independently, exactly once, on every exit path.
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        tracing::debug!(subscription = subscription.name(), "subscription started");
        self.active.push(subscription);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn teardown(&mut self) {
        if self.active.is_empty() {
            return;
        }
        tracing::info!(count = self.active.len(), "tearing down subscriptions");
        for mut subscription in self.active.drain(..) {
            subscription.cancel();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_cancels_token() {
        let token = CancelToken::new();
        let sub = Subscription::new("timer", token.clone());
        assert!(sub.is_active());
        drop(sub);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancelToken::new();
        let mut sub = Subscription::new("timer", token.clone());
        sub.cancel();
        sub.cancel();
        assert!(!sub.is_active());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_teardown_cancels_every_subscription() {
        let timer = CancelToken::new();
        let pointer = CancelToken::new();
        let mut subs = Subscriptions::new();
        subs.push(Subscription::new("timer", timer.clone()));
        subs.push(Subscription::new("pointer", pointer.clone()));
        assert_eq!(subs.len(), 2);

        subs.teardown();
        assert_eq!(subs.len(), 0);
        assert!(timer.is_cancelled());
        assert!(pointer.is_cancelled());

        // A second teardown has nothing left to do.
        subs.teardown();
    }

    #[test]
    fn test_already_cancelled_does_not_block_others() {
        let timer = CancelToken::new();
        let pointer = CancelToken::new();
        let mut first = Subscription::new("timer", timer.clone());
        first.cancel();

        let mut subs = Subscriptions::new();
        subs.push(first);
        subs.push(Subscription::new("pointer", pointer.clone()));
        drop(subs);

        assert!(timer.is_cancelled());
        assert!(pointer.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_aborts_backing_task() {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);
        let task = tokio::spawn(async move {
            let _held = tx;
            std::future::pending::<()>().await;
        });
        let mut sub = Subscription::with_task("ticker", CancelToken::new(), task);
        sub.cancel();
        // The aborted task drops its sender, closing the channel.
        assert!(rx.recv().await.is_none());
    }
}
