//! Repeating timers behind an injectable [`Scheduler`].
//!
//! The page never touches a global clock directly: the rotator and the frame
//! ticker ask a scheduler for a repeating callback and keep the returned
//! [`Subscription`]. Production uses [`TokioScheduler`]; tests drive a
//! manual scheduler by hand.

use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::subscription::{CancelToken, Subscription};

pub type Callback = Box<dyn FnMut() + Send + 'static>;

pub trait Scheduler {
    /// Run `callback` every `period` (first run one period from now) until the
    /// returned subscription is cancelled or dropped.
    fn schedule_repeating(
        &self,
        name: &'static str,
        period: Duration,
        callback: Callback,
    ) -> Subscription;
}

/// Wall-clock scheduler backed by `tokio::time::interval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_repeating(
        &self,
        name: &'static str,
        period: Duration,
        mut callback: Callback,
    ) -> Subscription {
        let token = CancelToken::new();
        let guard = token.clone();
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if guard.is_cancelled() {
                    break;
                }
                callback();
            }
        });
        Subscription::with_task(name, token, task)
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct ManualTimer {
        name: &'static str,
        token: CancelToken,
        callback: Callback,
    }

    /// Fires registered callbacks only when told to.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        timers: Arc<Mutex<Vec<ManualTimer>>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fire every live timer with the given name once. Returns how many
        /// callbacks ran.
        pub fn fire(&self, name: &str) -> usize {
            let mut timers = self.timers.lock().unwrap();
            timers.retain(|t| !t.token.is_cancelled());
            let mut fired = 0;
            for timer in timers.iter_mut().filter(|t| t.name == name) {
                (timer.callback)();
                fired += 1;
            }
            fired
        }

        pub fn live_timers(&self) -> usize {
            let timers = self.timers.lock().unwrap();
            timers.iter().filter(|t| !t.token.is_cancelled()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule_repeating(
            &self,
            name: &'static str,
            _period: Duration,
            callback: Callback,
        ) -> Subscription {
            let token = CancelToken::new();
            self.timers.lock().unwrap().push(ManualTimer {
                name,
                token: token.clone(),
                callback,
            });
            Subscription::new(name, token)
        }
    }
}
