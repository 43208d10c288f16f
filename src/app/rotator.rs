//! Greeting rotation: a repeating timer that feeds `AppEvent::Rotate` into
//! the event loop. The index itself lives in `AppState` and is only advanced
//! by the loop, so no state crosses threads.

use crate::app::event::AppEvent;
use crate::runtime::scheduler::Scheduler;
use crate::runtime::subscription::Subscription;
use std::time::Duration;
use tokio::sync::mpsc;

pub fn start(
    scheduler: &dyn Scheduler,
    interval: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> Subscription {
    tracing::info!(interval_ms = interval.as_millis() as u64, "starting greeting rotation");
    scheduler.schedule_repeating(
        "rotation",
        interval,
        Box::new(move || {
            let _ = event_tx.send(AppEvent::Rotate);
        }),
    )
}
