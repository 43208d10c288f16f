//! Pointer tracking: forwards every pointer move from the global pointer
//! stream into the event loop as `AppEvent::PointerMoved`.

use crate::app::event::AppEvent;
use crate::runtime::pointer::PointerSource;
use crate::runtime::subscription::Subscription;
use tokio::sync::mpsc;

pub fn start(source: &dyn PointerSource, event_tx: mpsc::UnboundedSender<AppEvent>) -> Subscription {
    source.subscribe(
        "pointer",
        Box::new(move |position| {
            let _ = event_tx.send(AppEvent::PointerMoved(position));
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler;
    use crate::app::state::{AppState, PointerPosition};
    use crate::config::AppConfig;
    use crate::runtime::pointer::PointerHub;
    use ratatui::layout::Rect;

    fn drain(state: &mut AppState, rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> usize {
        let mut handled = 0;
        while let Ok(event) = rx.try_recv() {
            handler::handle_event(state, event);
            handled += 1;
        }
        handled
    }

    #[test]
    fn test_every_move_overwrites_position() {
        let hub = PointerHub::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(AppConfig::default(), Rect::new(0, 0, 100, 40));
        let _pointer = start(&hub, tx);

        hub.publish(PointerPosition::new(100, 200));
        hub.publish(PointerPosition::new(50, 50));
        assert_eq!(drain(&mut state, &mut rx), 2);
        assert_eq!(state.pointer, PointerPosition::new(50, 50));
    }

    #[test]
    fn test_no_tracking_after_teardown() {
        let hub = PointerHub::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(AppConfig::default(), Rect::new(0, 0, 100, 40));
        let pointer = start(&hub, tx);

        hub.publish(PointerPosition::new(7, 8));
        drain(&mut state, &mut rx);

        drop(pointer);
        hub.publish(PointerPosition::new(90, 30));
        assert_eq!(drain(&mut state, &mut rx), 0);
        assert_eq!(state.pointer, PointerPosition::new(7, 8));
    }
}
