use crate::app::state::PointerPosition;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event (keys, clicks, resize, focus)
    Terminal(CrosstermEvent),

    /// Pointer moved, delivered through the pointer subscription
    PointerMoved(PointerPosition),

    /// Greeting rotation timer fired
    Rotate,

    /// Frame tick for animations
    Tick,
}
