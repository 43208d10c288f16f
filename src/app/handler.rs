use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout::{card_button, compute_layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

/// Below this reveal value the "Say" button is too small to click.
const BUTTON_CLICKABLE: f32 = 0.5;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::PointerMoved(position) => {
            handle_pointer(state, position);
            vec![]
        }
        AppEvent::Rotate => {
            state.advance_greeting();
            tracing::trace!(index = state.rotation.index(), "greeting rotated");
            vec![]
        }
        AppEvent::Tick => {
            state.advance_frame(state.config.animation.tick_ms);
            vec![]
        }
    }
}

/// Record the pointer and derive hover start/end from which card it is over.
fn handle_pointer(state: &mut AppState, position: PointerPosition) {
    state.move_pointer(position);

    let target = compute_layout(state.viewport).card_at(position.x, position.y);
    let current = state.hover.current();
    if target == current {
        return;
    }
    if current.is_some() {
        state.hover_end();
    }
    if let Some(index) = target {
        state.hover_start(index);
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            state.resize(width, height);
            handle_pointer(state, state.pointer);
            vec![]
        }
        CEvent::FocusLost => {
            state.hover_end();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let Some(index) = state.hover.current() else {
        return vec![];
    };
    if !(state.reveal[index].value >= BUTTON_CLICKABLE) {
        return vec![];
    }
    let card = compute_layout(state.viewport).card_area(index, true);
    if card_button(card).contains(Position::new(mouse.column, mouse.row)) {
        vec![Action::Say { index }]
    } else {
        vec![]
    }
}
