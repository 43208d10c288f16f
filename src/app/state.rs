use crate::app::greetings::{GreetingEntry, CARD_COUNT, GREETINGS};
use crate::config::AppConfig;
use ratatui::layout::Rect;

/// Last observed pointer location in terminal cells. Never validated:
/// negative or off-screen values are kept as reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Index into the greeting list, always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    index: usize,
    len: usize,
}

impl RotationState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the next entry, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }
}

/// Which preview card the pointer is over, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverSelection(Option<usize>);

impl HoverSelection {
    pub fn current(&self) -> Option<usize> {
        self.0
    }

    pub fn is(&self, index: usize) -> bool {
        self.0 == Some(index)
    }

    pub fn start(&mut self, index: usize) {
        if index < CARD_COUNT {
            self.0 = Some(index);
        }
    }

    /// Clears the selection whichever card it was on.
    pub fn end(&mut self) {
        self.0 = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase {
    Exiting { index: usize, progress: f32 },
    Entering { index: usize, progress: f32 },
    Settled { index: usize },
}

/// Exit-then-enter animation between two greetings. Each half lasts
/// `half_ms`; with no outgoing greeting only the enter half plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreetingTransition {
    outgoing: Option<usize>,
    incoming: usize,
    elapsed_ms: u64,
    half_ms: u64,
}

impl GreetingTransition {
    pub fn enter(incoming: usize, half_ms: u64) -> Self {
        Self {
            outgoing: None,
            incoming,
            elapsed_ms: 0,
            half_ms: half_ms.max(1),
        }
    }

    pub fn swap(outgoing: usize, incoming: usize, half_ms: u64) -> Self {
        Self {
            outgoing: Some(outgoing),
            ..Self::enter(incoming, half_ms)
        }
    }

    pub fn advance(&mut self, ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
    }

    pub fn phase(&self) -> TransitionPhase {
        let mut t = self.elapsed_ms;
        if let Some(index) = self.outgoing {
            if t < self.half_ms {
                return TransitionPhase::Exiting {
                    index,
                    progress: t as f32 / self.half_ms as f32,
                };
            }
            t -= self.half_ms;
        }
        if t < self.half_ms {
            TransitionPhase::Entering {
                index: self.incoming,
                progress: t as f32 / self.half_ms as f32,
            }
        } else {
            TransitionPhase::Settled {
                index: self.incoming,
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.phase(), TransitionPhase::Settled { .. })
    }
}

/// Damped spring with unit mass, used for the card button reveal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
}

const SPRING_SUBSTEP_SECS: f32 = 0.004;
const SPRING_REST_DELTA: f32 = 0.001;
const SPRING_REST_SPEED: f32 = 0.01;

impl Spring {
    pub fn step(&mut self, target: f32, stiffness: f32, damping: f32, dt_secs: f32) {
        let mut remaining = dt_secs;
        while remaining > 0.0 {
            let dt = remaining.min(SPRING_SUBSTEP_SECS);
            let accel = -stiffness * (self.value - target) - damping * self.velocity;
            self.velocity += accel * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }
        if !self.value.is_finite() || !self.velocity.is_finite() {
            self.value = target;
            self.velocity = 0.0;
            return;
        }
        if (self.value - target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
        {
            self.value = target;
            self.velocity = 0.0;
        }
    }

    pub fn is_resting_at(&self, target: f32) -> bool {
        self.value == target && self.velocity == 0.0
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub rotation: RotationState,
    pub transition: GreetingTransition,
    pub pointer: PointerPosition,
    pub hover: HoverSelection,
    pub reveal: [Spring; CARD_COUNT],
    pub viewport: Rect,
    pub elapsed_ms: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, viewport: Rect) -> Self {
        let half_ms = config.animation.transition_ms;
        Self {
            config,
            rotation: RotationState::new(GREETINGS.len()),
            transition: GreetingTransition::enter(0, half_ms),
            pointer: PointerPosition::default(),
            hover: HoverSelection::default(),
            reveal: [Spring::default(); CARD_COUNT],
            viewport,
            elapsed_ms: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn current_greeting(&self) -> &'static GreetingEntry {
        &GREETINGS[self.rotation.index()]
    }

    /// Move to the next greeting and start its exit-then-enter transition.
    pub fn advance_greeting(&mut self) {
        let outgoing = self.rotation.index();
        let incoming = self.rotation.advance();
        self.transition =
            GreetingTransition::swap(outgoing, incoming, self.config.animation.transition_ms);
        self.dirty = true;
    }

    pub fn move_pointer(&mut self, position: PointerPosition) {
        self.pointer = position;
        self.dirty = true;
    }

    pub fn hover_start(&mut self, index: usize) {
        self.hover.start(index);
        self.dirty = true;
    }

    pub fn hover_end(&mut self) {
        self.hover.end();
        self.dirty = true;
    }

    /// Advance every time-driven animation by one frame.
    pub fn advance_frame(&mut self, ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        self.transition.advance(ms);
        let anim = &self.config.animation;
        let dt = ms as f32 / 1000.0;
        for (i, spring) in self.reveal.iter_mut().enumerate() {
            let target = if self.hover.is(i) { 1.0 } else { 0.0 };
            spring.step(target, anim.reveal_stiffness, anim.reveal_damping, dt);
        }
        // Blob pulse and icon bounce run continuously.
        self.dirty = true;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }
}
