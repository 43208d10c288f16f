//! The rotating greeting: icon, word, icon, with an exit-then-enter swap.

use crate::app::greetings::GREETINGS;
use crate::app::state::{AppState, TransitionPhase};
use crate::ui::icons;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Rows the greeting travels while entering or leaving.
const TRAVEL_ROWS: f32 = 2.0;
const BOUNCE_PERIOD_MS: u64 = 1000;
/// The right icon bounces half a period behind the left one.
const RIGHT_ICON_DELAY_MS: u64 = 500;
const ICON_GAP: u16 = 3;

/// How the hero looks at one point of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroMotion {
    pub index: usize,
    /// Rows below (positive) or above (negative) the resting row.
    pub offset: i32,
    pub faded: bool,
    /// Full size: letters spread out. Shrunk while fading.
    pub spread: bool,
}

pub fn hero_motion(phase: TransitionPhase) -> HeroMotion {
    match phase {
        TransitionPhase::Exiting { index, progress } => HeroMotion {
            index,
            offset: -(progress * TRAVEL_ROWS).round() as i32,
            faded: progress >= 0.5,
            spread: progress < 0.5,
        },
        TransitionPhase::Entering { index, progress } => HeroMotion {
            index,
            offset: ((1.0 - progress) * TRAVEL_ROWS).round() as i32,
            faded: progress < 0.5,
            spread: progress >= 0.5,
        },
        TransitionPhase::Settled { index } => HeroMotion {
            index,
            offset: 0,
            faded: false,
            spread: true,
        },
    }
}

fn bounce(elapsed_ms: u64, delay_ms: u64) -> i32 {
    if (elapsed_ms + delay_ms) % BOUNCE_PERIOD_MS < BOUNCE_PERIOD_MS / 2 {
        -1
    } else {
        0
    }
}

fn spread_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let motion = hero_motion(state.transition.phase());
    let entry = &GREETINGS[motion.index];

    let mut style = Theme::greeting(entry.color);
    if motion.faded {
        style = style.add_modifier(Modifier::DIM);
    }
    let word = if motion.spread {
        spread_letters(entry.text)
    } else {
        entry.text.to_string()
    };
    let glyph = icons::glyph(entry.icon);

    let word_width = word.width() as u16;
    let glyph_width = glyph.width() as u16;
    let total = glyph_width * 2 + ICON_GAP * 2 + word_width;
    let left = area.x + area.width.saturating_sub(total) / 2;
    let resting_row = i32::from(area.y + area.height / 2) + motion.offset;

    let pieces = [
        (left, glyph.to_string(), bounce(state.elapsed_ms, 0)),
        (left + glyph_width + ICON_GAP, word, 0),
        (
            left + glyph_width + ICON_GAP * 2 + word_width,
            glyph.to_string(),
            bounce(state.elapsed_ms, RIGHT_ICON_DELAY_MS),
        ),
    ];

    let buf = frame.buffer_mut();
    for (x, text, lift) in pieces {
        let row = resting_row + lift;
        let Ok(y) = u16::try_from(row) else {
            continue;
        };
        if y < area.y || y >= area.bottom() || x >= area.right() {
            continue;
        }
        buf.set_stringn(x, y, &text, usize::from(area.right() - x), style);
    }
}
