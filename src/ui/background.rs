//! Two soft blobs behind the page that drift with the pointer.

use crate::app::state::{AppState, PointerPosition};
use crate::config::BackgroundConfig;
use crate::ui::theme::Theme;
use ratatui::prelude::*;

/// One full fade out and back in.
const PULSE_PERIOD_MS: u64 = 2000;

/// Shaded ellipse filling its bounding box at `(left, top)`, relative to the
/// render area. Cells outside the area are clipped.
struct Blob {
    left: i32,
    top: i32,
    radius_x: u16,
    radius_y: u16,
    color: Color,
    dim: bool,
}

impl Widget for Blob {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rx = f32::from(self.radius_x.max(1));
        let ry = f32::from(self.radius_y.max(1));
        let cx = self.left as f32 + rx;
        let cy = self.top as f32 + ry;

        let mut style = Style::default().fg(self.color);
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }

        for row in 0..area.height {
            for col in 0..area.width {
                let dx = (col as f32 + 0.5 - cx) / rx;
                let dy = (row as f32 + 0.5 - cy) / ry;
                let d = dx * dx + dy * dy;
                if d > 1.0 {
                    continue;
                }
                let symbol = if d < 0.35 { "▒" } else { "░" };
                let position = Position::new(area.x + col, area.y + row);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

/// Top-left corners of the two blobs for a pointer position. The first is
/// pushed right/down by `pointer / primary_divisor`; the second is pulled
/// left/up from the bottom-right corner by `pointer / secondary_divisor`.
pub fn blob_origins(
    area: Rect,
    pointer: PointerPosition,
    config: &BackgroundConfig,
) -> [(i32, i32); 2] {
    let scaled = |v: i32, divisor: f32| (v as f32 / divisor).round() as i32;

    let primary = (
        scaled(pointer.x, config.primary_divisor),
        scaled(pointer.y, config.primary_divisor),
    );

    let diameter_x = 2 * i32::from(config.radius_x);
    let diameter_y = 2 * i32::from(config.radius_y);
    let secondary = (
        i32::from(area.width) - diameter_x - scaled(pointer.x, config.secondary_divisor),
        i32::from(area.height) - diameter_y - scaled(pointer.y, config.secondary_divisor),
    );

    [primary, secondary]
}

fn pulse_dim(elapsed_ms: u64, delay_ms: u64) -> bool {
    (elapsed_ms + delay_ms) % PULSE_PERIOD_MS >= PULSE_PERIOD_MS / 2
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let config = &state.config.background;
    if !config.enabled {
        return;
    }

    let [primary, secondary] = blob_origins(area, state.pointer, config);
    let blobs = [
        (primary, Theme::BLOB_BLUE, 0),
        (secondary, Theme::BLOB_PURPLE, PULSE_PERIOD_MS / 2),
    ];
    for ((left, top), color, delay) in blobs {
        frame.render_widget(
            Blob {
                left,
                top,
                radius_x: config.radius_x,
                radius_y: config.radius_y,
                color,
                dim: pulse_dim(state.elapsed_ms, delay),
            },
            area,
        );
    }
}
