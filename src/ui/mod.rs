mod background;
mod cards;
mod hero;
mod icons;
pub mod layout;
mod theme;

use crate::app::state::AppState;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const WELCOME: &str = "Welcome to your beautiful new project! This is where amazing things begin. \
                       Every great journey starts with a simple greeting.";
const FOOTER: &str = "Built with ♥ using Rust, ratatui, and tokio";

pub fn render(frame: &mut Frame, state: &AppState) {
    let page = layout::compute_layout(frame.area());
    let anim = &state.config.animation;

    background::render(frame, page.background, state);
    hero::render(frame, page.hero, state);

    // Staggered entrance
    if state.elapsed_ms >= anim.intro_delay_ms {
        render_intro(frame, page.intro);
    }
    if state.elapsed_ms >= anim.cards_delay_ms {
        cards::render(frame, &page, state);
    }
    if state.elapsed_ms >= anim.footer_delay_ms {
        frame.render_widget(
            Paragraph::new(Span::styled(FOOTER, theme::Theme::footer()))
                .alignment(Alignment::Center),
            page.footer,
        );
    }
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let [column] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(WELCOME, theme::Theme::intro()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        column,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let area = state.viewport;
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[Position::new(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn settled_state() -> AppState {
        let mut state = AppState::new(AppConfig::default(), Rect::new(0, 0, 120, 40));
        state.advance_frame(5000);
        state
    }

    #[test]
    fn test_full_page_renders_static_content() {
        let screen = draw(&settled_state());
        assert!(screen.contains("Welcome to your beautiful new project!"));
        assert!(screen.contains("The classic greeting"));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("Built with ♥ using Rust"));
        assert!(screen.contains("H i"));
        assert!(!screen.contains("Say "));
    }

    #[test]
    fn test_sections_enter_in_order() {
        let mut state = AppState::new(AppConfig::default(), Rect::new(0, 0, 120, 40));
        let screen = draw(&state);
        assert!(!screen.contains("Welcome"));
        assert!(!screen.contains("classic greeting"));

        state.advance_frame(450);
        let screen = draw(&state);
        assert!(screen.contains("Welcome"));
        assert!(!screen.contains("classic greeting"));
        assert!(!screen.contains("Built with"));

        state.advance_frame(600);
        let screen = draw(&state);
        assert!(screen.contains("classic greeting"));
        assert!(screen.contains("Built with"));
    }

    #[test]
    fn test_hovered_card_reveals_its_button() {
        let mut state = settled_state();
        state.hover_start(1);
        for _ in 0..30 {
            state.advance_frame(50);
        }
        let screen = draw(&state);
        assert!(screen.contains("Say Hello!"));
        assert!(!screen.contains("Say Hi!"));
        assert!(!screen.contains("Say Hey!"));
    }

    #[test]
    fn test_hero_follows_rotation() {
        let mut state = settled_state();
        state.advance_greeting();
        state.advance_greeting();
        state.advance_frame(2000);
        let screen = draw(&state);
        assert!(screen.contains("H e y"));
        assert!(screen.contains("☀"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = settled_state();
        state.hover_start(0);
        state.advance_frame(1000);
        for (w, h) in [(1, 1), (10, 3), (30, 8), (0, 0)] {
            state.viewport = Rect::new(0, 0, w, h);
            if w > 0 && h > 0 {
                draw(&state);
            }
        }
    }
}
