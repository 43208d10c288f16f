use crate::app::greetings::{preview_cards, GreetingEntry, PreviewCard};
use crate::app::state::AppState;
use crate::ui::icons;
use crate::ui::layout::{card_button, PageLayout};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn render(frame: &mut Frame, layout: &PageLayout, state: &AppState) {
    for (index, entry, card) in preview_cards() {
        let hovered = state.hover.is(index);
        let area = layout.card_area(index, hovered);
        let reveal = state.reveal[index].value;
        render_card(frame, area, entry, card, hovered, reveal);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    entry: &GreetingEntry,
    card: PreviewCard,
    hovered: bool,
    reveal: f32,
) {
    let border_style = if hovered {
        Theme::card_border_hovered(card.accent)
    } else {
        Theme::card_border()
    };
    let block = Block::bordered()
        .border_type(Theme::border_type())
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 6 {
        return;
    }

    let [badge, _, title, description, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let badge_line = Line::from(Span::styled(
        format!(" {} ", icons::glyph(entry.icon)),
        Style::default()
            .fg(Theme::color(entry.color))
            .bg(Theme::tint(card.accent)),
    ));
    frame.render_widget(Paragraph::new(badge_line).alignment(Alignment::Center), badge);

    frame.render_widget(
        Paragraph::new(Span::styled(entry.text, Theme::card_title())).alignment(Alignment::Center),
        title,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(card.description, Theme::card_text()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        description,
    );

    let label = scaled_label(&format!(" Say {}! ", entry.text), reveal);
    if !label.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(label, Theme::button(entry.color)))
                .alignment(Alignment::Center),
            card_button(area),
        );
    }
}

/// The middle `fraction` of a label, so the button grows out from its centre.
fn scaled_label(label: &str, fraction: f32) -> String {
    let len = label.chars().count();
    let shown = ((len as f32) * fraction.clamp(0.0, 1.0)).round() as usize;
    let start = (len - shown) / 2;
    label.chars().skip(start).take(shown).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_label_grows_from_centre() {
        assert_eq!(scaled_label(" Say Hi! ", 0.0), "");
        assert_eq!(scaled_label(" Say Hi! ", 1.0), " Say Hi! ");
        assert_eq!(scaled_label(" Say Hi! ", 1.3), " Say Hi! ");
        assert_eq!(scaled_label("abcdef", 0.5), "bcd");
        assert_eq!(scaled_label("abcdef", -0.2), "");
    }
}
