use crate::app::greetings::CARD_COUNT;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

/// Widest the centred content column gets.
const CONTENT_MAX_WIDTH: u16 = 96;

pub struct PageLayout {
    pub background: Rect,
    pub hero: Rect,
    pub intro: Rect,
    pub cards: [Rect; CARD_COUNT],
    pub footer: Rect,
}

pub fn compute_layout(area: Rect) -> PageLayout {
    // Centred column
    let [column] = Layout::horizontal([Constraint::Max(CONTENT_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let [hero, _, intro, _, card_row, _, footer] = Layout::vertical([
        Constraint::Length(5),  // Greeting
        Constraint::Length(1),
        Constraint::Length(3),  // Welcome paragraph
        Constraint::Length(2),
        Constraint::Length(10), // Preview cards
        Constraint::Length(2),
        Constraint::Length(1),  // Footer
    ])
    .flex(Flex::Center)
    .areas(column);

    let cards = Layout::horizontal([Constraint::Ratio(1, CARD_COUNT as u32); CARD_COUNT])
        .spacing(2)
        .areas(card_row);

    PageLayout {
        background: area,
        hero,
        intro,
        cards,
        footer,
    }
}

impl PageLayout {
    /// Where card `index` is drawn: hovered cards lift one row.
    pub fn card_area(&self, index: usize, hovered: bool) -> Rect {
        let base = self.cards[index];
        if hovered && base.y > 0 {
            Rect { y: base.y - 1, ..base }
        } else {
            base
        }
    }

    /// Index of the card under a pointer position, if any.
    pub fn card_at(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.cards
            .iter()
            .position(|card| card.contains(Position::new(x, y)))
    }
}

/// The row inside a drawn card that holds its "Say" button.
pub fn card_button(card: Rect) -> Rect {
    Rect {
        x: card.x.saturating_add(1),
        y: card.bottom().saturating_sub(2),
        width: card.width.saturating_sub(2),
        height: 1,
    }
    .intersection(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_are_side_by_side_and_disjoint() {
        let layout = compute_layout(Rect::new(0, 0, 120, 40));
        for pair in layout.cards.windows(2) {
            assert!(pair[0].right() < pair[1].x);
            assert_eq!(pair[0].y, pair[1].y);
        }
        assert!(layout.hero.bottom() <= layout.intro.y);
        assert!(layout.cards[0].bottom() <= layout.footer.y);
    }

    #[test]
    fn test_card_at_hits_only_cards() {
        let layout = compute_layout(Rect::new(0, 0, 120, 40));
        let second = layout.cards[1];
        assert_eq!(layout.card_at(second.x as i32, second.y as i32), Some(1));
        assert_eq!(
            layout.card_at((second.x + second.width / 2) as i32, (second.bottom() - 1) as i32),
            Some(1)
        );
        assert_eq!(layout.card_at(0, 0), None);
        assert_eq!(layout.card_at(-5, second.y as i32), None);
        assert_eq!(layout.card_at(second.x as i32, i32::MAX), None);
    }

    #[test]
    fn test_button_sits_inside_card() {
        let layout = compute_layout(Rect::new(0, 0, 120, 40));
        let card = layout.card_area(0, true);
        let button = card_button(card);
        assert_eq!(button.height, 1);
        assert_eq!(button.y, card.bottom() - 2);
        assert!(card.contains(button.as_position()));
        assert_eq!(card.y + 1, layout.cards[0].y);
    }
}
