//! The fixed greeting list shown by the hero and the preview cards.

/// Opaque icon handle. Only the view knows how an icon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Waves,
    Heart,
    Sun,
    Moon,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Blue,
    Red,
    Yellow,
    Indigo,
    Green,
    Purple,
}

/// Card-only presentation for the entries that get a preview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewCard {
    pub description: &'static str,
    pub accent: ColorToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingEntry {
    pub text: &'static str,
    pub icon: Icon,
    pub color: ColorToken,
    pub card: Option<PreviewCard>,
}

/// Number of hoverable preview cards.
pub const CARD_COUNT: usize = 3;

pub static GREETINGS: [GreetingEntry; 6] = [
    GreetingEntry {
        text: "Hi",
        icon: Icon::Waves,
        color: ColorToken::Blue,
        card: Some(PreviewCard {
            description: "The classic greeting that started it all",
            accent: ColorToken::Blue,
        }),
    },
    GreetingEntry {
        text: "Hello",
        icon: Icon::Heart,
        color: ColorToken::Red,
        card: Some(PreviewCard {
            description: "A warm and friendly way to connect",
            accent: ColorToken::Red,
        }),
    },
    GreetingEntry {
        text: "Hey",
        icon: Icon::Sun,
        color: ColorToken::Yellow,
        card: Some(PreviewCard {
            description: "Casual and cool, perfect for friends",
            accent: ColorToken::Purple,
        }),
    },
    GreetingEntry {
        text: "Howdy",
        icon: Icon::Moon,
        color: ColorToken::Indigo,
        card: None,
    },
    GreetingEntry {
        text: "Hola",
        icon: Icon::Star,
        color: ColorToken::Green,
        card: None,
    },
    GreetingEntry {
        text: "Bonjour",
        icon: Icon::Heart,
        color: ColorToken::Purple,
        card: None,
    },
];

/// The entries that carry a preview card, with their position in the list.
pub fn preview_cards() -> impl Iterator<Item = (usize, &'static GreetingEntry, PreviewCard)> {
    GREETINGS
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| entry.card.map(|card| (i, entry, card)))
        .take(CARD_COUNT)
}
