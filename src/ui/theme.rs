use crate::app::greetings::ColorToken;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const SLATE_500: Color = Color::Rgb(100, 116, 139);
    pub const SLATE_600: Color = Color::Rgb(71, 85, 105);
    pub const SLATE_800: Color = Color::Rgb(30, 41, 59);
    pub const BLOB_BLUE: Color = Color::Rgb(219, 234, 254);
    pub const BLOB_PURPLE: Color = Color::Rgb(243, 232, 255);

    /// Greeting text color.
    pub fn color(token: ColorToken) -> Color {
        match token {
            ColorToken::Blue => Color::Rgb(59, 130, 246),
            ColorToken::Red => Color::Rgb(239, 68, 68),
            ColorToken::Yellow => Color::Rgb(234, 179, 8),
            ColorToken::Indigo => Color::Rgb(99, 102, 241),
            ColorToken::Green => Color::Rgb(34, 197, 94),
            ColorToken::Purple => Color::Rgb(168, 85, 247),
        }
    }

    /// Soft tint used behind a card's icon.
    pub fn tint(token: ColorToken) -> Color {
        match token {
            ColorToken::Blue => Color::Rgb(191, 219, 254),
            ColorToken::Red => Color::Rgb(254, 202, 202),
            ColorToken::Yellow => Color::Rgb(254, 240, 138),
            ColorToken::Indigo => Color::Rgb(199, 210, 254),
            ColorToken::Green => Color::Rgb(187, 247, 208),
            ColorToken::Purple => Color::Rgb(233, 213, 255),
        }
    }

    pub fn greeting(token: ColorToken) -> Style {
        Style::default()
            .fg(Self::color(token))
            .add_modifier(Modifier::BOLD)
    }

    pub fn intro() -> Style {
        Style::default().fg(Self::SLATE_600)
    }

    pub fn footer() -> Style {
        Style::default().fg(Self::SLATE_500)
    }

    pub fn card_title() -> Style {
        Style::default()
            .fg(Self::SLATE_800)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_text() -> Style {
        Style::default().fg(Self::SLATE_600)
    }

    pub fn card_border() -> Style {
        Style::default().fg(Self::SLATE_500)
    }

    pub fn card_border_hovered(accent: ColorToken) -> Style {
        Style::default()
            .fg(Self::color(accent))
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(token: ColorToken) -> Style {
        Style::default()
            .fg(Self::color(token))
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }
}
