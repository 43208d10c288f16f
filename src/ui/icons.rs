use crate::app::greetings::Icon;

/// Single-cell glyph for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Waves => "≈",
        Icon::Heart => "♥",
        Icon::Sun => "☀",
        Icon::Moon => "☾",
        Icon::Star => "★",
    }
}
