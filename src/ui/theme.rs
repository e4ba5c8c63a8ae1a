use tui::style::Color;

/// Presentation attributes as one immutable lookup, initialized at process
/// start. Palette follows the original stylesheet: blue accent stripe,
/// light-grey borders, dark body text on bright backgrounds.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent for selected rows and focused borders.
    pub accent: Color,
    /// Default border chrome.
    pub border: Color,
    /// Primary body text.
    pub text: Color,
    /// Secondary text: hints, placeholders, empty states.
    pub muted: Color,
    /// Stat grid values.
    pub value: Color,
}

pub static THEME: Theme = Theme {
    accent: Color::Blue,
    border: Color::DarkGray,
    text: Color::White,
    muted: Color::DarkGray,
    value: Color::Yellow,
};
