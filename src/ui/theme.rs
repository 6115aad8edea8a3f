use ratatui::style::Color;

/// Bubble fill saturation and lightness, as HSL fractions
pub const BUBBLE_SATURATION: f64 = 0.5;
pub const BUBBLE_LIGHTNESS: f64 = 0.5;

/// Viewer palette. Bubbles take their own hue from word length; everything
/// around them draws from here.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub canvas: Color,
    pub ink: Color,
    pub highlight: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dusk()
    }
}

impl Theme {
    pub fn dusk() -> Self {
        Self {
            canvas: Color::Rgb(26, 27, 38),     // #1A1B26
            ink: Color::Rgb(169, 177, 214),     // #A9B1D6
            highlight: Color::Rgb(247, 118, 142), // #F7768E
            muted: Color::Rgb(100, 110, 150),   // #646E96
        }
    }
}

pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn canvas() -> Color {
        Theme::default().canvas
    }
    pub fn ink() -> Color {
        Theme::default().ink
    }
    pub fn highlight() -> Color {
        Theme::default().highlight
    }
    pub fn muted() -> Color {
        Theme::default().muted
    }
}
