//! Color palettes for the Bloom theme.
//!
//! Light mode is pink on white, dark mode green on charcoal.

use bloom_app::config::ThemeMode;
use ratatui::style::Color;

const PINK_100: Color = Color::Rgb(255, 241, 241);
const PINK_900: Color = Color::Rgb(63, 44, 44);
const GREEN_300: Color = Color::Rgb(184, 201, 184);
const GREEN_900: Color = Color::Rgb(45, 59, 45);
const WHITE: Color = Color::Rgb(255, 255, 255);
const GRAY: Color = Color::Rgb(35, 35, 35);
const GRAY_MUTED: Color = Color::Rgb(120, 120, 120);
const GRAY_LIGHT: Color = Color::Rgb(190, 190, 190);

/// One complete set of colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Bars and welcome surface
    pub primary: Color,
    pub on_primary: Color,
    /// Filled buttons and checked boxes
    pub secondary: Color,
    pub on_secondary: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focused: Color,
}

pub const LIGHT: Palette = Palette {
    background: WHITE,
    primary: PINK_100,
    on_primary: GRAY,
    secondary: PINK_900,
    on_secondary: WHITE,
    text: GRAY,
    text_muted: GRAY_MUTED,
    border: GRAY_LIGHT,
    border_focused: PINK_900,
};

pub const DARK: Palette = Palette {
    background: GRAY,
    primary: GREEN_900,
    on_primary: WHITE,
    secondary: GREEN_300,
    on_secondary: GRAY,
    text: WHITE,
    text_muted: GRAY_LIGHT,
    border: GRAY_MUTED,
    border_focused: GREEN_300,
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), LIGHT);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }
}
