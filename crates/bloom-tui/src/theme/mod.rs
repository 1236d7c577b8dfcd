//! Theme system for the Bloom TUI.
//!
//! This module provides:
//! - `palette` - light and dark color sets
//! - `styles` - semantic style builder functions
//! - `icons` - glyphs for `IconRef` with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

use bloom_app::config::Settings;

use icons::IconSet;
use palette::Palette;

/// Everything a widget needs to pick colors and glyphs
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    pub icons: IconSet,
}

impl Theme {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            palette: Palette::for_mode(settings.ui.theme),
            icons: IconSet::new(settings.ui.icons),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
