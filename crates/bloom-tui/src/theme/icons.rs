//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - single-width symbols
//! - `IconMode::Ascii` - plain characters for limited terminals

use bloom_app::config::IconMode;
use bloom_core::{IconRef, ImageStatus};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn icon(&self, icon: IconRef) -> &'static str {
        match (self.mode, icon) {
            (IconMode::Unicode, IconRef::Home) => "⌂",
            (IconMode::Unicode, IconRef::FavoriteBorder) => "♡",
            (IconMode::Unicode, IconRef::AccountCircle) => "◉",
            (IconMode::Unicode, IconRef::ShoppingCart) => "⊔",
            (IconMode::Unicode, IconRef::Search) => "⌕",
            (IconMode::Unicode, IconRef::FilterList) => "≡",
            (IconMode::Ascii, IconRef::Home) => "H",
            (IconMode::Ascii, IconRef::FavoriteBorder) => "<3",
            (IconMode::Ascii, IconRef::AccountCircle) => "@",
            (IconMode::Ascii, IconRef::ShoppingCart) => "$",
            (IconMode::Ascii, IconRef::Search) => "/",
            (IconMode::Ascii, IconRef::FilterList) => "=",
        }
    }

    pub fn checkbox(&self, checked: bool) -> &'static str {
        match (self.mode, checked) {
            (IconMode::Unicode, true) => "☑",
            (IconMode::Unicode, false) => "☐",
            (IconMode::Ascii, true) => "[x]",
            (IconMode::Ascii, false) => "[ ]",
        }
    }

    /// Marker drawn in an image slot for its load status
    pub fn image(&self, status: &ImageStatus) -> &'static str {
        match (self.mode, status) {
            (IconMode::Unicode, ImageStatus::Pending) => "░",
            (IconMode::Unicode, ImageStatus::Ready(_)) => "▓",
            (IconMode::Unicode, ImageStatus::Failed) => "✕",
            (IconMode::Ascii, ImageStatus::Pending) => ".",
            (IconMode::Ascii, ImageStatus::Ready(_)) => "#",
            (IconMode::Ascii, ImageStatus::Failed) => "x",
        }
    }

    pub fn scroll_left(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "‹",
            IconMode::Ascii => "<",
        }
    }

    pub fn scroll_right(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "›",
            IconMode::Ascii => ">",
        }
    }

    /// Password mask character
    pub fn mask(&self) -> char {
        match self.mode {
            IconMode::Unicode => '•',
            IconMode::Ascii => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for icon in [
            IconRef::Home,
            IconRef::FavoriteBorder,
            IconRef::AccountCircle,
            IconRef::ShoppingCart,
            IconRef::Search,
            IconRef::FilterList,
        ] {
            assert!(icons.icon(icon).is_ascii());
        }
        assert_eq!(icons.checkbox(true), "[x]");
        assert_eq!(icons.mask(), '*');
    }

    #[test]
    fn test_unicode_checkbox() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_ne!(icons.checkbox(true), icons.checkbox(false));
        assert_eq!(icons.image(&ImageStatus::Failed), "✕");
    }
}
