//! Core domain types for Bloom

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Catalog records
// ─────────────────────────────────────────────────────────────────────────────

/// A titled, image-backed category card shown in the home screen's
/// horizontal browse row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: String,
    pub image_url: String,
}

impl Theme {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }
}

/// A titled, described, image-backed, checkable row shown in the home
/// screen's vertical list.
///
/// `is_checked` is only the default for the row; the UI keeps its own
/// per-row copy and never writes back to this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub is_checked: bool,
}

impl PlantItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            is_checked: false,
        }
    }

    /// Builder: set the default checked state
    pub fn checked(mut self, is_checked: bool) -> Self {
        self.is_checked = is_checked;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Icon reference carried by navigation tabs and decorative nodes.
///
/// Front ends map these to whatever glyphs they can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    Home,
    FavoriteBorder,
    AccountCircle,
    ShoppingCart,
    Search,
    FilterList,
}

/// One of four mutually exclusive bottom-navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationTab {
    #[default]
    Home,
    Favorites,
    Profile,
    Cart,
}

impl NavigationTab {
    /// All tabs in display order
    pub const ALL: [NavigationTab; 4] = [
        NavigationTab::Home,
        NavigationTab::Favorites,
        NavigationTab::Profile,
        NavigationTab::Cart,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Favorites => "Favorites",
            NavigationTab::Profile => "Profile",
            NavigationTab::Cart => "Cart",
        }
    }

    pub fn icon(&self) -> IconRef {
        match self {
            NavigationTab::Home => IconRef::Home,
            NavigationTab::Favorites => IconRef::FavoriteBorder,
            NavigationTab::Profile => IconRef::AccountCircle,
            NavigationTab::Cart => IconRef::ShoppingCart,
        }
    }

    /// Position in [`NavigationTab::ALL`]
    pub fn index(&self) -> usize {
        match self {
            NavigationTab::Home => 0,
            NavigationTab::Favorites => 1,
            NavigationTab::Profile => 2,
            NavigationTab::Cart => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for NavigationTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Top-level mutually exclusive application views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Home,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Welcome => write!(f, "welcome"),
            Screen::Login => write!(f, "login"),
            Screen::Home => write!(f, "home"),
        }
    }
}

impl std::str::FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "welcome" => Ok(Screen::Welcome),
            "login" => Ok(Screen::Login),
            "home" => Ok(Screen::Home),
            other => Err(format!(
                "unknown screen '{other}' (expected welcome, login or home)"
            )),
        }
    }
}
