//! Application state (Model in TEA pattern)

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::focus::{LoginFocus, WelcomeFocus};
use crate::image::ImageCache;
use crate::navigation::NavigationHost;
use crate::rows::ItemRowState;
use crate::tabs::TabSelection;
use bloom_core::{FieldId, NavigationTab, Screen};

/// Notice shown while a quit confirmation is pending
pub const QUIT_HINT: &str = "Press q again to quit";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Text typed into the login form. Never validated or sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FieldId, text: String) {
        match field {
            FieldId::Email => self.email = text,
            FieldId::Password => self.password = text,
        }
    }
}

/// Search box contents on the Home tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Keys go to the query while set
    pub editing: bool,
}

/// Transient toast message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub ticks_left: u32,
}

impl Notice {
    pub fn new(text: impl Into<String>, ticks: u32) -> Self {
        Self {
            text: text.into(),
            ticks_left: ticks,
        }
    }

    /// Count down one tick; returns `true` once expired
    pub fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    pub navigation: NavigationHost,
    pub tabs: TabSelection,

    /// Read-only source data for the home screen
    pub catalog: Catalog,
    /// Per-row checkbox state, seeded on first entry to Home
    pub rows: ItemRowState,

    pub welcome_focus: WelcomeFocus,
    pub login_focus: LoginFocus,
    pub login_form: LoginForm,

    pub search: SearchState,
    /// Item-list row under the keyboard cursor
    pub row_cursor: usize,
    /// First visible card in the theme strip
    pub theme_offset: usize,

    pub images: ImageCache,
    pub notice: Option<Notice>,

    /// First `q` seen while `confirm_quit` is on
    pub quit_armed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings and the sample catalog
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_catalog(settings, Catalog::sample())
    }

    pub fn with_catalog(settings: Settings, catalog: Catalog) -> Self {
        let mut state = Self {
            phase: AppPhase::Running,
            navigation: NavigationHost::starting_at(settings.behavior.start_screen),
            settings,
            tabs: TabSelection::new(),
            catalog,
            rows: ItemRowState::new(),
            welcome_focus: WelcomeFocus::default(),
            login_focus: LoginFocus::default(),
            login_form: LoginForm::default(),
            search: SearchState::default(),
            row_cursor: 0,
            theme_offset: 0,
            images: ImageCache::new(),
            notice: None,
            quit_armed: false,
        };
        state.sync_screen();
        state
    }

    pub fn screen(&self) -> Screen {
        self.navigation.screen()
    }

    pub fn current_tab(&self) -> NavigationTab {
        self.tabs.current()
    }

    /// Whether the full home layout (search, strip, list) is on screen
    pub fn on_home_tab(&self) -> bool {
        self.screen() == Screen::Home && self.current_tab() == NavigationTab::Home
    }

    /// Seed per-screen state after a screen change
    pub fn sync_screen(&mut self) {
        if self.screen() == Screen::Home {
            self.rows.ensure_seeded(&self.catalog.items);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit Helpers
    // ─────────────────────────────────────────────────────────

    /// Quit, or arm the confirmation when `confirm_quit` is on.
    ///
    /// Returns `true` when armed rather than quitting.
    pub fn request_quit(&mut self) -> bool {
        if self.settings.behavior.confirm_quit && !self.quit_armed {
            self.quit_armed = true;
            return true;
        }
        self.phase = AppPhase::Quitting;
        false
    }

    /// Cancel a pending quit confirmation, taking its hint off screen
    pub fn disarm_quit(&mut self) {
        if !self.quit_armed {
            return;
        }
        self.quit_armed = false;
        if self.notice.as_ref().is_some_and(|n| n.text == QUIT_HINT) {
            self.notice = None;
        }
    }

    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Row Helpers
    // ─────────────────────────────────────────────────────────

    /// Keep the cursor on an existing row
    pub fn clamp_row_cursor(&mut self) {
        let len = self.catalog.items.len();
        self.row_cursor = self.row_cursor.min(len.saturating_sub(1));
    }

    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text, self.settings.behavior.notice_ticks));
    }
}
