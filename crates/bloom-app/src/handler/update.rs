//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, QUIT_HINT};
use bloom_core::{Action, Screen};
use tracing::{debug, info, warn};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            let msg = handle_key(state, key);
            if !matches!(msg, Some(Message::RequestQuit | Message::Quit)) {
                state.disarm_quit();
            }
            match msg {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Tick => {
            if let Some(notice) = state.notice.as_mut() {
                if notice.tick() {
                    state.notice = None;
                    state.quit_armed = false;
                }
            }
            UpdateResult::none()
        }

        Message::Init => {
            state.sync_screen();
            request_images(state)
        }

        Message::RequestQuit => {
            if state.request_quit() {
                state.show_notice(QUIT_HINT);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Activate(action) => handle_activate(state, action),

        Message::GoToLogin => {
            if state.navigation.go_to_login() {
                state.login_focus = Default::default();
            }
            UpdateResult::none()
        }

        Message::GoToHome => {
            if state.navigation.go_to_home() {
                state.search.editing = false;
                state.sync_screen();
                return request_images(state);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => {
            state.tabs.select(tab);
            state.search.editing = false;
            UpdateResult::none()
        }

        Message::NextTab => {
            state.tabs.select_next();
            state.search.editing = false;
            UpdateResult::none()
        }

        Message::PrevTab => {
            state.tabs.select_prev();
            state.search.editing = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Plant List Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleRow(index) => {
            state.rows.ensure_seeded(&state.catalog.items);
            match state.rows.toggle(index) {
                Some(checked) => debug!("Row {} toggled -> {}", index, checked),
                None => debug!("Ignoring toggle of missing row {}", index),
            }
            UpdateResult::none()
        }

        Message::SetRowChecked { index, checked } => {
            state.rows.ensure_seeded(&state.catalog.items);
            if !state.rows.set_checked(index, checked) {
                debug!("Ignoring set_checked of missing row {}", index);
            }
            UpdateResult::none()
        }

        Message::RowCursorUp => {
            state.row_cursor = state.row_cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::RowCursorDown => {
            state.row_cursor = state.row_cursor.saturating_add(1);
            state.clamp_row_cursor();
            UpdateResult::none()
        }

        Message::RefreshCatalog => {
            info!("Refreshing catalog");
            state.rows.reseed(&state.catalog.items);
            state.clamp_row_cursor();
            state.theme_offset = state
                .theme_offset
                .min(state.catalog.themes.len().saturating_sub(1));
            request_images(state)
        }

        // ─────────────────────────────────────────────────────────
        // Theme Strip Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollThemesLeft => {
            state.theme_offset = state.theme_offset.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollThemesRight => {
            let last = state.catalog.themes.len().saturating_sub(1);
            state.theme_offset = (state.theme_offset + 1).min(last);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusSearch => {
            state.search.editing = state.on_home_tab();
            UpdateResult::none()
        }

        Message::BlurSearch => {
            state.search.editing = false;
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.search.query = text;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus / Form Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            match state.screen() {
                Screen::Welcome => state.welcome_focus = state.welcome_focus.next(),
                Screen::Login => state.login_focus = state.login_focus.next(),
                Screen::Home => {}
            }
            UpdateResult::none()
        }

        Message::FocusPrev => {
            match state.screen() {
                Screen::Welcome => state.welcome_focus = state.welcome_focus.prev(),
                Screen::Login => state.login_focus = state.login_focus.prev(),
                Screen::Home => {}
            }
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.screen() {
            Screen::Welcome => {
                UpdateResult::message(Message::Activate(state.welcome_focus.action()))
            }
            Screen::Login => match state.login_focus.action() {
                Some(action) => UpdateResult::message(Message::Activate(action)),
                // On a text field, Enter moves to the next element
                None => UpdateResult::message(Message::FocusNext),
            },
            Screen::Home => UpdateResult::none(),
        },

        Message::FieldInput { field, text } => {
            state.login_form.set(field, text);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Image Messages
        // ─────────────────────────────────────────────────────────
        Message::ImageLoaded { url, info } => {
            debug!("Image ready: {} ({})", url, info.label);
            state.images.resolve(url, info);
            UpdateResult::none()
        }

        Message::ImageFailed { url, error } => {
            warn!("Image failed: {}: {}", url, error);
            state.images.fail(url);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Notice Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowNotice { text } => {
            state.show_notice(text);
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}

/// Wire a node callback to its host behavior
fn handle_activate(state: &mut AppState, action: Action) -> UpdateResult {
    debug!("Activate {:?} on {}", action, state.screen());
    match action {
        Action::CreateAccount | Action::Login => UpdateResult::message(Message::GoToLogin),
        Action::SubmitLogin => UpdateResult::message(Message::GoToHome),
        Action::TermsOfUse => UpdateResult::message(Message::ShowNotice {
            text: "Terms of Use clicked.".to_string(),
        }),
        Action::PrivacyPolicy => UpdateResult::message(Message::ShowNotice {
            text: "Privacy Policy clicked.".to_string(),
        }),
    }
}

/// Ask the event loop to load catalog images not requested yet
fn request_images(state: &mut AppState) -> UpdateResult {
    if state.screen() != Screen::Home || !state.settings.images.enabled {
        return UpdateResult::none();
    }

    let urls = state.images.request_missing(state.catalog.image_urls());
    if urls.is_empty() {
        return UpdateResult::none();
    }

    debug!("Requesting {} images", urls.len());
    UpdateResult::action(UpdateAction::LoadImages { urls })
}
