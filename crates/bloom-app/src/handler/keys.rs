//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use bloom_core::{Action, NavigationTab, Screen};

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere, even inside a text field
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen() {
        Screen::Welcome => handle_key_welcome(key),
        Screen::Login => handle_key_login(state, key),
        Screen::Home if state.search.editing => handle_key_search_input(state, key),
        Screen::Home => handle_key_home(state, key),
    }
}

/// Handle key events on the welcome screen
fn handle_key_welcome(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('c') => Some(Message::Activate(Action::CreateAccount)),
        InputKey::Char('l') => Some(Message::Activate(Action::Login)),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),
        InputKey::Tab | InputKey::Down | InputKey::Right => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Left => Some(Message::FocusPrev),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Handle key events on the login screen
fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrev),
        InputKey::Enter => return Some(Message::ActivateFocused),
        InputKey::Esc => return Some(Message::RequestQuit),
        _ => {}
    }

    match state.login_focus.field() {
        // Typing goes to the focused field
        Some(field) => {
            let mut text = state.login_form.value(field).to_string();
            match key {
                InputKey::Backspace => {
                    text.pop()?;
                }
                InputKey::CharCtrl('u') => text.clear(),
                other => text.push(other.typed_char()?),
            }
            Some(Message::FieldInput { field, text })
        }
        None => match key {
            InputKey::Char(' ') => Some(Message::ActivateFocused),
            InputKey::Char('q') => Some(Message::RequestQuit),
            _ => None,
        },
    }
}

/// Handle key events while the search field has focus
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    let mut query = state.search.query.clone();
    match key {
        InputKey::Esc | InputKey::Enter => return Some(Message::BlurSearch),
        InputKey::Backspace => {
            query.pop()?;
        }
        InputKey::CharCtrl('u') => query.clear(),
        other => query.push(other.typed_char()?),
    }
    Some(Message::SearchInput { text: query })
}

/// Handle key events on the home screen
fn handle_key_home(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c @ '1'..='4') => {
            let index = c.to_digit(10)? as usize - 1;
            return NavigationTab::from_index(index).map(Message::SelectTab);
        }
        InputKey::Right | InputKey::Tab => return Some(Message::NextTab),
        InputKey::Left | InputKey::BackTab => return Some(Message::PrevTab),
        InputKey::Char('q') | InputKey::Esc => return Some(Message::RequestQuit),
        _ => {}
    }

    if state.current_tab() != NavigationTab::Home {
        return None;
    }

    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::RowCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::RowCursorDown),
        InputKey::Char(' ') | InputKey::Enter if !state.catalog.items.is_empty() => {
            Some(Message::ToggleRow(state.row_cursor))
        }
        InputKey::Char('h') => Some(Message::ScrollThemesLeft),
        InputKey::Char('l') => Some(Message::ScrollThemesRight),
        InputKey::Char('/') => Some(Message::FocusSearch),
        InputKey::Char('r') => Some(Message::RefreshCatalog),
        _ => None,
    }
}
