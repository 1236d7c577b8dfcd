//! Full-screen rendering tests for `view`

use super::view;
use crate::test_utils::{test_app_state, TestTerminal};
use crate::theme::palette;
use bloom_app::config::{IconMode, ThemeMode};
use bloom_app::image::describe_url;
use bloom_app::{update, AppState, Catalog, InputKey, Message};
use bloom_core::{sample_themes, FieldId, NavigationTab, Screen};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

/// Run a message and its follow-ups, ignoring actions
fn send(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

#[test]
fn test_welcome_screen() {
    let state = test_app_state(Screen::Welcome);
    let term = draw(&state);

    assert!(term.buffer_contains("✿ bloom"));
    assert!(term.buffer_contains("Beautiful home garden solutions"));
    assert!(term.buffer_contains("Create account"));
    assert!(term.buffer_contains("Log in"));
    assert!(!term.buffer_contains("Search"));
}

#[test]
fn test_welcome_ascii_logo() {
    let mut state = test_app_state(Screen::Welcome);
    state.settings.ui.icons = IconMode::Ascii;
    let term = draw(&state);
    assert!(term.buffer_contains("* bloom"));
}

#[test]
fn test_login_screen_masks_password() {
    let mut state = test_app_state(Screen::Login);
    state.login_form.set(FieldId::Email, "fern@example.com".into());
    state.login_form.set(FieldId::Password, "hunter22".into());
    let term = draw(&state);

    assert!(term.buffer_contains("Log in with email"));
    assert!(term.buffer_contains("fern@example.com"));
    assert!(term.buffer_contains("••••••••"));
    assert!(!term.buffer_contains("hunter22"));
    assert!(term.buffer_contains("Terms of Use"));
    assert!(term.buffer_contains("Privacy Policy"));
}

#[test]
fn test_login_empty_fields_show_hints() {
    let state = test_app_state(Screen::Login);
    let term = draw(&state);
    assert!(term.buffer_contains("Email address"));
    assert!(term.buffer_contains("Password (8+ characters)"));
}

#[test]
fn test_home_screen_sections() {
    let state = test_app_state(Screen::Home);
    let term = draw(&state);

    assert!(term.buffer_contains("Search"));
    assert!(term.buffer_contains("Browse themes"));
    assert!(term.buffer_contains("Desert chic"));
    assert!(term.buffer_contains("Design your home garden"));
    assert!(term.buffer_contains("Monstera"));
    assert!(term.buffer_contains("Aglaonema"));

    // Bottom navigation on the last rows
    let nav = term.find_line("Favorites").unwrap_or(0);
    assert!(nav >= 21);
    assert!(term.line_contains(nav, "Home"));
    assert!(term.line_contains(nav, "Profile"));
    assert!(term.line_contains(nav, "Cart"));
}

#[test]
fn test_home_list_order_matches_catalog() {
    let state = test_app_state(Screen::Home);
    let term = draw(&state);

    let monstera = term.find_line("Monstera");
    let aglaonema = term.find_line("Aglaonema");
    let lily = term.find_line("Peace lily");
    assert!(monstera < aglaonema);
    assert!(aglaonema < lily);
}

#[test]
fn test_toggle_row_updates_checkbox() {
    let mut state = test_app_state(Screen::Home);
    let term = draw(&state);
    let line = term.find_line("Monstera").unwrap_or(0);
    assert!(term.line_contains(line, "☑"));

    send(&mut state, Message::Key(InputKey::Char(' ')));
    let term = draw(&state);
    assert!(term.line_contains(line, "☐"));
    assert!(!term.line_contains(line, "☑"));
}

#[test]
fn test_theme_strip_scrolls() {
    let mut state = test_app_state(Screen::Home);
    assert!(!draw(&state).buffer_contains("Statements"));

    send(&mut state, Message::Key(InputKey::Char('l')));
    let term = draw(&state);
    assert!(term.buffer_contains("Statements"));
    assert!(!term.buffer_contains("Desert chic"));
}

#[test]
fn test_loaded_image_label_shown() {
    let mut state = test_app_state(Screen::Home);
    let url = sample_themes()[0].image_url.clone();
    let info = describe_url(&url).expect("sample url parses");
    send(
        &mut state,
        Message::ImageLoaded {
            url,
            info: info.clone(),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains(&info.label));
}

#[test]
fn test_placeholder_tabs() {
    for (tab, text) in [
        (NavigationTab::Favorites, "Favorites"),
        (NavigationTab::Profile, "Profile"),
        (NavigationTab::Cart, "Cart"),
    ] {
        let mut state = test_app_state(Screen::Home);
        send(&mut state, Message::SelectTab(tab));
        let term = draw(&state);

        assert!(!term.buffer_contains("Browse themes"));
        assert!(!term.buffer_contains("Monstera"));
        // Once in the body, once in the bottom bar
        assert_eq!(term.content().matches(text).count(), 2);
    }
}

#[test]
fn test_notice_overlay() {
    let mut state = test_app_state(Screen::Login);
    state.show_notice("Terms of Use clicked.");
    let term = draw(&state);
    assert!(term.buffer_contains("Terms of Use clicked."));
}

#[test]
fn test_empty_catalog_hides_strip_and_list() {
    let mut settings = bloom_app::Settings::default();
    settings.behavior.start_screen = Screen::Home;
    let state = AppState::with_catalog(settings, Catalog::new(vec![], vec![]));
    let term = draw(&state);

    assert!(term.buffer_contains("Browse themes"));
    assert!(term.buffer_contains("Design your home garden"));
    assert!(!term.buffer_contains("Monstera"));
    assert!(!term.buffer_contains("Desert chic"));
}

#[test]
fn test_dark_theme_background() {
    let mut state = test_app_state(Screen::Home);
    send(&mut state, Message::SelectTab(NavigationTab::Favorites));

    let light = draw(&state);
    assert_eq!(light.buffer()[(0, 0)].bg, palette::LIGHT.background);

    state.settings.ui.theme = ThemeMode::Dark;
    let dark = draw(&state);
    assert_eq!(dark.buffer()[(0, 0)].bg, palette::DARK.background);
}

#[test]
fn test_compact_terminal_does_not_panic() {
    for screen in [Screen::Welcome, Screen::Login, Screen::Home] {
        let state = test_app_state(screen);
        let mut term = TestTerminal::compact();
        term.draw_with(|frame| view(frame, &state));
    }

    let state = test_app_state(Screen::Welcome);
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));
    assert!(term.buffer_contains("Create account"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let state = test_app_state(Screen::Home);
    let mut term = TestTerminal::with_size(5, 3);
    term.draw_with(|frame| view(frame, &state));
}
