//! Top-level screen ownership (Welcome → Login → Home)

use bloom_core::Screen;
use tracing::{debug, info};

/// Owns the single active [`Screen`].
///
/// Transitions only go forward. Once `Home` is reached it stays there for the
/// rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationHost {
    screen: Screen,
}

impl NavigationHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start somewhere other than Welcome (CLI / config)
    pub fn starting_at(screen: Screen) -> Self {
        Self { screen }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Welcome → Login. Returns whether the screen changed.
    pub fn go_to_login(&mut self) -> bool {
        match self.screen {
            Screen::Welcome => self.transition(Screen::Login),
            Screen::Login => false,
            Screen::Home => {
                debug!("Ignoring go_to_login: Home is terminal");
                false
            }
        }
    }

    /// Login → Home. Returns whether the screen changed.
    ///
    /// Called from Welcome it still lands on Home; skipping Login is not
    /// guarded.
    pub fn go_to_home(&mut self) -> bool {
        if self.screen == Screen::Home {
            return false;
        }
        self.transition(Screen::Home)
    }

    fn transition(&mut self, to: Screen) -> bool {
        info!("Screen: {} -> {}", self.screen, to);
        self.screen = to;
        true
    }
}
