//! Bottom-navigation tab selection

use bloom_core::NavigationTab;
use tracing::debug;

/// Holds the single selected [`NavigationTab`].
///
/// Starts on `Home`; `select` replaces the value unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    current: NavigationTab,
}

impl TabSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> NavigationTab {
        self.current
    }

    pub fn select(&mut self, tab: NavigationTab) {
        if self.current != tab {
            debug!("Tab selected: {} -> {}", self.current, tab);
        }
        self.current = tab;
    }

    pub fn select_next(&mut self) {
        self.select(self.current.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.current.prev());
    }
}
