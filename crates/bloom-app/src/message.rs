//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use bloom_core::{Action, FieldId, ImageInfo, NavigationTab};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// First message after startup; seeds state and requests images
    Init,

    /// Request to quit (may need a second press if `confirm_quit` is on)
    RequestQuit,

    /// Quit without confirmation (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// An interactive node's callback fired
    Activate(Action),

    /// Welcome → Login
    GoToLogin,

    /// Login → Home
    GoToHome,

    // ─────────────────────────────────────────────────────────
    // Tab Messages
    // ─────────────────────────────────────────────────────────
    SelectTab(NavigationTab),
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Plant List Messages
    // ─────────────────────────────────────────────────────────
    /// Flip the checkbox of one row
    ToggleRow(usize),

    SetRowChecked {
        index: usize,
        checked: bool,
    },

    RowCursorUp,
    RowCursorDown,

    /// Rebuild rows from the catalog, discarding toggles
    RefreshCatalog,

    // ─────────────────────────────────────────────────────────
    // Theme Strip Messages
    // ─────────────────────────────────────────────────────────
    ScrollThemesLeft,
    ScrollThemesRight,

    // ─────────────────────────────────────────────────────────
    // Search Messages (visual only, nothing is filtered)
    // ─────────────────────────────────────────────────────────
    FocusSearch,
    BlurSearch,

    /// Replace the search query
    SearchInput {
        text: String,
    },

    // ─────────────────────────────────────────────────────────
    // Focus / Form Messages (Welcome, Login)
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    /// Activate whatever element currently has focus
    ActivateFocused,

    /// Replace a login field's text
    FieldInput {
        field: FieldId,
        text: String,
    },

    // ─────────────────────────────────────────────────────────
    // Image Messages
    // ─────────────────────────────────────────────────────────
    ImageLoaded {
        url: String,
        info: ImageInfo,
    },

    ImageFailed {
        url: String,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Notice Messages
    // ─────────────────────────────────────────────────────────
    /// Show a transient toast
    ShowNotice {
        text: String,
    },

    DismissNotice,
}
