//! Keyboard focus rings for the welcome and login screens

use bloom_core::{Action, FieldId};

/// Focusable elements on the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WelcomeFocus {
    #[default]
    CreateAccount,
    Login,
}

impl WelcomeFocus {
    pub fn next(self) -> Self {
        match self {
            WelcomeFocus::CreateAccount => WelcomeFocus::Login,
            WelcomeFocus::Login => WelcomeFocus::CreateAccount,
        }
    }

    pub fn prev(self) -> Self {
        // two elements: prev == next
        self.next()
    }

    pub fn action(self) -> Action {
        match self {
            WelcomeFocus::CreateAccount => Action::CreateAccount,
            WelcomeFocus::Login => Action::Login,
        }
    }
}

/// Focusable elements on the login screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    TermsOfUse,
    PrivacyPolicy,
    Submit,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 5] = [
        LoginFocus::Email,
        LoginFocus::Password,
        LoginFocus::TermsOfUse,
        LoginFocus::PrivacyPolicy,
        LoginFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Text field under focus, if any
    pub fn field(self) -> Option<FieldId> {
        match self {
            LoginFocus::Email => Some(FieldId::Email),
            LoginFocus::Password => Some(FieldId::Password),
            _ => None,
        }
    }

    /// Callback raised when the focused element is activated
    pub fn action(self) -> Option<Action> {
        match self {
            LoginFocus::TermsOfUse => Some(Action::TermsOfUse),
            LoginFocus::PrivacyPolicy => Some(Action::PrivacyPolicy),
            LoginFocus::Submit => Some(Action::SubmitLogin),
            LoginFocus::Email | LoginFocus::Password => None,
        }
    }

    pub fn is_action(self, action: Action) -> bool {
        self.action() == Some(action)
    }
}
