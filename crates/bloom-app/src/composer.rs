//! Screen composer
//!
//! Pure functions from navigation state and catalog data to a
//! [`VisualTree`]. Nothing here mutates state; the TUI calls [`compose`] on
//! every frame and draws whatever comes back.

use crate::focus::{LoginFocus, WelcomeFocus};
use crate::image::ImageCache;
use crate::rows::ItemRowState;
use crate::state::{AppState, LoginForm};
use bloom_core::{
    Action, BrandAsset, ButtonKind, FieldId, IconRef, ImageSlot, ItemRow, LazyColumn, LazyRow,
    NavItem, NavigationTab, Node, PlantItem, Screen, Span, TextRole, Theme, ThemeCard, VisualTree,
};

pub const SEARCH_PLACEHOLDER: &str = "Search";
pub const BROWSE_THEMES: &str = "Browse themes";
pub const DESIGN_GARDEN: &str = "Design your home garden";

pub const TAGLINE: &str = "Beautiful home garden solutions";
pub const CREATE_ACCOUNT: &str = "Create account";
pub const LOG_IN: &str = "Log in";

pub const LOGIN_HEADING: &str = "Log in with email";
pub const EMAIL_HINT: &str = "Email address";
pub const PASSWORD_HINT: &str = "Password (8+ characters)";
pub const TERMS_OF_USE: &str = "Terms of Use";
pub const PRIVACY_POLICY: &str = "Privacy Policy";

/// View-local overlays on top of the catalog data.
///
/// The default context draws every row from its item's default, no focus,
/// no cursor and every image pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewContext<'a> {
    pub rows: Option<&'a ItemRowState>,
    pub images: Option<&'a ImageCache>,
    pub search_query: &'a str,
    pub search_focused: bool,
    pub row_cursor: Option<usize>,
    pub theme_offset: usize,
    pub welcome_focus: Option<WelcomeFocus>,
    pub login_focus: Option<LoginFocus>,
    pub login_form: Option<&'a LoginForm>,
    pub notice: Option<&'a str>,
}

impl<'a> ViewContext<'a> {
    /// Context reflecting the live application state
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            rows: Some(&state.rows),
            images: Some(&state.images),
            search_query: &state.search.query,
            search_focused: state.search.editing,
            row_cursor: Some(state.row_cursor),
            theme_offset: state.theme_offset,
            welcome_focus: Some(state.welcome_focus),
            login_focus: Some(state.login_focus),
            login_form: Some(&state.login_form),
            notice: state.notice.as_ref().map(|n| n.text.as_str()),
        }
    }

    fn checked(&self, index: usize, item: &PlantItem) -> bool {
        self.rows
            .and_then(|rows| rows.is_checked(index))
            .unwrap_or(item.is_checked)
    }

    fn image(&self, url: &str) -> ImageSlot {
        let status = self.images.map(|c| c.status(url)).unwrap_or_default();
        ImageSlot::remote(url).with_status(status)
    }

    fn login_focused(&self, focus: LoginFocus) -> bool {
        self.login_focus == Some(focus)
    }
}

/// Build the tree for the current application state
pub fn compose(state: &AppState) -> VisualTree {
    render_with(
        state.screen(),
        state.current_tab(),
        &state.catalog.themes,
        &state.catalog.items,
        &ViewContext::from_state(state),
    )
}

/// Build the tree from plain inputs, with no view-local overlays
pub fn render(
    screen: Screen,
    tab: NavigationTab,
    themes: &[Theme],
    items: &[PlantItem],
) -> VisualTree {
    render_with(screen, tab, themes, items, &ViewContext::default())
}

pub fn render_with(
    screen: Screen,
    tab: NavigationTab,
    themes: &[Theme],
    items: &[PlantItem],
    ctx: &ViewContext<'_>,
) -> VisualTree {
    let mut children = match screen {
        Screen::Welcome => welcome(ctx),
        Screen::Login => login(ctx),
        Screen::Home => home(tab, themes, items, ctx),
    };

    if let Some(text) = ctx.notice {
        children.push(Node::Notice {
            text: text.to_string(),
        });
    }

    VisualTree::new(screen, children)
}

// ─────────────────────────────────────────────────────────────────────────────
// Welcome
// ─────────────────────────────────────────────────────────────────────────────

fn welcome(ctx: &ViewContext<'_>) -> Vec<Node> {
    vec![
        Node::Image(ImageSlot::bundled(BrandAsset::WelcomeBackground)),
        Node::Image(ImageSlot::bundled(BrandAsset::WelcomeIllustration)),
        Node::Image(ImageSlot::bundled(BrandAsset::Logo)),
        Node::text(TAGLINE, TextRole::Subtitle),
        Node::Button {
            label: CREATE_ACCOUNT.to_string(),
            kind: ButtonKind::Primary,
            action: Action::CreateAccount,
            focused: ctx.welcome_focus == Some(WelcomeFocus::CreateAccount),
        },
        Node::Button {
            label: LOG_IN.to_string(),
            kind: ButtonKind::Text,
            action: Action::Login,
            focused: ctx.welcome_focus == Some(WelcomeFocus::Login),
        },
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────────────────────────

fn login(ctx: &ViewContext<'_>) -> Vec<Node> {
    let value = |field| {
        ctx.login_form
            .map(|form| form.value(field).to_string())
            .unwrap_or_default()
    };

    vec![
        Node::text(LOGIN_HEADING, TextRole::Heading),
        Node::TextField {
            field: FieldId::Email,
            hint: EMAIL_HINT.to_string(),
            value: value(FieldId::Email),
            masked: false,
            focused: ctx.login_focused(LoginFocus::Email),
        },
        Node::TextField {
            field: FieldId::Password,
            hint: PASSWORD_HINT.to_string(),
            value: value(FieldId::Password),
            masked: true,
            focused: ctx.login_focused(LoginFocus::Password),
        },
        Node::Disclosure(vec![
            Span::Plain("By clicking below, you agree to our ".to_string()),
            Span::Link {
                text: TERMS_OF_USE.to_string(),
                action: Action::TermsOfUse,
                focused: ctx.login_focused(LoginFocus::TermsOfUse),
            },
            Span::Plain(" and consent to our ".to_string()),
            Span::Link {
                text: PRIVACY_POLICY.to_string(),
                action: Action::PrivacyPolicy,
                focused: ctx.login_focused(LoginFocus::PrivacyPolicy),
            },
            Span::Plain(".".to_string()),
        ]),
        Node::Button {
            label: LOG_IN.to_string(),
            kind: ButtonKind::Primary,
            action: Action::SubmitLogin,
            focused: ctx.login_focused(LoginFocus::Submit),
        },
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────────────────

fn home(
    tab: NavigationTab,
    themes: &[Theme],
    items: &[PlantItem],
    ctx: &ViewContext<'_>,
) -> Vec<Node> {
    let mut children = match tab {
        NavigationTab::Home => home_tab(themes, items, ctx),
        other => vec![Node::Placeholder {
            text: other.title().to_string(),
        }],
    };
    children.push(bottom_nav(tab));
    children
}

fn home_tab(themes: &[Theme], items: &[PlantItem], ctx: &ViewContext<'_>) -> Vec<Node> {
    let mut children = vec![
        Node::SearchField {
            placeholder: SEARCH_PLACEHOLDER.to_string(),
            query: ctx.search_query.to_string(),
            focused: ctx.search_focused,
        },
        Node::label(BROWSE_THEMES),
    ];

    if !themes.is_empty() {
        let cards = themes
            .iter()
            .map(|theme| ThemeCard {
                title: theme.title.clone(),
                image: ctx.image(&theme.image_url),
            })
            .collect();
        children.push(Node::ThemeStrip(
            LazyRow::new(cards).scrolled_to(ctx.theme_offset),
        ));
    }

    children.push(Node::SectionLabel {
        text: DESIGN_GARDEN.to_string(),
        icon: Some(IconRef::FilterList),
    });

    if !items.is_empty() {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemRow {
                title: item.title.clone(),
                description: item.description.clone(),
                image: ctx.image(&item.image_url),
                checked: ctx.checked(index, item),
                selected: ctx.row_cursor == Some(index) && !ctx.search_focused,
            })
            .collect();
        children.push(Node::ItemList(LazyColumn::new(rows)));
    }

    children
}

fn bottom_nav(selected: NavigationTab) -> Node {
    Node::BottomNav(
        NavigationTab::ALL
            .iter()
            .map(|&tab| NavItem {
                tab,
                title: tab.title(),
                icon: tab.icon(),
                selected: tab == selected,
            })
            .collect(),
    )
}
