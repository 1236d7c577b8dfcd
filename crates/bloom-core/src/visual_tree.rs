//! # Visual Tree
//!
//! Front-end independent description of one frame of UI. The screen
//! composer in `bloom-app` builds a [`VisualTree`] from application state and
//! the TUI walks it to draw widgets. Nothing in here knows about terminals.
//!
//! ## Key Types
//!
//! - [`VisualTree`] - the root for one screen
//! - [`Node`] - a single visual element (label, field, button, lazy list...)
//! - [`LazyRow`] / [`LazyColumn`] - finite, restartable sequences of cards/rows
//! - [`ImageSlot`] - an image reference plus the loader's current status
//! - [`Action`] - the callback an interactive node raises when activated

use crate::types::{IconRef, NavigationTab, Screen};

// ============================================================================
// Actions
// ============================================================================

/// Callback slots exposed by interactive nodes.
///
/// The composer only attaches them; the host decides what they do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Welcome: "Create account"
    CreateAccount,
    /// Welcome: "Log in"
    Login,
    /// Login: "Log in" submit button
    SubmitLogin,
    /// Login: "Terms of Use" link
    TermsOfUse,
    /// Login: "Privacy Policy" link
    PrivacyPolicy,
}

// ============================================================================
// Images
// ============================================================================

/// Artwork bundled with the application (no loading required)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandAsset {
    WelcomeBackground,
    WelcomeIllustration,
    Logo,
}

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Bundled(BrandAsset),
    Remote(String),
}

/// Description of a successfully loaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Host the image was resolved from
    pub host: String,
    /// Short human-readable label (e.g. `pexels #2132227`)
    pub label: String,
}

/// Loader progress for one image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageStatus {
    /// Not requested yet or still in flight
    #[default]
    Pending,
    Ready(ImageInfo),
    /// Load failed; the slot keeps showing its placeholder
    Failed,
}

/// An image reference together with its load status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub source: ImageSource,
    pub status: ImageStatus,
}

impl ImageSlot {
    pub fn bundled(asset: BrandAsset) -> Self {
        Self {
            source: ImageSource::Bundled(asset),
            status: ImageStatus::Pending,
        }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            source: ImageSource::Remote(url.into()),
            status: ImageStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: ImageStatus) -> Self {
        self.status = status;
        self
    }

    /// URL to hand to the image loader, if any
    pub fn remote_url(&self) -> Option<&str> {
        match &self.source {
            ImageSource::Remote(url) => Some(url),
            ImageSource::Bundled(_) => None,
        }
    }
}

// ============================================================================
// Lazy sequences
// ============================================================================

/// One card in the horizontal theme strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCard {
    pub title: String,
    pub image: ImageSlot,
}

/// One row in the vertical plant list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub title: String,
    pub description: String,
    pub image: ImageSlot,
    pub checked: bool,
    /// Row under the keyboard cursor
    pub selected: bool,
}

/// Horizontally scrollable sequence of theme cards.
///
/// Cards keep input order. `offset` is the first card the front end should
/// draw; cards are only materialized into widgets when they fit on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LazyRow {
    cards: Vec<ThemeCard>,
    offset: usize,
}

impl LazyRow {
    pub fn new(cards: Vec<ThemeCard>) -> Self {
        Self { cards, offset: 0 }
    }

    /// Builder: first visible card (clamped to the last card)
    pub fn scrolled_to(mut self, offset: usize) -> Self {
        self.offset = offset.min(self.cards.len().saturating_sub(1));
        self
    }

    /// Restartable iterator over every card, in order
    pub fn iter(&self) -> std::slice::Iter<'_, ThemeCard> {
        self.cards.iter()
    }

    /// Cards from the scroll offset onwards
    pub fn visible(&self) -> impl Iterator<Item = &ThemeCard> {
        self.cards.iter().skip(self.offset)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Vertically scrollable list of plant rows, in input order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LazyColumn {
    rows: Vec<ItemRow>,
}

impl LazyColumn {
    pub fn new(rows: Vec<ItemRow>) -> Self {
        Self { rows }
    }

    /// Restartable iterator over every row, in order
    pub fn iter(&self) -> std::slice::Iter<'_, ItemRow> {
        self.rows.iter()
    }

    /// Index of the row under the cursor
    pub fn selected_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.selected)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Typography role for free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Heading,
    Subtitle,
    Body,
}

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Filled pill button
    Primary,
    /// Text-only button
    Text,
}

/// Which login form field a text field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Password,
}

/// A run of the legal disclosure paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Link {
        text: String,
        action: Action,
        focused: bool,
    },
}

/// One bottom-navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub tab: NavigationTab,
    pub title: &'static str,
    pub icon: IconRef,
    pub selected: bool,
}

/// A single visual element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Children stacked top to bottom
    Column(Vec<Node>),
    /// Search box; visual only, nothing is filtered
    SearchField {
        placeholder: String,
        query: String,
        focused: bool,
    },
    SectionLabel {
        text: String,
        icon: Option<IconRef>,
    },
    ThemeStrip(LazyRow),
    ItemList(LazyColumn),
    /// Stub content for an unimplemented tab
    Placeholder {
        text: String,
    },
    Image(ImageSlot),
    Text {
        text: String,
        role: TextRole,
    },
    Button {
        label: String,
        kind: ButtonKind,
        action: Action,
        focused: bool,
    },
    TextField {
        field: FieldId,
        hint: String,
        value: String,
        masked: bool,
        focused: bool,
    },
    Disclosure(Vec<Span>),
    BottomNav(Vec<NavItem>),
    /// Transient toast message
    Notice {
        text: String,
    },
}

impl Node {
    pub fn text(text: impl Into<String>, role: TextRole) -> Self {
        Node::Text {
            text: text.into(),
            role,
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Node::SectionLabel {
            text: text.into(),
            icon: None,
        }
    }

    /// Child nodes for containers, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Column(children) => children,
            _ => &[],
        }
    }
}

// ============================================================================
// VisualTree
// ============================================================================

/// The full visual description of one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualTree {
    pub screen: Screen,
    pub root: Node,
}

impl VisualTree {
    pub fn new(screen: Screen, children: Vec<Node>) -> Self {
        Self {
            screen,
            root: Node::Column(children),
        }
    }

    /// Every node in pre-order (root first)
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// Top-level children of the root column
    pub fn children(&self) -> &[Node] {
        self.root.children()
    }

    pub fn theme_strip(&self) -> Option<&LazyRow> {
        self.nodes().into_iter().find_map(|n| match n {
            Node::ThemeStrip(row) => Some(row),
            _ => None,
        })
    }

    pub fn item_list(&self) -> Option<&LazyColumn> {
        self.nodes().into_iter().find_map(|n| match n {
            Node::ItemList(col) => Some(col),
            _ => None,
        })
    }

    pub fn placeholder_text(&self) -> Option<&str> {
        self.nodes().into_iter().find_map(|n| match n {
            Node::Placeholder { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn notice(&self) -> Option<&str> {
        self.nodes().into_iter().find_map(|n| match n {
            Node::Notice { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// All actions reachable from this screen, in layout order
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for node in self.nodes() {
            match node {
                Node::Button { action, .. } => actions.push(*action),
                Node::Disclosure(spans) => {
                    actions.extend(spans.iter().filter_map(|s| match s {
                        Span::Link { action, .. } => Some(*action),
                        Span::Plain(_) => None,
                    }))
                }
                _ => {}
            }
        }
        actions
    }

    /// Remote image URLs referenced by this tree, in layout order, deduplicated
    pub fn remote_image_urls(&self) -> Vec<&str> {
        let mut urls = Vec::new();
        for node in self.nodes() {
            match node {
                Node::ThemeStrip(row) => row.iter().for_each(|c| push_url(&mut urls, &c.image)),
                Node::ItemList(col) => col.iter().for_each(|r| push_url(&mut urls, &r.image)),
                Node::Image(slot) => push_url(&mut urls, slot),
                _ => {}
            }
        }
        urls
    }
}

fn push_url<'a>(urls: &mut Vec<&'a str>, slot: &'a ImageSlot) {
    if let Some(url) = slot.remote_url() {
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> ThemeCard {
        ThemeCard {
            title: title.to_string(),
            image: ImageSlot::remote(format!("https://img/{title}")),
        }
    }

    #[test]
    fn test_lazy_row_iter_is_restartable() {
        let row = LazyRow::new(vec![card("a"), card("b")]);
        let first: Vec<_> = row.iter().map(|c| c.title.clone()).collect();
        let second: Vec<_> = row.iter().map(|c| c.title.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first, ["a", "b"]);
    }

    #[test]
    fn test_lazy_row_scroll_clamped() {
        let row = LazyRow::new(vec![card("a"), card("b")]).scrolled_to(10);
        assert_eq!(row.offset(), 1);
        assert_eq!(row.visible().count(), 1);

        let empty = LazyRow::new(vec![]).scrolled_to(3);
        assert_eq!(empty.offset(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_nodes_preorder() {
        let tree = VisualTree::new(
            Screen::Home,
            vec![
                Node::label("first"),
                Node::Column(vec![Node::label("nested")]),
                Node::label("last"),
            ],
        );
        let labels: Vec<_> = tree
            .nodes()
            .into_iter()
            .filter_map(|n| match n {
                Node::SectionLabel { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["first", "nested", "last"]);
    }

    #[test]
    fn test_actions_include_links() {
        let tree = VisualTree::new(
            Screen::Login,
            vec![
                Node::Disclosure(vec![
                    Span::Plain("By clicking ".into()),
                    Span::Link {
                        text: "Terms".into(),
                        action: Action::TermsOfUse,
                        focused: false,
                    },
                ]),
                Node::Button {
                    label: "Log in".into(),
                    kind: ButtonKind::Primary,
                    action: Action::SubmitLogin,
                    focused: false,
                },
            ],
        );
        assert_eq!(tree.actions(), [Action::TermsOfUse, Action::SubmitLogin]);
    }

    #[test]
    fn test_remote_image_urls_dedup_and_skip_bundled() {
        let tree = VisualTree::new(
            Screen::Home,
            vec![
                Node::Image(ImageSlot::bundled(BrandAsset::Logo)),
                Node::ThemeStrip(LazyRow::new(vec![card("a"), card("a"), card("b")])),
            ],
        );
        assert_eq!(tree.remote_image_urls(), ["https://img/a", "https://img/b"]);
    }
}
