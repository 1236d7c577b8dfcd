//! Screen layout definitions for the TUI
//!
//! The visual tree is a single column; each node gets a fixed height except
//! the few that soak up leftover space (the plant list, placeholder text and
//! the welcome illustration).

use bloom_core::{BrandAsset, ImageSource, Node, Screen, TextRole};
use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the welcome and login forms get
pub const FORM_MAX_WIDTH: u16 = 56;

/// Height of one theme card including its border
pub const THEME_STRIP_HEIGHT: u16 = 6;

/// Whether a node takes part in the vertical stack at all
pub fn is_stacked(node: &Node) -> bool {
    !matches!(
        node,
        Node::Notice { .. }
            | Node::Image(bloom_core::ImageSlot {
                source: ImageSource::Bundled(BrandAsset::WelcomeBackground),
                ..
            })
    )
}

/// Vertical space requested by a node
pub fn node_constraint(node: &Node) -> Constraint {
    match node {
        Node::ItemList(_) | Node::Placeholder { .. } | Node::Column(_) => Constraint::Fill(1),
        Node::Image(slot) => match slot.source {
            ImageSource::Bundled(BrandAsset::WelcomeIllustration) => Constraint::Fill(1),
            ImageSource::Bundled(BrandAsset::Logo) => Constraint::Length(2),
            ImageSource::Bundled(BrandAsset::WelcomeBackground) => Constraint::Length(0),
            ImageSource::Remote(_) => Constraint::Length(1),
        },
        Node::SearchField { .. } => Constraint::Length(3),
        Node::SectionLabel { .. } => Constraint::Length(2),
        Node::ThemeStrip(_) => Constraint::Length(THEME_STRIP_HEIGHT),
        Node::Text { role, .. } => match role {
            TextRole::Heading => Constraint::Length(3),
            TextRole::Subtitle => Constraint::Length(2),
            TextRole::Body => Constraint::Length(1),
        },
        Node::Button { .. } => Constraint::Length(3),
        Node::TextField { .. } => Constraint::Length(3),
        Node::Disclosure(_) => Constraint::Length(3),
        Node::BottomNav(_) => Constraint::Length(3),
        Node::Notice { .. } => Constraint::Length(0),
    }
}

/// Split `area` into one rect per node, top to bottom.
///
/// When no node is flexible a trailing filler keeps the stack top-aligned.
pub fn stack(area: Rect, nodes: &[&Node]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = nodes.iter().map(|n| node_constraint(n)).collect();
    let flexible = constraints
        .iter()
        .any(|c| matches!(c, Constraint::Fill(_)));
    if !flexible {
        constraints.push(Constraint::Fill(1));
    }

    let chunks = Layout::vertical(constraints).split(area);
    chunks.iter().take(nodes.len()).copied().collect()
}

/// Area the screen's content is drawn into
pub fn content_area(screen: Screen, area: Rect) -> Rect {
    match screen {
        Screen::Home => area,
        Screen::Welcome | Screen::Login => {
            let width = area.width.min(FORM_MAX_WIDTH);
            let x = area.x + (area.width - width) / 2;
            Rect::new(x, area.y, width, area.height).inner(ratatui::layout::Margin {
                horizontal: 1,
                vertical: 1,
            })
        }
    }
}

/// A `width` x `height` rect centered in `area`, clipped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_core::{ImageSlot, LazyColumn, NavItem};

    #[test]
    fn test_list_fills_and_nav_pinned_to_bottom() {
        let search = Node::SearchField {
            placeholder: "Search".into(),
            query: String::new(),
            focused: false,
        };
        let list = Node::ItemList(LazyColumn::new(vec![]));
        let nav = Node::BottomNav(Vec::<NavItem>::new());
        let area = Rect::new(0, 0, 80, 24);

        let rects = stack(area, &[&search, &list, &nav]);

        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].height, 3);
        assert_eq!(rects[2].height, 3);
        assert_eq!(rects[2].y, 21);
        assert_eq!(rects[1].height, 18);
    }

    #[test]
    fn test_fixed_nodes_stay_top_aligned() {
        let heading = Node::text("Log in with email", TextRole::Heading);
        let body = Node::text("x", TextRole::Body);
        let rects = stack(Rect::new(0, 0, 40, 20), &[&heading, &body]);
        assert_eq!(rects[0].y, 0);
        assert_eq!(rects[1].y, 3);
        assert_eq!(rects[1].height, 1);
    }

    #[test]
    fn test_background_and_notice_not_stacked() {
        assert!(!is_stacked(&Node::Image(ImageSlot::bundled(
            BrandAsset::WelcomeBackground
        ))));
        assert!(!is_stacked(&Node::Notice { text: "hi".into() }));
        assert!(is_stacked(&Node::Image(ImageSlot::bundled(BrandAsset::Logo))));
    }

    #[test]
    fn test_content_area_centers_forms() {
        let area = Rect::new(0, 0, 100, 30);
        let form = content_area(Screen::Login, area);
        assert_eq!(form.width, FORM_MAX_WIDTH - 2);
        assert_eq!(form.x, 23);
        assert_eq!(content_area(Screen::Home, area), area);
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(20, 3, area);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.y, 0);
    }
}
