//! Main render/view function (View in TEA pattern)
//!
//! Composes the visual tree for the current state and walks it, drawing one
//! widget per node. All layout decisions live in [`crate::layout`].

#[cfg(test)]
mod tests;

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use bloom_app::{compose, AppState};
use bloom_core::{BrandAsset, ImageSource, Node, VisualTree};

use crate::layout;
use crate::theme::{styles, Theme};
use crate::widgets;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let tree = compose(state);
    let theme = Theme::from_settings(&state.settings);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(styles::background(&theme.palette)),
        area,
    );

    // Welcome background sits behind everything else
    let background = ImageSource::Bundled(BrandAsset::WelcomeBackground);
    let has_background = tree
        .nodes()
        .into_iter()
        .any(|n| matches!(n, Node::Image(slot) if slot.source == background));
    if has_background {
        let icons = state.settings.ui.icons;
        frame.render_widget(
            widgets::BrandImage::new(BrandAsset::WelcomeBackground, &theme, icons),
            area,
        );
    }

    let content = layout::content_area(tree.screen, area);
    render_column(frame, tree.children(), content, &theme, state);

    render_notice(frame, &tree, area, &theme);
}

/// Stack `nodes` vertically inside `area`
fn render_column(frame: &mut Frame, nodes: &[Node], area: Rect, theme: &Theme, state: &AppState) {
    let stacked: Vec<&Node> = nodes.iter().filter(|n| layout::is_stacked(n)).collect();
    let rects = layout::stack(area, &stacked);
    for (node, rect) in stacked.into_iter().zip(rects) {
        render_node(frame, node, rect, theme, state);
    }
}

fn render_node(frame: &mut Frame, node: &Node, area: Rect, theme: &Theme, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    match node {
        Node::Column(children) => render_column(frame, children, area, theme, state),
        Node::SearchField {
            placeholder,
            query,
            focused,
        } => frame.render_widget(
            widgets::SearchField::new(placeholder, query, theme).focused(*focused),
            area,
        ),
        Node::SectionLabel { text, icon } => {
            frame.render_widget(widgets::SectionLabel::new(text, *icon, theme), area)
        }
        Node::ThemeStrip(row) => frame.render_widget(widgets::ThemeStrip::new(row, theme), area),
        Node::ItemList(column) => frame.render_widget(widgets::ItemList::new(column, theme), area),
        Node::Placeholder { text } => {
            frame.render_widget(widgets::Placeholder::new(text, theme), area)
        }
        Node::Image(slot) => match &slot.source {
            ImageSource::Bundled(asset) => frame.render_widget(
                widgets::BrandImage::new(*asset, theme, state.settings.ui.icons),
                area,
            ),
            ImageSource::Remote(_) => frame.render_widget(
                Paragraph::new(theme.icons.image(&slot.status))
                    .style(styles::text_muted(&theme.palette)),
                area,
            ),
        },
        Node::Text { text, role } => {
            let style = styles::text_role(&theme.palette, *role);
            frame.render_widget(
                Paragraph::new(Line::styled(text.as_str(), style)).alignment(Alignment::Center),
                area,
            )
        }
        Node::Button {
            label,
            kind,
            focused,
            ..
        } => frame.render_widget(
            widgets::Button::new(label, *kind, theme).focused(*focused),
            area,
        ),
        Node::TextField {
            hint,
            value,
            masked,
            focused,
            ..
        } => frame.render_widget(
            widgets::TextField::new(hint, value, theme)
                .masked(*masked)
                .focused(*focused),
            area,
        ),
        Node::Disclosure(spans) => {
            frame.render_widget(widgets::Disclosure::new(spans, theme), area)
        }
        Node::BottomNav(items) => frame.render_widget(widgets::BottomNav::new(items, theme), area),
        // Drawn as an overlay after the stack
        Node::Notice { .. } => {}
    }
}

fn render_notice(frame: &mut Frame, tree: &VisualTree, area: Rect, theme: &Theme) {
    if let Some(text) = tree.notice() {
        frame.render_widget(widgets::NoticeToast::new(text, theme), area);
    }
}
