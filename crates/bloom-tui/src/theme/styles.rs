//! Semantic style builders for the Bloom theme.

use bloom_core::{ButtonKind, TextRole};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Surfaces ---
pub fn background(p: &Palette) -> Style {
    Style::default().bg(p.background).fg(p.text)
}

pub fn bar(p: &Palette) -> Style {
    Style::default().bg(p.primary).fg(p.on_primary)
}

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn text_role(p: &Palette, role: TextRole) -> Style {
    match role {
        TextRole::Heading => text(p).add_modifier(Modifier::BOLD),
        TextRole::Subtitle => text(p).add_modifier(Modifier::ITALIC),
        TextRole::Body => text(p),
    }
}

pub fn section_label(p: &Palette) -> Style {
    text(p).add_modifier(Modifier::BOLD)
}

// --- Interactive styles ---
pub fn button(p: &Palette, kind: ButtonKind, focused: bool) -> Style {
    let base = match kind {
        ButtonKind::Primary => Style::default().bg(p.secondary).fg(p.on_secondary),
        ButtonKind::Text => Style::default().fg(p.text),
    };
    if focused {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base
    }
}

pub fn link(p: &Palette, focused: bool) -> Style {
    let base = text(p).add_modifier(Modifier::UNDERLINED);
    if focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

pub fn checkbox(p: &Palette, checked: bool) -> Style {
    if checked {
        Style::default().fg(p.secondary).add_modifier(Modifier::BOLD)
    } else {
        text_muted(p)
    }
}

/// Highlight for the row under the cursor
pub fn selected_row(p: &Palette) -> Style {
    Style::default().bg(p.primary).fg(p.on_primary)
}

pub fn nav_item(p: &Palette, selected: bool) -> Style {
    if selected {
        bar(p).add_modifier(Modifier::BOLD)
    } else {
        bar(p).fg(p.text_muted)
    }
}

// --- Block builders ---
pub fn rounded_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_focused
        } else {
            p.border
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_focused_button_is_emphasized() {
        let plain = button(&LIGHT, ButtonKind::Primary, false);
        let focused = button(&LIGHT, ButtonKind::Primary, true);
        assert!(focused.add_modifier.contains(Modifier::BOLD));
        assert!(!plain.add_modifier.contains(Modifier::BOLD));
        assert_eq!(plain.bg, Some(LIGHT.secondary));
    }

    #[test]
    fn test_checkbox_colors() {
        assert_eq!(checkbox(&LIGHT, true).fg, Some(LIGHT.secondary));
        assert_eq!(checkbox(&LIGHT, false).fg, Some(LIGHT.text_muted));
    }
}
