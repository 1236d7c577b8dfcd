//! Section headings and tab placeholders

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use bloom_core::IconRef;

use crate::layout::centered_rect;
use crate::theme::{styles, Theme};

/// Bold heading drawn on the bottom row of its area, optional icon at the
/// right edge
pub struct SectionLabel<'a> {
    text: &'a str,
    icon: Option<IconRef>,
    theme: &'a Theme,
}

impl<'a> SectionLabel<'a> {
    pub fn new(text: &'a str, icon: Option<IconRef>, theme: &'a Theme) -> Self {
        Self { text, icon, theme }
    }
}

impl Widget for SectionLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }
        let p = &self.theme.palette;
        let row = Rect::new(area.x + 1, area.bottom() - 1, area.width - 2, 1);

        Paragraph::new(Span::styled(self.text, styles::section_label(p))).render(row, buf);

        if let Some(icon) = self.icon {
            Paragraph::new(Span::styled(self.theme.icons.icon(icon), styles::text(p)))
                .alignment(Alignment::Right)
                .render(row, buf);
        }
    }
}

/// Centered stub text for tabs without content
pub struct Placeholder<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> Placeholder<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for Placeholder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row = centered_rect(area.width, 1, area);
        Paragraph::new(Line::styled(
            self.text,
            styles::text_role(&self.theme.palette, bloom_core::TextRole::Heading),
        ))
        .alignment(Alignment::Center)
        .render(row, buf);
    }
}
