//! Bottom navigation bar with the four tabs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use bloom_core::NavItem;

use crate::theme::{styles, Theme};

pub struct BottomNav<'a> {
    items: &'a [NavItem],
    theme: &'a Theme,
}

impl<'a> BottomNav<'a> {
    pub fn new(items: &'a [NavItem], theme: &'a Theme) -> Self {
        Self { items, theme }
    }
}

impl Widget for BottomNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        Block::default().style(styles::bar(p)).render(area, buf);
        if self.items.is_empty() || area.height == 0 {
            return;
        }

        let columns = Layout::horizontal(vec![Constraint::Fill(1); self.items.len()]).split(area);
        for (item, column) in self.items.iter().zip(columns.iter()) {
            let style = styles::nav_item(p, item.selected);
            let lines = vec![
                Line::styled(self.theme.icons.icon(item.icon), style),
                Line::styled(item.title, style),
            ];
            // Icon above title, vertically centered
            let top = column.y + column.height.saturating_sub(2) / 2;
            let rect = Rect::new(column.x, top, column.width, column.bottom() - top);
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(rect, buf);
        }
    }
}
