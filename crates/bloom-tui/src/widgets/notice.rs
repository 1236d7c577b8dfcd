//! Transient toast drawn over the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Theme};

/// Rows kept free below the toast (bottom navigation)
const BOTTOM_OFFSET: u16 = 4;

pub struct NoticeToast<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> NoticeToast<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }

    /// Where the toast lands inside `area`
    pub fn placement(&self, area: Rect) -> Rect {
        let width = (self.text.width() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        let bottom = area.bottom().saturating_sub(BOTTOM_OFFSET).max(area.y + height);
        Rect::new(
            area.x + (area.width - width) / 2,
            bottom - height,
            width,
            height,
        )
    }
}

impl Widget for NoticeToast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = self.placement(area);
        let p = &self.theme.palette;
        Clear.render(rect, buf);
        Paragraph::new(self.text)
            .style(styles::background(p))
            .alignment(Alignment::Center)
            .block(styles::rounded_block(p, true))
            .render(rect, buf);
    }
}
