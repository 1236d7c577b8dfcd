//! Horizontal row of theme cards
//!
//! Only the cards that fit from the scroll offset onwards are drawn; the
//! rest stay data until scrolled into view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    widgets::{Block, Widget},
};

use bloom_core::{ImageStatus, LazyRow, ThemeCard};

use super::truncate;
use crate::theme::{styles, Theme};

/// Fixed card width including borders
pub const CARD_WIDTH: u16 = 18;
const CARD_GAP: u16 = 1;

pub struct ThemeStrip<'a> {
    row: &'a LazyRow,
    theme: &'a Theme,
}

impl<'a> ThemeStrip<'a> {
    pub fn new(row: &'a LazyRow, theme: &'a Theme) -> Self {
        Self { row, theme }
    }

    /// Number of cards that fit in `width` columns (one gutter column each side)
    pub fn capacity(width: u16) -> usize {
        let usable = width.saturating_sub(2) + CARD_GAP;
        (usable / (CARD_WIDTH + CARD_GAP)) as usize
    }

    fn render_card(&self, card: &ThemeCard, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::rounded_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let width = inner.width as usize;

        // Image rows
        let marker = self.theme.icons.image(&card.image.status);
        let fill = marker.repeat(width);
        let image_rows = inner.height.saturating_sub(2).max(1);
        for dy in 0..image_rows.min(inner.height) {
            buf.set_string(inner.x, inner.y + dy, &fill, styles::text_muted(p));
        }
        if let ImageStatus::Ready(info) = &card.image.status {
            let label = truncate(&info.label, width);
            buf.set_string(inner.x, inner.y, label, styles::text_muted(p));
        }

        // Title row
        if inner.height >= 2 {
            let title = truncate(&card.title, width);
            buf.set_string(
                inner.x,
                inner.y + image_rows,
                title,
                styles::text(p).add_modifier(Modifier::BOLD),
            );
        }
    }
}

impl Widget for ThemeStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(styles::background(&self.theme.palette))
            .render(area, buf);
        if area.width < CARD_WIDTH + 2 || area.height < 3 {
            return;
        }

        let capacity = Self::capacity(area.width);
        let mut x = area.x + 1;
        let mut drawn = 0;
        for card in self.row.visible().take(capacity) {
            self.render_card(card, Rect::new(x, area.y, CARD_WIDTH, area.height), buf);
            x += CARD_WIDTH + CARD_GAP;
            drawn += 1;
        }

        let mid = area.y + area.height / 2;
        let muted = styles::text_muted(&self.theme.palette);
        if self.row.offset() > 0 {
            buf.set_string(area.x, mid, self.theme.icons.scroll_left(), muted);
        }
        if self.row.offset() + drawn < self.row.len() {
            buf.set_string(area.right() - 1, mid, self.theme.icons.scroll_right(), muted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use bloom_core::{ImageInfo, ImageSlot};

    fn row(titles: &[&str]) -> LazyRow {
        LazyRow::new(
            titles
                .iter()
                .map(|t| ThemeCard {
                    title: t.to_string(),
                    image: ImageSlot::remote(format!("https://img/{t}")),
                })
                .collect(),
        )
    }

    #[test]
    fn test_capacity() {
        assert_eq!(ThemeStrip::capacity(80), 4);
        assert_eq!(ThemeStrip::capacity(20), 1);
        assert_eq!(ThemeStrip::capacity(10), 0);
    }

    #[test]
    fn test_renders_visible_cards_in_order() {
        let theme = Theme::default();
        let strip = row(&[
            "Desert chic",
            "Tiny terrariums",
            "Jungle vibes",
            "Easy care",
            "Statements",
        ]);
        let mut term = TestTerminal::with_size(80, 6);
        term.render_widget(ThemeStrip::new(&strip, &theme), term.area());

        let content = term.content();
        let desert = content.find("Desert chic").unwrap();
        let tiny = content.find("Tiny terrariums").unwrap();
        assert!(desert < tiny);
        assert!(term.buffer_contains("Easy care"));
        assert!(!term.buffer_contains("Statements"));
        assert!(term.buffer_contains("›"));
    }

    #[test]
    fn test_scrolled_strip_shows_later_cards() {
        let theme = Theme::default();
        let strip = row(&["a1", "b2", "c3", "d4", "e5"]).scrolled_to(4);
        let mut term = TestTerminal::with_size(80, 6);
        term.render_widget(ThemeStrip::new(&strip, &theme), term.area());
        assert!(term.buffer_contains("e5"));
        assert!(!term.buffer_contains("a1"));
        assert!(term.buffer_contains("‹"));
    }

    #[test]
    fn test_ready_image_shows_label() {
        let theme = Theme::default();
        let strip = LazyRow::new(vec![ThemeCard {
            title: "Desert chic".into(),
            image: ImageSlot::remote("u").with_status(ImageStatus::Ready(ImageInfo {
                host: "images.pexels.com".into(),
                label: "pexels #2132227".into(),
            })),
        }]);
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(ThemeStrip::new(&strip, &theme), term.area());
        assert!(term.buffer_contains("pexels #2132227"));
    }

    #[test]
    fn test_empty_strip_does_not_panic() {
        let theme = Theme::default();
        let strip = LazyRow::default();
        let mut term = TestTerminal::with_size(10, 2);
        term.render_widget(ThemeStrip::new(&strip, &theme), term.area());
    }
}
