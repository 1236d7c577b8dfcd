//! Search box shown at the top of the Home tab

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use bloom_core::IconRef;

use crate::theme::{styles, Theme};

/// Search input. Display only; nothing is filtered.
pub struct SearchField<'a> {
    placeholder: &'a str,
    query: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchField<'a> {
    pub fn new(placeholder: &'a str, query: &'a str, theme: &'a Theme) -> Self {
        Self {
            placeholder,
            query,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let block = styles::rounded_block(p, self.focused);

        let mut spans = vec![
            Span::styled(self.theme.icons.icon(IconRef::Search), styles::text(p)),
            Span::raw(" "),
        ];
        if self.query.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder, styles::text_muted(p)));
        } else {
            spans.push(Span::styled(self.query, styles::text(p)));
        }
        if self.focused {
            spans.push(Span::styled("_", styles::text_muted(p)));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
