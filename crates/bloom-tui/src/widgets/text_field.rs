//! Outlined single-line text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Theme};

pub struct TextField<'a> {
    hint: &'a str,
    value: &'a str,
    masked: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    pub fn new(hint: &'a str, value: &'a str, theme: &'a Theme) -> Self {
        Self {
            hint,
            value,
            masked: false,
            focused: false,
            theme,
        }
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn display_value(&self) -> String {
        if self.masked {
            std::iter::repeat(self.theme.icons.mask())
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.to_string()
        }
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let mut block = styles::rounded_block(p, self.focused);

        let line = if self.value.is_empty() {
            let mut spans = vec![Span::styled(self.hint, styles::text_muted(p))];
            if self.focused {
                spans.insert(0, Span::styled("_", styles::text(p)));
            }
            Line::from(spans)
        } else {
            // Hint moves into the border once there is a value
            block = block.title(Span::styled(format!(" {} ", self.hint), styles::text_muted(p)));

            let mut shown = self.display_value();
            let room = area.width.saturating_sub(3) as usize;
            // Keep the end of long input visible
            while shown.width() > room && !shown.is_empty() {
                shown.remove(0);
            }
            let mut spans = vec![Span::styled(shown, styles::text(p))];
            if self.focused {
                spans.push(Span::styled("_", styles::text(p)));
            }
            Line::from(spans)
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_empty_field_shows_hint() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(TextField::new("Email address", "", &theme), term.area());
        assert!(term.line_contains(1, "Email address"));
    }

    #[test]
    fn test_masked_value_hidden() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(
            TextField::new("Password (8+ characters)", "secret", &theme).masked(true),
            term.area(),
        );
        assert!(term.line_contains(1, "••••••"));
        assert!(!term.buffer_contains("secret"));
        assert!(term.line_contains(0, "Password (8+ characters)"));
    }

    #[test]
    fn test_long_value_keeps_tail_visible() {
        let theme = Theme::default();
        let mut term = TestTerminal::with_size(12, 3);
        term.render_widget(
            TextField::new("Email", "someone@example.com", &theme).focused(true),
            term.area(),
        );
        assert!(term.line_contains(1, "le.com_"));
    }
}
