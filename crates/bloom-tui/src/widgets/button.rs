//! Filled and text buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use bloom_core::ButtonKind;

use crate::layout::centered_rect;
use crate::theme::{styles, Theme};

pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind, theme: &'a Theme) -> Self {
        Self {
            label,
            kind,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::button(&self.theme.palette, self.kind, self.focused);
        let label = if self.focused {
            format!("› {} ‹", self.label)
        } else {
            self.label.to_string()
        };

        match self.kind {
            ButtonKind::Primary => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(style);
                Paragraph::new(Line::from(label))
                    .alignment(Alignment::Center)
                    .block(block)
                    .render(area, buf);
            }
            ButtonKind::Text => {
                let row = centered_rect(area.width, 1, area);
                Paragraph::new(Line::styled(label, style))
                    .alignment(Alignment::Center)
                    .render(row, buf);
            }
        }
    }
}
