//! Legal disclosure paragraph with inline links

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span as TextSpan},
    widgets::{Paragraph, Widget, Wrap},
};

use bloom_core::Span;

use crate::theme::{styles, Theme};

pub struct Disclosure<'a> {
    spans: &'a [Span],
    theme: &'a Theme,
}

impl<'a> Disclosure<'a> {
    pub fn new(spans: &'a [Span], theme: &'a Theme) -> Self {
        Self { spans, theme }
    }
}

impl Widget for Disclosure<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        let spans: Vec<TextSpan> = self
            .spans
            .iter()
            .map(|span| match span {
                Span::Plain(text) => TextSpan::styled(text.as_str(), styles::text_muted(p)),
                Span::Link { text, focused, .. } => {
                    TextSpan::styled(text.as_str(), styles::link(p, *focused))
                }
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
