//! Bundled welcome artwork, drawn as text

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use bloom_app::config::IconMode;
use bloom_core::BrandAsset;

use crate::theme::{styles, Theme};

const ILLUSTRATION: &[&str] = &[
    r"   \\  |  //   ",
    r"  \\\\ | ////  ",
    r"   \\\\|////   ",
    r"  ____\|/____  ",
    r"  \         /  ",
    r"   \_______/   ",
];

pub struct BrandImage<'a> {
    asset: BrandAsset,
    theme: &'a Theme,
    icon_mode: IconMode,
}

impl<'a> BrandImage<'a> {
    pub fn new(asset: BrandAsset, theme: &'a Theme, icon_mode: IconMode) -> Self {
        Self {
            asset,
            theme,
            icon_mode,
        }
    }
}

impl Widget for BrandImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.theme.palette;
        match self.asset {
            BrandAsset::WelcomeBackground => {
                Block::default().style(styles::bar(p)).render(area, buf);
            }
            BrandAsset::WelcomeIllustration => {
                // Bottom-align the art; skip it when there is no room
                if (area.height as usize) < ILLUSTRATION.len() {
                    return;
                }
                let top = area.bottom() - ILLUSTRATION.len() as u16;
                let rect = Rect::new(area.x, top, area.width, ILLUSTRATION.len() as u16);
                let lines: Vec<Line> = ILLUSTRATION
                    .iter()
                    .map(|l| Line::styled(*l, styles::text_muted(p)))
                    .collect();
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(rect, buf);
            }
            BrandAsset::Logo => {
                let mark = match self.icon_mode {
                    IconMode::Unicode => "✿ bloom",
                    IconMode::Ascii => "* bloom",
                };
                Paragraph::new(Line::styled(
                    mark,
                    styles::text(p).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .render(area, buf);
            }
        }
    }
}
