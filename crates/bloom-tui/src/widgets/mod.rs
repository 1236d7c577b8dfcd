//! Custom widget components, one per visual-tree node kind

mod bottom_nav;
mod brand;
mod button;
mod disclosure;
mod item_list;
mod notice;
mod search_field;
mod section_label;
mod text_field;
mod theme_strip;

pub use bottom_nav::BottomNav;
pub use brand::BrandImage;
pub use button::Button;
pub use disclosure::Disclosure;
pub use item_list::ItemList;
pub use notice::NoticeToast;
pub use search_field::SearchField;
pub use section_label::{Placeholder, SectionLabel};
pub use text_field::TextField;
pub use theme_strip::ThemeStrip;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to `max_width` display columns, ending in `…` when cut
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
