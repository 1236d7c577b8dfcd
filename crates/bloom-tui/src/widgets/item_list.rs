//! Vertical list of checkable plant rows

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use bloom_core::{ImageStatus, ItemRow, LazyColumn};

use super::truncate;
use crate::theme::{styles, Theme};

pub struct ItemList<'a> {
    column: &'a LazyColumn,
    theme: &'a Theme,
}

impl<'a> ItemList<'a> {
    pub fn new(column: &'a LazyColumn, theme: &'a Theme) -> Self {
        Self { column, theme }
    }

    /// Two lines per row: title line and description line
    fn row_item(&self, row: &ItemRow, width: usize) -> ListItem<'static> {
        let p = &self.theme.palette;
        let icons = &self.theme.icons;

        let thumb = icons.image(&row.image.status);
        let checkbox = icons.checkbox(row.checked);

        // " ▓ Title ............ ☑ "
        let title_room = width.saturating_sub(thumb.width() + checkbox.width() + 4);
        let title = truncate(&row.title, title_room);
        let pad = width.saturating_sub(thumb.width() + title.width() + checkbox.width() + 3);

        let first = Line::from(vec![
            Span::raw(" "),
            Span::styled(thumb.to_string(), styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(title, styles::text(p).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(pad)),
            Span::styled(checkbox.to_string(), styles::checkbox(p, row.checked)),
            Span::raw(" "),
        ]);

        let detail = match &row.image.status {
            ImageStatus::Ready(info) => format!("{} · {}", row.description, info.label),
            _ => row.description.clone(),
        };
        let indent = " ".repeat(thumb.width() + 2);
        let second = Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                truncate(&detail, width.saturating_sub(indent.len() + 1)),
                styles::text_muted(p),
            ),
        ]);

        ListItem::new(vec![first, second])
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let items: Vec<ListItem> = self
            .column
            .iter()
            .map(|row| self.row_item(row, width))
            .collect();

        let list = List::new(items)
            .style(styles::background(&self.theme.palette))
            .highlight_style(styles::selected_row(&self.theme.palette));

        let mut state = ListState::default().with_selected(self.column.selected_index());
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use bloom_core::ImageSlot;

    fn column(rows: &[(&str, bool)], selected: Option<usize>) -> LazyColumn {
        LazyColumn::new(
            rows.iter()
                .enumerate()
                .map(|(i, (title, checked))| ItemRow {
                    title: title.to_string(),
                    description: "This is a description".into(),
                    image: ImageSlot::remote(format!("https://img/{title}")),
                    checked: *checked,
                    selected: selected == Some(i),
                })
                .collect(),
        )
    }

    #[test]
    fn test_rows_in_order_with_checkbox_state() {
        let theme = Theme::default();
        let col = column(&[("Monstera", true), ("Aglaonema", false)], None);
        let mut term = TestTerminal::with_size(40, 6);
        term.render_widget(ItemList::new(&col, &theme), term.area());

        assert!(term.line_contains(0, "Monstera"));
        assert!(term.line_contains(0, "☑"));
        assert!(term.line_contains(1, "This is a description"));
        assert!(term.line_contains(2, "Aglaonema"));
        assert!(term.line_contains(2, "☐"));
    }

    #[test]
    fn test_selected_row_scrolled_into_view() {
        let theme = Theme::default();
        let rows: Vec<(String, bool)> = (0..10).map(|i| (format!("Plant {i}"), false)).collect();
        let refs: Vec<(&str, bool)> = rows.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let col = column(&refs, Some(9));
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(ItemList::new(&col, &theme), term.area());

        assert!(term.buffer_contains("Plant 9"));
        assert!(!term.buffer_contains("Plant 0"));
    }

    #[test]
    fn test_narrow_list_truncates_titles() {
        let theme = Theme::default();
        let col = column(&[("Fiddle leaf tree", false)], None);
        let mut term = TestTerminal::with_size(14, 2);
        term.render_widget(ItemList::new(&col, &theme), term.area());
        assert!(term.line_contains(0, "…"));
        assert!(term.line_contains(0, "☐"));
    }
}
