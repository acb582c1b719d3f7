//! # VideoListItem Component
//!
//! One entry of the result list: a thumbnail reference and the title.
//!
//! Stateless. It is rebuilt from props every frame and turned into a ratatui
//! `ListItem`; clicks are resolved by the parent `VideoList` (which owns the
//! geometry) and then delegated back here via [`VideoListItem::on_click`].

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::search::SearchResult;
use crate::tui::components::video_list::VideoListEvent;

/// Rows occupied by one item (title + thumbnail line).
pub const ITEM_HEIGHT: u16 = 2;

pub struct VideoListItem<'a> {
    pub result: &'a SearchResult,
    /// Whether this entry is the one shown in the detail panel
    pub is_selected: bool,
}

impl<'a> VideoListItem<'a> {
    pub fn new(result: &'a SearchResult, is_selected: bool) -> Self {
        Self {
            result,
            is_selected,
        }
    }

    /// Stable identity of this item across list refreshes.
    pub fn key(&self) -> &'a str {
        &self.result.id
    }

    /// The event this item emits when clicked.
    pub fn on_click(&self) -> VideoListEvent {
        VideoListEvent::Select(self.result.clone())
    }

    /// Build the list row, truncating text to `width` columns.
    pub fn to_list_item(&self, width: u16) -> ListItem<'a> {
        let marker = if self.is_selected { "▶ " } else { "  " };
        let text_width = (width as usize).saturating_sub(marker.width());

        let title_style = if self.is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let title = Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(truncate_to_width(&self.result.title, text_width), title_style),
        ]);
        let thumbnail = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&self.result.thumbnail_url, text_width),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        ListItem::new(vec![title, thumbnail])
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let available = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > available {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
