//! # VideoList Component
//!
//! Scrollable list of search results, one `VideoListItem` per entry.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `VideoListState` lives in `TuiState` (keyboard highlight, scroll offset,
//!   last rendered area for mouse hit testing)
//! - `VideoList` is created each frame with borrowed state and the result
//!   list as props
//!
//! The list never changes which video is selected. It emits
//! `VideoListEvent::Select` and the root applies it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, List, ListState, Paragraph};

use crate::search::SearchResult;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::video_list_item::{ITEM_HEIGHT, VideoListItem};
use crate::tui::event::TuiEvent;

pub const LOADING_TEXT: &str = "Loading...";

/// Events emitted by the video list.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoListEvent {
    Select(SearchResult),
}

/// Presentation state for the video list. Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct VideoListState {
    /// Highlight and scroll offset
    pub list_state: ListState,
    /// Keys (video ids) of the list last seen, used to detect a new result list
    keys: Vec<String>,
    /// Area the list was last rendered into
    last_area: Rect,
}

impl VideoListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Reconcile with the current result list. When the list changes, keep the
    /// highlight on the same key if it survived, otherwise move it to the top.
    pub fn sync(&mut self, results: &[SearchResult]) {
        let incoming = results.iter().map(|r| VideoListItem::new(r, false).key());
        let unchanged = self.keys.iter().map(String::as_str).eq(incoming.clone());
        if unchanged {
            return;
        }

        let highlighted_key = self
            .list_state
            .selected()
            .and_then(|i| self.keys.get(i))
            .cloned();
        self.keys = incoming.map(str::to_string).collect();

        let index = highlighted_key
            .and_then(|key| self.keys.iter().position(|k| *k == key))
            .or(if self.keys.is_empty() { None } else { Some(0) });
        self.list_state = ListState::default().with_selected(index);
    }

    fn move_highlight(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    /// Hit test: given a screen position, find which result index (if any) is there.
    pub fn hit_test(&self, col: u16, row: u16, len: usize) -> Option<usize> {
        let inner = self.last_area.inner(ratatui::layout::Margin {
            horizontal: 1,
            vertical: 1,
        });
        if col < inner.x
            || col >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }
        let index = self.list_state.offset() + ((row - inner.y) / ITEM_HEIGHT) as usize;
        (index < len).then_some(index)
    }
}

/// Transient render wrapper for the video list.
pub struct VideoList<'a> {
    state: &'a mut VideoListState,
    results: &'a [SearchResult],
    selected: Option<&'a SearchResult>,
    focused: bool,
}

impl<'a> VideoList<'a> {
    pub fn new(
        state: &'a mut VideoListState,
        results: &'a [SearchResult],
        selected: Option<&'a SearchResult>,
        focused: bool,
    ) -> Self {
        state.sync(results);
        Self {
            state,
            results,
            selected,
            focused,
        }
    }

    fn block(&self) -> Block<'static> {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Results ({}) ", self.results.len()))
    }

    fn item(&self, index: usize) -> Option<VideoListItem<'a>> {
        let results: &'a [SearchResult] = self.results;
        let selected = self.selected;
        results
            .get(index)
            .map(|r| VideoListItem::new(r, selected == Some(r)))
    }
}

impl Component for VideoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.last_area = area;
        let block = self.block();

        if self.results.is_empty() {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(loading, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2);
        let items: Vec<_> = (0..self.results.len())
            .filter_map(|i| self.item(i))
            .map(|item| item.to_list_item(inner_width))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl EventHandler for VideoList<'_> {
    type Event = VideoListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let len = self.results.len();
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.state.move_highlight(-1, len);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.state.move_highlight(1, len);
                None
            }
            TuiEvent::CursorHome => {
                self.state.move_highlight(-(len as isize), len);
                None
            }
            TuiEvent::CursorEnd => {
                self.state.move_highlight(len as isize, len);
                None
            }
            TuiEvent::Submit => self
                .state
                .highlighted()
                .and_then(|i| self.item(i))
                .map(|item| item.on_click()),
            TuiEvent::MouseClick(col, row) => {
                let index = self.state.hit_test(*col, *row, len)?;
                self.state.list_state.select(Some(index));
                self.item(index).map(|item| item.on_click())
            }
            _ => None,
        }
    }
}
