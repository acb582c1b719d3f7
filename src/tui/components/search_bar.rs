//! # SearchBar Component
//!
//! Single-line text field for the search term.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete)
//! - Move the cursor within the line (left/right/home/end)
//! - Report every edit upward with the full current text
//!
//! ## State Management
//!
//! The term is internal state and is updated synchronously on each keystroke.
//! The SearchBar never talks to the search backend and never debounces;
//! it emits `TermChanged` once per edit and the parent decides when a search
//! actually runs. `focused` is a prop from the TUI state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search videos...";

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq)]
pub enum SearchBarEvent {
    /// The text changed; carries the full new value.
    TermChanged(String),
    /// Enter pressed; carries the full current value.
    Submit(String),
}

pub struct SearchBar {
    /// Current text (Internal State)
    term: String,
    /// Cursor position as byte offset in `term` (0..=term.len())
    cursor: usize,
    /// Whether keyboard input is routed here (Prop)
    pub focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            term: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    /// Replace the text without emitting an event (used to show the start-up term).
    pub fn set_term(&mut self, term: &str) {
        self.term = term.to_string();
        self.cursor = self.term.len();
    }

    fn changed(&self) -> Option<SearchBarEvent> {
        Some(SearchBarEvent::TermChanged(self.term.clone()))
    }

    /// Returns the byte offset to start drawing from and the cursor column
    /// relative to it, so the cursor stays inside `width` columns.
    fn visible_window(&self, width: u16) -> (usize, u16) {
        let before = &self.term[..self.cursor];
        let width = width as usize;
        if width == 0 {
            return (self.cursor, 0);
        }
        let mut start = 0;
        let mut col = before.width();
        // Drop leading characters until the cursor fits (leaving room for it)
        for (i, c) in before.char_indices() {
            if col < width {
                break;
            }
            col -= unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            start = i + c.len_utf8();
        }
        (start, col as u16)
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ");

        let inner_width = area.width.saturating_sub(2);
        let (start, cursor_col) = self.visible_window(inner_width);

        let input = if self.term.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(&self.term[start..])
        };
        frame.render_widget(input.block(block), area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.term.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold line breaks into spaces
                let text = text.replace(['\r', '\n'], " ");
                if text.is_empty() {
                    return None;
                }
                self.term.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.term, self.cursor);
                self.term.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.term.len() {
                    return None;
                }
                let next = next_char_boundary(&self.term, self.cursor);
                self.term.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.term, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.term.len() {
                    self.cursor = next_char_boundary(&self.term, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.term.len();
                None
            }
            TuiEvent::Submit => Some(SearchBarEvent::Submit(self.term.clone())),
            _ => None,
        }
    }
}
