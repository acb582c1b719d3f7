//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the status message (e.g., "Searching...", "5 results")
//! - Animate a spinner while a search is in flight
//! - Show the last search error, if any, in red
//! - Display the active result ordering
//!
//! ## Design Decisions
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state. The props come from different places (`status_message` and
//! `last_error` from the core App, `spinner_frame` from the TUI loop) but
//! the TitleBar doesn't care where they come from.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component.
pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub order_label: &'a str,
    pub is_loading: bool,
    pub last_error: Option<&'a str>,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        status_message: &'a str,
        order_label: &'a str,
        is_loading: bool,
        last_error: Option<&'a str>,
        spinner_frame: usize,
    ) -> Self {
        Self {
            status_message,
            order_label,
            is_loading,
            last_error,
            spinner_frame,
        }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(format!("vidsearch (order: {})", self.order_label))];

        if self.is_loading {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(frame, Style::default().fg(Color::Yellow)));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message));
        }
        if let Some(error) = self.last_error {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
