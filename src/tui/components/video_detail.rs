//! # VideoDetail Component
//!
//! Shows the selected video: its embeddable player URL, title, channel,
//! publish date and description. Renders a loading placeholder while nothing
//! is selected.
//!
//! Stateless: the selected result is its only prop.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::search::SearchResult;
use crate::tui::component::Component;
use crate::tui::components::video_list::LOADING_TEXT;

pub struct VideoDetail<'a> {
    pub selected: Option<&'a SearchResult>,
}

impl<'a> VideoDetail<'a> {
    pub fn new(selected: Option<&'a SearchResult>) -> Self {
        Self { selected }
    }

    fn lines(video: &SearchResult) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("▶ ", Style::default().fg(Color::Red)),
                Span::styled(
                    video.embed_url(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                video.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let byline: Vec<String> = [
            video.channel_title.clone(),
            video
                .published_at
                .map(|t| t.format("%Y-%m-%d").to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !byline.is_empty() {
            lines.push(Line::from(Span::styled(
                byline.join(" · "),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
        lines.extend(video.description.lines().map(Line::from));
        lines
    }
}

impl Component for VideoDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Video ");

        let Some(video) = self.selected else {
            let loading = Paragraph::new(LOADING_TEXT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(loading, area);
            return;
        };

        let detail = Paragraph::new(Self::lines(video))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(detail, area);
    }
}
