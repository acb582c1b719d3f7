use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{SearchBar, TitleBar, VideoDetail, VideoList};
use crate::tui::{Focus, TuiState};

/// Screen regions, computed once per frame.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ title                                        │
/// │ ╭ Search ──────────────────────────────────╮ │
/// │ ╰──────────────────────────────────────────╯ │
/// │ ╭ Video ───────────────────╮╭ Results ─────╮ │
/// │ │ detail (2/3)             ││ list (1/3)   │ │
/// │ ╰──────────────────────────╯╰──────────────╯ │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub search: Rect,
    pub detail: Rect,
    pub list: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min, Ratio};
        let [title, search, body] = Layout::vertical([Length(1), Length(3), Min(0)]).areas(area);
        let [detail, list] = Layout::horizontal([Ratio(2, 3), Ratio(1, 3)]).areas(body);
        Self {
            title,
            search,
            detail,
            list,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let layout = AppLayout::new(frame.area());

    TitleBar::new(
        &app.status_message,
        app.order.label(),
        app.is_loading,
        app.last_error.as_deref(),
        spinner_frame,
    )
    .render(frame, layout.title);

    let search_bar: &mut SearchBar = &mut tui.search_bar;
    search_bar.focused = tui.focus == Focus::SearchBar;
    search_bar.render(frame, layout.search);

    VideoDetail::new(app.selected.as_ref()).render(frame, layout.detail);

    VideoList::new(
        &mut tui.video_list,
        &app.results,
        app.selected.as_ref(),
        tui.focus == Focus::Results,
    )
    .render(frame, layout.list);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{sample_results, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_layout_splits_body_two_to_one() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 30));
        assert_eq!(layout.title.height, 1);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.detail.y, 4);
        assert_eq!(layout.detail.width, 80);
        assert_eq!(layout.list.width, 40);
        assert_eq!(layout.list.x, 80);
    }

    #[test]
    fn test_empty_app_shows_loading_placeholders() {
        let app = test_app();
        let mut tui = TuiState::new(std::time::Duration::from_millis(700));
        let text = draw(&app, &mut tui);
        assert_eq!(text.matches("Loading...").count(), 2);
    }

    #[test]
    fn test_loaded_app_shows_detail_and_list() {
        let mut app = test_app();
        update(&mut app, Action::Search("minions".to_string()));
        update(
            &mut app,
            Action::SearchCompleted {
                request_id: 1,
                results: sample_results("minions", 5),
            },
        );
        let mut tui = TuiState::new(std::time::Duration::from_millis(700));
        let text = draw(&app, &mut tui);

        assert!(!text.contains("Loading..."));
        assert!(text.contains("https://www.youtube.com/embed/minions-0"));
        assert!(text.contains("minions video 4"));
        assert!(text.contains("Results (5)"));
    }
}
