//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard and mouse events into core `Action` values, and
//! carries out the `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm, and the
//! only place where time and background tasks exist.
//!
//! ## Search-as-you-type
//!
//! Every edit in the `SearchBar` re-arms a `Debouncer`. The loop shortens its
//! poll timeout to the debouncer's remaining window, so the trailing search
//! fires on time even when no further input arrives. Enter bypasses the
//! window and searches immediately.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms (or until the debounce deadline), only
//!   redrawing on events, search responses, or terminal resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::Debouncer;
use crate::core::state::App;
use crate::search::{SearchError, SearchProvider, SearchRequest, YouTubeProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    SearchBar, SearchBarEvent, VideoList, VideoListEvent, VideoListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Upper bound on a single search request.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// Which component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the search term.
    SearchBar,
    /// Arrow keys move through results, Enter selects.
    Results,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::SearchBar => Focus::Results,
            Focus::Results => Focus::SearchBar,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_bar: SearchBar,
    pub video_list: VideoListState,
    pub focus: Focus,
    /// Collapses keystrokes into a single trailing search
    pub debouncer: Debouncer<String>,
}

impl TuiState {
    pub fn new(debounce_window: Duration) -> Self {
        Self {
            search_bar: SearchBar::new(),
            video_list: VideoListState::new(),
            focus: Focus::SearchBar, // User expects to type immediately
            debouncer: Debouncer::new(debounce_window),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the search provider from resolved config. The credential must be present.
pub fn build_provider(config: &ResolvedConfig) -> Result<Arc<dyn SearchProvider>, SearchError> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        SearchError::Config(
            "YouTube API key must be set (YOUTUBE_API_KEY env var or [youtube] api_key in ~/.vidsearch/config.toml)"
                .to_string(),
        )
    })?;
    Ok(Arc::new(YouTubeProvider::new(
        api_key,
        Some(config.base_url.clone()),
    )))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config).map_err(std::io::Error::other)?;
    let mut app = App::from_config(provider, &config);
    let mut tui = TuiState::new(config.debounce);
    tui.search_bar.set_term(&config.initial_term);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui, &config.initial_term));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    initial_term: &str,
) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight search (superseded by each new search)
    let mut active_search: Option<AbortHandle> = None;

    let mut dispatch = |app: &mut App, action: Action| -> bool {
        match update(app, action) {
            Effect::Quit => return true,
            Effect::SpawnSearch { request_id, term } => {
                if let Some(handle) = active_search.take() {
                    handle.abort();
                }
                active_search = Some(spawn_search(app, request_id, term, tx.clone()));
            }
            Effect::None => {}
        }
        false
    };

    // Start-up search
    if !initial_term.trim().is_empty() {
        dispatch(app, Action::Search(initial_term.to_string()));
    }

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, capped by a pending debounce
        let base_timeout = if app.is_loading { ANIMATION_TICK } else { IDLE_TICK };
        let timeout = tui
            .debouncer
            .time_remaining(Instant::now())
            .map_or(base_timeout, |remaining| remaining.min(base_timeout));
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(app, tui, &event, Instant::now()) {
                should_quit |= dispatch(app, action);
            }
        }

        if should_quit {
            break;
        }

        // Trailing edge of the debounce window
        if let Some(action) = settle_debounce(tui, Instant::now()) {
            dispatch(app, action);
            needs_redraw = true;
        }

        // Handle background task actions (search responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, action) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    if let Some(handle) = active_search.take() {
        handle.abort();
    }
    info!("Event loop exiting");
    Ok(())
}

/// Route one input event to the component that should see it. Returns the
/// core action it produced, if any. Typing only arms the debouncer; the
/// search itself comes out of [`settle_debounce`].
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Option<Action> {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::FocusNext | TuiEvent::Escape => {
            tui.focus = tui.focus.toggle();
            None
        }
        // Mouse always goes to the list, regardless of focus
        TuiEvent::MouseClick(..) | TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            let focused = tui.focus == Focus::Results;
            let selection = VideoList::new(&mut tui.video_list, &app.results, app.selected.as_ref(), focused)
                .handle_event(event)?;
            tui.focus = Focus::Results;
            let VideoListEvent::Select(result) = selection;
            Some(Action::SelectResult(result))
        }
        // Down from the search bar jumps into the results
        TuiEvent::CursorDown if tui.focus == Focus::SearchBar => {
            tui.focus = Focus::Results;
            None
        }
        // Typing in the list auto-switches to the search bar and forwards the event
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace
            if tui.focus == Focus::Results =>
        {
            tui.focus = Focus::SearchBar;
            search_bar_event(tui, event, now)
        }
        _ => match tui.focus {
            Focus::SearchBar => search_bar_event(tui, event, now),
            Focus::Results => {
                let selection =
                    VideoList::new(&mut tui.video_list, &app.results, app.selected.as_ref(), true)
                        .handle_event(event)?;
                let VideoListEvent::Select(result) = selection;
                Some(Action::SelectResult(result))
            }
        },
    }
}

/// Feed an event to the search bar and apply the debounce policy to what it emits.
fn search_bar_event(tui: &mut TuiState, event: &TuiEvent, now: Instant) -> Option<Action> {
    match tui.search_bar.handle_event(event)? {
        // A blank term never searches; it also drops a search still waiting to fire
        SearchBarEvent::TermChanged(term) if term.trim().is_empty() => {
            debug!("Search term cleared, dropping pending search");
            tui.debouncer.cancel();
            None
        }
        SearchBarEvent::TermChanged(term) => {
            tui.debouncer.call(term, now);
            None
        }
        SearchBarEvent::Submit(term) if term.trim().is_empty() => {
            tui.debouncer.cancel();
            None
        }
        // Enter skips the rest of the window
        SearchBarEvent::Submit(term) => {
            tui.debouncer.call(term, now);
            tui.debouncer.flush().map(Action::Search)
        }
    }
}

/// Emits the debounced search once the quiet window has passed.
fn settle_debounce(tui: &mut TuiState, now: Instant) -> Option<Action> {
    tui.debouncer.poll(now).map(Action::Search)
}

fn spawn_search(
    app: &App,
    request_id: u64,
    term: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning search #{}: {:?}", request_id, term);

    // Clone what we need for the async task
    let provider = app.provider.clone();
    let max_results = app.max_results;
    let order = app.order;

    let handle = tokio::spawn(async move {
        let request = SearchRequest {
            term: &term,
            max_results,
            order,
        };
        let outcome = match tokio::time::timeout(SEARCH_TIMEOUT, provider.search(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(SearchError::Network(format!(
                "search timed out after {}s",
                SEARCH_TIMEOUT.as_secs()
            ))),
        };

        let action = match outcome {
            Ok(results) => Action::SearchCompleted {
                request_id,
                results,
            },
            Err(e) => {
                warn!("Search #{} via {} failed: {}", request_id, provider.name(), e);
                Action::SearchFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send search #{} outcome: receiver dropped", request_id);
        }
    });
    handle.abort_handle()
}
