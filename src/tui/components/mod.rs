//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top status bar showing status, spinner and errors
//! - `VideoDetail`: The selected video, or a loading placeholder
//! - `VideoListItem`: One result row
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBar`: Text field that reports every edit upward
//! - `VideoList`: Result list that reports selections upward
//!
//! ## Data Flow
//!
//! Data flows down as props; intent flows up as returned events. No component
//! touches the core `App` directly:
//!
//! ```text
//!                  ┌──────────── App (core) ────────────┐
//!                  │ results            selected        │
//!                  └────┬──────────────────┬────────────┘
//!          props ▼      │                  │      ▼ props
//!            ┌──────────┴──────┐     ┌─────┴───────┐
//!            │    VideoList    │     │ VideoDetail │
//!            │ └─VideoListItem │     └─────────────┘
//!            └──────┬──────────┘
//!                   │ VideoListEvent::Select(entry)  ▲ up
//!  ┌───────────┐    │
//!  │ SearchBar │────┴──▶ tui::run ──▶ core::update(Action)
//!  └───────────┘ SearchBarEvent::TermChanged (debounced)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── search_bar.rs       (Search term input)
//! ├── video_list.rs       (Result list + its persistent state)
//! ├── video_list_item.rs  (Single result row)
//! └── video_detail.rs     (Selected video panel)
//! ```

pub mod search_bar;
pub mod title_bar;
pub mod video_detail;
pub mod video_list;
pub mod video_list_item;

pub use search_bar::{SearchBar, SearchBarEvent};
pub use title_bar::TitleBar;
pub use video_detail::VideoDetail;
pub use video_list::{VideoList, VideoListEvent, VideoListState};
pub use video_list_item::VideoListItem;
