//! # Core Application Logic
//!
//! This module contains vidsearch's business logic.
//! It knows nothing about any specific UI technology or search backend.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Debouncer (timing)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Search   │
//!           │  Adapter   │              │  Provider  │
//!           │ (ratatui)  │              │ (YouTube)  │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`debounce`]: Timer-reset primitive for search-as-you-type
//! - [`config`]: Config file, env var and CLI resolution

pub mod action;
pub mod config;
pub mod debounce;
pub mod state;
