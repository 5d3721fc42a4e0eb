//! # Core Application Logic
//!
//! This module contains Parley's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Hotbar (inventory)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │    TUI     │        │    API     │
//!              │  Adapter   │        │  Backend   │
//!              │ (ratatui)  │        │ (reqwest)  │
//!              └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`hotbar`]: The slot-indexed inventory model and action dispatcher
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod hotbar;
pub mod state;
