//! # Application State
//!
//! Core business state for Parley. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn ChatBackend>   // remote NPC service
//! ├── hotbar: Hotbar                  // slot-indexed inventory
//! ├── player_line: Option<String>     // latest player message (optimistic)
//! ├── npc_line: Option<String>        // latest NPC reply
//! ├── status_message: String          // status bar text
//! ├── is_waiting: bool                // a chat round-trip is in flight
//! ├── request_seq: u64                // generation guard for in-flight calls
//! ├── last_changed_slot: Option<usize>// most recently mutated slot
//! ├── thread_id: String               // opaque session key for the service
//! └── npc_name: String                // dialogue panel label
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::ChatBackend;
use crate::core::config::{ConfigError, ResolvedConfig};
use crate::core::hotbar::Hotbar;

pub struct App {
    pub backend: Arc<dyn ChatBackend>,
    pub hotbar: Hotbar,
    pub player_line: Option<String>,
    pub npc_line: Option<String>,
    pub status_message: String,
    pub is_waiting: bool,
    /// Bumped for every request issued. Resolutions carrying an older value
    /// are stale and get dropped by the reducer.
    pub request_seq: u64,
    /// Slot touched by the latest applied action batch, for the highlight.
    pub last_changed_slot: Option<usize>,
    pub thread_id: String,
    pub npc_name: String,
}

impl App {
    pub fn from_config(
        backend: Arc<dyn ChatBackend>,
        config: &ResolvedConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            backend,
            hotbar: Hotbar::new(config.slot_count)?,
            player_line: None,
            npc_line: None,
            status_message: format!("Say hello to {}!", config.npc_name),
            is_waiting: false,
            request_seq: 0,
            last_changed_slot: None,
            thread_id: config.thread_id.clone(),
            npc_name: config.npc_name.clone(),
        })
    }
}
