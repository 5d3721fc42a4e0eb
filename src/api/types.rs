//! # Wire Types
//!
//! Request/response shapes for the NPC demo service. These mirror the
//! server's JSON exactly; extra response fields are ignored so the client
//! stays compatible when the server grows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Icon key used when an item carries none. Matches the server's default
/// item asset.
pub const DEFAULT_ICON: &str = "card.jpg";

/// Body of `POST {base}/chat`.
#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub thread_id: String,
}

/// Response of `POST {base}/chat`. `actions` may be absent or empty.
#[derive(Deserialize, Debug, Clone)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default)]
    pub actions: Vec<GameAction>,
}

/// Body of `POST {base}/reset`. Success is signaled by a 2xx status;
/// the response body is ignored.
#[derive(Serialize, Debug, Clone)]
pub struct ResetRequest {
    pub thread_id: String,
}

/// A server-issued instruction to mutate hotbar state.
///
/// Slot indices arrive as raw integers; range checking is the hotbar's
/// concern, so negative or oversized values decode fine and become no-ops
/// downstream. Tags this client doesn't know decode to `Unknown` and are
/// skipped by the dispatcher.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    AddItem { item: Item, slot: i64 },
    RemoveItem { slot: i64 },
    #[serde(other)]
    Unknown,
}

/// An in-game item as the server describes it.
///
/// Only the display fields are typed; anything else the server attaches
/// (ids, rarity, whatever comes later) lands in `extra` untouched.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Item {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Item {
    /// Texture/icon key, falling back to the server's default asset.
    pub fn icon_key(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Short label for slot rendering: the item name, or the icon key when
    /// the server sent no name.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.icon_key())
    }
}
