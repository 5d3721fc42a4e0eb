pub mod client;
pub mod types;

pub use client::{ApiError, ChatBackend, ChatOutcome, HttpBackend, FALLBACK_REPLY, send_chat};
pub use types::{ChatRequest, ChatResponse, GameAction, Item, ResetRequest};
