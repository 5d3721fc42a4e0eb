//! # Actions
//!
//! Everything that can happen in Parley becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service replies? That's `Action::ChatResolved`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Each message round-trip walks `Idle -> Sending -> {Applied | Failed} ->
//! Idle`. There are no intermediate states and no cancellation of the
//! in-flight future; instead every spawned request captures the sequence
//! number it was issued under, and `update()` drops any resolution that is
//! not the most recent. That is what makes an overlapping chat/reset pair
//! resolve last-write-wins instead of racing.

use log::debug;

use crate::api::GameAction;
use crate::core::hotbar::HotbarEvent;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Player submitted a message from the input box.
    Submit(String),
    /// A chat round-trip finished (errors already folded into the reply).
    ChatResolved {
        seq: u64,
        reply: String,
        actions: Vec<GameAction>,
    },
    /// Player asked for a session reset.
    ResetRequested,
    /// The reset round-trip finished.
    ResetResolved { seq: u64, ok: bool },
    Quit,
}

/// I/O the caller must perform after `update()` returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnChat { seq: u64, message: String },
    SpawnReset { seq: u64 },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            let text = text.trim().to_string();
            if text.is_empty() || app.is_waiting {
                return Effect::None;
            }
            // Optimistic: the player's line is visible before the call resolves
            app.player_line = Some(text.clone());
            app.is_waiting = true;
            app.status_message = "Waiting for reply...".to_string();
            app.request_seq += 1;
            Effect::SpawnChat {
                seq: app.request_seq,
                message: text,
            }
        }
        Action::ChatResolved { seq, reply, actions } => {
            if seq != app.request_seq {
                debug!(
                    "dropping stale chat resolution (seq {}, current {})",
                    seq, app.request_seq
                );
                return Effect::None;
            }
            app.is_waiting = false;
            app.npc_line = Some(reply);
            apply_actions(app, &actions);
            Effect::None
        }
        Action::ResetRequested => {
            app.request_seq += 1;
            app.status_message = "Resetting...".to_string();
            Effect::SpawnReset {
                seq: app.request_seq,
            }
        }
        Action::ResetResolved { seq, ok } => {
            if seq != app.request_seq {
                debug!(
                    "dropping stale reset resolution (seq {}, current {})",
                    seq, app.request_seq
                );
                return Effect::None;
            }
            // Either way the chat this reset preempted will never apply,
            // so input must come back.
            app.is_waiting = false;
            if ok {
                app.player_line = None;
                app.npc_line = None;
                app.hotbar.reset_all();
                app.last_changed_slot = None;
                app.status_message = "Session reset".to_string();
            } else {
                // Server-side state is untouched locally; the session may
                // now disagree with the server until the next reset.
                app.status_message = "Reset failed".to_string();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Routes a reply's action batch into the hotbar and turns the resulting
/// events into status-line feedback.
fn apply_actions(app: &mut App, actions: &[GameAction]) {
    let events = app.hotbar.apply(actions);
    if events.is_empty() {
        app.status_message.clear();
        return;
    }
    for event in events {
        match event {
            HotbarEvent::Placed { slot } => {
                app.last_changed_slot = Some(slot);
                let label = app
                    .hotbar
                    .get(slot)
                    .and_then(|s| s.occupant.as_ref())
                    .map(|item| item.label().to_string())
                    .unwrap_or_default();
                app.status_message = format!("Received {} (slot {})", label, slot + 1);
            }
            HotbarEvent::Cleared { slot } => {
                app.last_changed_slot = Some(slot);
                app.status_message = format!("Lost the item in slot {}", slot + 1);
            }
        }
    }
}
