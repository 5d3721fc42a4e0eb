//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Waiting** (request in flight): draws every ~80ms so the title-bar
//!   spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Background Requests
//!
//! Network calls run on tokio tasks and report back through an mpsc
//! channel of `Action`s, drained once per loop iteration. Each spawned
//! request carries the sequence number it was issued under; the reducer
//! drops resolutions that are no longer the most recent, so an overlapping
//! chat/reset pair settles last-write-wins instead of racing.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::api::{self, ChatBackend, HttpBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(config.base_url.clone()));
    let mut app = App::from_config(backend, &config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background request tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.dimmed = app.is_waiting;

        // The spinner animates while a request is in flight
        let animating = app.is_waiting;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
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
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                // Ctrl+R: the reset button. Allowed even while a chat is in
                // flight; the sequence guard settles the race.
                TuiEvent::Reset => {
                    if let Effect::SpawnReset { seq } = update(&mut app, Action::ResetRequested) {
                        spawn_reset(app.backend.clone(), seq, app.thread_id.clone(), tx.clone());
                    }
                }
                other => {
                    // Input is disabled for the duration of a round-trip
                    if app.is_waiting {
                        continue;
                    }
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&other) {
                        if let Effect::SpawnChat { seq, message } =
                            update(&mut app, Action::Submit(text))
                        {
                            spawn_chat(
                                app.backend.clone(),
                                seq,
                                message,
                                app.thread_id.clone(),
                                tx.clone(),
                            );
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (request resolutions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_chat(
    backend: Arc<dyn ChatBackend>,
    seq: u64,
    message: String,
    thread_id: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning chat request (seq {})", seq);
    tokio::spawn(async move {
        // Errors are already folded into the fallback reply here
        let outcome = api::send_chat(backend.as_ref(), &message, &thread_id).await;
        if tx
            .send(Action::ChatResolved {
                seq,
                reply: outcome.reply,
                actions: outcome.actions,
            })
            .is_err()
        {
            warn!("Failed to deliver chat result (seq {}): receiver dropped", seq);
        }
    });
}

fn spawn_reset(
    backend: Arc<dyn ChatBackend>,
    seq: u64,
    thread_id: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning reset request (seq {})", seq);
    tokio::spawn(async move {
        let ok = match backend.reset(&thread_id).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Reset request failed: {}", e);
                false
            }
        };
        if tx.send(Action::ResetResolved { seq, ok }).is_err() {
            warn!("Failed to deliver reset result (seq {}): receiver dropped", seq);
        }
    });
}
