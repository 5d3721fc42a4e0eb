//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, both behind the [`Component`](crate::tui::component::Component)
//! trait:
//!
//! - **Stateless (props-based)**: `TitleBar`, `DialoguePanel`, `HotbarStrip`
//!   receive all data as struct fields and render it. Dependencies stay
//!   explicit and the components stay trivially testable.
//! - **Stateful (event-driven)**: `InputBox` owns its text buffer and cursor
//!   and emits high-level `InputEvent`s via `EventHandler`.
//!
//! Each component file contains everything related to that component: state
//! types, event types, rendering logic, and tests.

pub mod dialogue;
pub mod hotbar_strip;
pub mod input_box;
pub mod title_bar;

pub use dialogue::DialoguePanel;
pub use hotbar_strip::HotbarStrip;
pub use input_box::{InputBox, InputEvent};
pub use title_bar::TitleBar;
