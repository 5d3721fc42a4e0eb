//! # TitleBar Component
//!
//! Top status bar showing who you're talking to and what's happening.
//!
//! Stateless: all fields are props from the parent. The title text changes
//! based on state, most important information first:
//!
//! 1. **Waiting**: `"Parley (Scarlet) | ⠙ Waiting for reply..."`
//! 2. **Status message**: `"Parley (Scarlet) | Received Card (slot 1)"`
//! 3. **Default**: `"Parley (Scarlet)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠸', '⠴', '⠦', '⠇'];

pub struct TitleBar {
    /// NPC display name (from config)
    pub npc_name: String,
    /// Transient status (e.g. "Waiting for reply...")
    pub status_message: String,
    /// A request is in flight; show the spinner
    pub waiting: bool,
    /// Animation frame index, advanced by the event loop
    pub spinner_frame: usize,
}

impl TitleBar {
    fn title_text(&self) -> String {
        if self.waiting {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("Parley ({}) | {} {}", self.npc_name, spinner, self.status_message)
        } else if self.status_message.is_empty() {
            format!("Parley ({})", self.npc_name)
        } else {
            format!("Parley ({}) | {}", self.npc_name, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_default() {
        let bar = TitleBar {
            npc_name: "Scarlet".to_string(),
            status_message: String::new(),
            waiting: false,
            spinner_frame: 0,
        };
        assert_eq!(bar.title_text(), "Parley (Scarlet)");
    }

    #[test]
    fn test_title_with_status() {
        let bar = TitleBar {
            npc_name: "Scarlet".to_string(),
            status_message: "Session reset".to_string(),
            waiting: false,
            spinner_frame: 0,
        };
        assert_eq!(bar.title_text(), "Parley (Scarlet) | Session reset");
    }

    #[test]
    fn test_title_waiting_shows_spinner() {
        let bar = TitleBar {
            npc_name: "Scarlet".to_string(),
            status_message: "Waiting for reply...".to_string(),
            waiting: true,
            spinner_frame: 1,
        };
        assert_eq!(bar.title_text(), "Parley (Scarlet) | ⠙ Waiting for reply...");
    }
}
