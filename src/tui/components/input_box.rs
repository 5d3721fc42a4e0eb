//! # InputBox Component
//!
//! Single-line message input, dimmed while a request is in flight.
//!
//! The buffer is internal state. The `dimmed` flag is a prop from the
//! application state: while the service is replying the loop stops routing
//! editing events here, and the dim rendering tells the player why.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Input disabled while waiting for the service (prop)
    pub dimmed: bool,
    /// Cursor byte position within `buffer`
    cursor: usize,
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos.saturating_sub(1);
    while p > 0 && !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = (pos + 1).min(s.len());
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor: 0,
        }
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, style) = if self.dimmed {
            ("Message (waiting...)", Style::default().fg(Color::DarkGray))
        } else {
            ("Message", Style::default().fg(Color::Green))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(title);

        let input = Paragraph::new(self.buffer.as_str()).block(block).style(style);
        frame.render_widget(input, area);

        if !self.dimmed {
            // Display-width cursor offset handles wide (CJK) characters
            let cursor_x = self.buffer[..self.cursor].width() as u16;
            frame.set_cursor_position((
                area.x + 1 + cursor_x.min(area.width.saturating_sub(3)),
                area.y + 1,
            ));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Pasted newlines would break the single-line layout
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
