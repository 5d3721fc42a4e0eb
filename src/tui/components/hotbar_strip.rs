//! # HotbarStrip Component
//!
//! Renders the hotbar model as a centered row of slot cells. Cell placement
//! comes from the model's slot origins; this component only translates the
//! row into the frame and clips slots that don't fit the terminal width.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::hotbar::{Hotbar, SLOT_GAP, SLOT_HEIGHT, SLOT_WIDTH};
use crate::tui::component::Component;

pub struct HotbarStrip<'a> {
    pub hotbar: &'a Hotbar,
    /// Most recently mutated slot, drawn with an accent border
    pub highlighted: Option<usize>,
}

/// Cuts `s` down to at most `max` display columns, char by char.
fn truncate_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

impl Component for HotbarStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let count = self.hotbar.len() as u16;
        let row_width = count * SLOT_WIDTH + count.saturating_sub(1) * SLOT_GAP;
        let x0 = area.x + area.width.saturating_sub(row_width) / 2;

        for slot in self.hotbar.slots() {
            let x = x0 + slot.origin.0;
            let y = area.y + slot.origin.1;
            if x + SLOT_WIDTH > area.x + area.width || y >= area.y + area.height {
                // Terminal too narrow; remaining slots are off-screen
                break;
            }
            let cell = Rect::new(x, y, SLOT_WIDTH, SLOT_HEIGHT.min(area.height - (y - area.y)));

            let border_style = if self.highlighted == Some(slot.index) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if slot.occupant.is_some() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = slot
                .occupant
                .as_ref()
                .map(|item| truncate_to_width(item.label(), (SLOT_WIDTH - 2) as usize))
                .unwrap_or_default();

            let paragraph = Paragraph::new(label)
                .block(Block::bordered().border_style(border_style))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, cell);
        }
    }
}
