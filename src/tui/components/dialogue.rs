//! # Dialogue Panels
//!
//! One panel per speaker: the NPC on the left, the player on the right.
//! A panel without text renders nothing, so the boxes only appear once
//! the conversation starts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub struct DialoguePanel<'a> {
    /// Label on the panel border
    pub speaker: &'a str,
    /// Latest line for this speaker; None keeps the panel hidden
    pub text: Option<&'a str>,
    pub accent: Color,
}

impl Component for DialoguePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(text) = self.text else {
            return;
        };

        let style = Style::default().fg(self.accent);
        let border_style = style.add_modifier(Modifier::DIM);

        let paragraph = Paragraph::new(text.trim())
            .block(
                Block::bordered()
                    .title(self.speaker)
                    .border_style(border_style)
                    .title_style(style),
            )
            .style(style)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(panel: &mut DialoguePanel) -> String {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                panel.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_panel_shows_speaker_and_text() {
        let mut panel = DialoguePanel {
            speaker: "Scarlet",
            text: Some("Hello, traveler!"),
            accent: Color::Blue,
        };
        let text = rendered_text(&mut panel);
        assert!(text.contains("Scarlet"));
        assert!(text.contains("Hello, traveler!"));
    }

    #[test]
    fn test_panel_hidden_without_text() {
        let mut panel = DialoguePanel {
            speaker: "Scarlet",
            text: None,
            accent: Color::Blue,
        };
        let text = rendered_text(&mut panel);
        assert!(!text.contains("Scarlet"));
    }
}
