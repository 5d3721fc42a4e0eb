use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Color;

use crate::core::hotbar::SLOT_HEIGHT;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DialoguePanel, HotbarStrip, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(SLOT_HEIGHT), Length(3)]);
    let [title_area, dialogue_area, hotbar_area, input_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar {
        npc_name: app.npc_name.clone(),
        status_message: app.status_message.clone(),
        waiting: app.is_waiting,
        spinner_frame,
    };
    title_bar.render(frame, title_area);

    // NPC speaks on the left, the player on the right
    let [npc_area, player_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(dialogue_area);

    let mut npc_panel = DialoguePanel {
        speaker: &app.npc_name,
        text: app.npc_line.as_deref(),
        accent: Color::Blue,
    };
    npc_panel.render(frame, npc_area);

    let mut player_panel = DialoguePanel {
        speaker: "You",
        text: app.player_line.as_deref(),
        accent: Color::Green,
    };
    player_panel.render(frame, player_area);

    let mut hotbar_strip = HotbarStrip {
        hotbar: &app.hotbar,
        highlighted: app.last_changed_slot,
    };
    hotbar_strip.render(frame, hotbar_area);

    tui.input_box.render(frame, input_area);
}
