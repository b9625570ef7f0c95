use common::games::tictactoe::Mark;
use egui::RichText;

use super::{UiAction, panel_frame};
use crate::colors;
use crate::config::GameType;

const TITLE_SIZE: f32 = 48.0;
const BUTTON_TEXT_SIZE: f32 = 26.0;
const BUTTON_SIZE: [f32; 2] = [280.0, 52.0];

fn menu_button(ui: &mut egui::Ui, text: &str, selected: bool) -> bool {
    let button = egui::Button::new(RichText::new(text).size(BUTTON_TEXT_SIZE).color(colors::TEXT))
        .fill(egui::Color32::from_black_alpha(150))
        .corner_radius(16.0)
        .selected(selected);
    ui.add_sized(BUTTON_SIZE, button).clicked()
}

fn render_menu(
    ctx: &egui::Context,
    title: &str,
    buttons: &[(&str, bool, UiAction)],
) -> Option<UiAction> {
    let mut action = None;

    egui::CentralPanel::default()
        .frame(panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.2);
                ui.label(RichText::new(title).size(TITLE_SIZE).color(colors::TEXT).strong());
                ui.add_space(40.0);

                for &(text, selected, button_action) in buttons {
                    if menu_button(ui, text, selected) {
                        action = Some(button_action);
                    }
                    ui.add_space(20.0);
                }
            });
        });

    action
}

fn start_buttons(last_game: Option<GameType>) -> [(&'static str, bool, UiAction); 2] {
    [
        (
            "Play PvP",
            last_game == Some(GameType::PlayerVsPlayer),
            UiAction::StartPlayerVsPlayer,
        ),
        (
            "Play vs Computer",
            last_game == Some(GameType::PlayerVsComputer),
            UiAction::ChooseComputerGame,
        ),
    ]
}

fn symbol_buttons(last_mark: Mark) -> [(&'static str, bool, UiAction); 3] {
    [
        ("Play as X", last_mark == Mark::X, UiAction::ChooseSymbol(Mark::X)),
        ("Play as O", last_mark == Mark::O, UiAction::ChooseSymbol(Mark::O)),
        ("Back", false, UiAction::BackToMenu),
    ]
}

/// Main menu. The mode played last is highlighted.
pub fn render_start(ctx: &egui::Context, last_game: Option<GameType>) -> Option<UiAction> {
    render_menu(ctx, "TIC TAC TOE", &start_buttons(last_game))
}

/// Symbol choice before a computer round. The last symbol used is highlighted.
pub fn render_symbol_select(ctx: &egui::Context, last_mark: Mark) -> Option<UiAction> {
    render_menu(ctx, "Choose Your Symbol", &symbol_buttons(last_mark))
}
