mod app;
mod board_ui;
mod menu;

pub use app::TicTacToeApp;

use common::games::tictactoe::Mark;

use crate::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    StartPlayerVsPlayer,
    ChooseComputerGame,
    ChooseSymbol(Mark),
    PlayAgain,
    BackToMenu,
}

fn panel_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(colors::BACKGROUND)
        .inner_margin(12.0)
}
