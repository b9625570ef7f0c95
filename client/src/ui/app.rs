use common::games::tictactoe::GameSession;
use common::{log, log_warn};

use super::board_ui::BoardUi;
use super::{UiAction, menu};
use crate::config::{AppConfigManager, Config, GameType};

enum Screen {
    Start,
    SymbolSelect,
    Game(GameSession),
}

pub struct TicTacToeApp {
    screen: Screen,
    board_ui: BoardUi,
    config_manager: AppConfigManager,
    config: Config,
}

impl TicTacToeApp {
    pub fn new(config_manager: AppConfigManager, config: Config) -> Self {
        Self {
            screen: Screen::Start,
            board_ui: BoardUi::default(),
            config_manager,
            config,
        }
    }

    fn start_game(&mut self, game_type: GameType) {
        self.config.game.last_game = Some(game_type);
        self.save_config();

        let mode = game_type.to_mode(self.config.game.human_mark);
        self.screen = Screen::Game(GameSession::new(mode));
    }

    fn save_config(&self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log_warn!("Failed to save config: {}", e);
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::StartPlayerVsPlayer => self.start_game(GameType::PlayerVsPlayer),
            UiAction::ChooseComputerGame => self.screen = Screen::SymbolSelect,
            UiAction::ChooseSymbol(mark) => {
                self.config.game.human_mark = mark;
                self.start_game(GameType::PlayerVsComputer);
            }
            UiAction::PlayAgain => {
                if let Screen::Game(session) = &mut self.screen {
                    session.restart();
                }
            }
            UiAction::BackToMenu => {
                log!("Back to main menu");
                self.screen = Screen::Start;
            }
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = match &mut self.screen {
            Screen::Start => menu::render_start(ctx, self.config.game.last_game),
            Screen::SymbolSelect => menu::render_symbol_select(ctx, self.config.game.human_mark),
            Screen::Game(session) => {
                // The human's mark is drawn for one frame before the reply.
                if session.is_computer_turn() {
                    session.play_computer_turn();
                }
                self.board_ui.render(ctx, session)
            }
        };

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}
