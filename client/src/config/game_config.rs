use common::config::Validate;
use common::games::tictactoe::{GameMode, Mark};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl GameType {
    pub fn to_mode(self, human_mark: Mark) -> GameMode {
        match self {
            GameType::PlayerVsPlayer => GameMode::PlayerVsPlayer,
            GameType::PlayerVsComputer => GameMode::PlayerVsComputer { human: human_mark },
        }
    }
}

/// Remembered choices from the menus.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub human_mark: Mark,
    pub last_game: Option<GameType>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            last_game: None,
        }
    }
}
