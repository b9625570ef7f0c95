use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use serde::{Deserialize, Serialize};

use super::{GameConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub type AppConfigManager = ConfigManager<FileContentConfigProvider, Config>;

/// The config file lives next to the executable, or in the working
/// directory when the executable path is unknown.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub game: GameConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.game.validate()?;
        Ok(())
    }
}
