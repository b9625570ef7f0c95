mod config;
mod game_config;
mod window_config;

pub use config::{AppConfigManager, Config, default_config_path};
pub use game_config::{GameConfig, GameType};
pub use window_config::{MIN_WINDOW_SIZE, WindowConfig};
