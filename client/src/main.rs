mod board_layout;
mod colors;
mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::{log, log_warn, logger};

use config::{AppConfigManager, Config, MIN_WINDOW_SIZE, default_config_path};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe against a friend or a minimax computer")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config_manager = AppConfigManager::from_yaml_file(&config_path);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        log!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Using default config, {} is unusable: {}", config_path.display(), e);
            Config::default()
        }
    };
    log!("Loaded config from {}", config_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([MIN_WINDOW_SIZE, MIN_WINDOW_SIZE])
            .with_resizable(true)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config_manager, config)))),
    )?;

    log!("Window closed");
    Ok(())
}
