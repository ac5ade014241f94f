mod app;
mod board_view;
mod config;

use std::path::PathBuf;

use clap::Parser;
use common::games::GameRng;
use common::log;
use eframe::egui;

use app::TicTacToeApp;
use config::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against an unbeatable minimax bot")]
struct Args {
    /// Path to the YAML client config
    #[arg(long, default_value = "tictactoe_client.yaml")]
    config: PathBuf,

    /// RNG seed override for reproducing a logged game
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress log output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::logger::set_quiet(args.quiet);

    let config: ClientConfig = match common::config::load_yaml_config(&args.config) {
        Ok(config) => config,
        Err(e) => {
            log!("{}", e);
            return Err(e.into());
        }
    };

    if !args.config.exists() {
        if let Err(e) = common::config::save_yaml_config(&args.config, &config) {
            log!("Failed to write default config: {}", e);
        }
    }

    let rng = match args.seed.or(config.seed) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Starting with seed {}", rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(rng)))),
    )?;

    Ok(())
}
