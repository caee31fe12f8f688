mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{BotDifficulty, FirstPlayerMode};
use common::{log, logger};

use config::{get_config_manager, Config};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "phone_games_terminal", about = "Play Tic-Tac-Toe against the bot")]
struct Args {
    /// Path to the YAML config, defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    difficulty: Option<BotDifficulty>,

    #[arg(long)]
    first_player: Option<FirstPlayerMode>,

    /// Seed for the random first player and the easy bot
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective config back to disk before playing
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(difficulty) = args.difficulty {
        config.tictactoe.difficulty = difficulty;
    }
    if let Some(first_player) = args.first_player {
        config.tictactoe.first_player = first_player;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Terminal".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, logger::LogTarget::Stderr);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    run_tictactoe_game(&config.tictactoe, rng).await?;

    log!("Bye");
    Ok(())
}
