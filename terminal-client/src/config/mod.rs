mod config;
mod tictactoe_config;

pub use config::{get_config_manager, Config};
pub use tictactoe_config::TicTacToeConfig;
