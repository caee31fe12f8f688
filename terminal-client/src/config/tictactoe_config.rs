use common::config::Validate;
use common::games::tictactoe::{BotDifficulty, FirstPlayerMode};
use serde::{Deserialize, Serialize};

const MAX_BOT_DELAY_MS: u64 = 5000;
const EMPTY_CELL_SYMBOL: char = '.';

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub difficulty: BotDifficulty,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u64,
    pub player_symbol: char,
    pub bot_symbol: char,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        for (name, symbol) in [("player_symbol", self.player_symbol), ("bot_symbol", self.bot_symbol)] {
            if symbol.is_whitespace() || symbol == EMPTY_CELL_SYMBOL || symbol.is_ascii_digit() {
                return Err(format!("{} '{}' is not a printable mark", name, symbol));
            }
        }
        if self.player_symbol == self.bot_symbol {
            return Err("player_symbol and bot_symbol must differ".to_string());
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            difficulty: BotDifficulty::Tough,
            first_player: FirstPlayerMode::Human,
            bot_delay_ms: 500,
            player_symbol: 'X',
            bot_symbol: 'O',
        }
    }
}
