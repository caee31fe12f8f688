use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::minimax::find_best_move;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotDifficulty {
    /// Uniformly random empty cell.
    Easy,
    /// Full-depth minimax, never loses.
    #[default]
    Tough,
}

impl FromStr for BotDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(BotDifficulty::Easy),
            "tough" => Ok(BotDifficulty::Tough),
            other => Err(format!(
                "Unknown difficulty '{}', expected 'easy' or 'tough'",
                other
            )),
        }
    }
}

impl fmt::Display for BotDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotDifficulty::Easy => write!(f, "easy"),
            BotDifficulty::Tough => write!(f, "tough"),
        }
    }
}

pub fn calculate_move(
    difficulty: BotDifficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        BotDifficulty::Easy => calculate_random_move(board, rng),
        BotDifficulty::Tough => find_best_move(board),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).copied()
}
