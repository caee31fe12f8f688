use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT};
use super::bot_controller::{BotDifficulty, calculate_move};
use super::types::{Mark, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Bot,
    Random,
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(FirstPlayerMode::Human),
            "bot" => Ok(FirstPlayerMode::Bot),
            "random" => Ok(FirstPlayerMode::Random),
            other => Err(format!(
                "Unknown first player '{}', expected 'human', 'bot' or 'random'",
                other
            )),
        }
    }
}

impl fmt::Display for FirstPlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirstPlayerMode::Human => write!(f, "human"),
            FirstPlayerMode::Bot => write!(f, "bot"),
            FirstPlayerMode::Random => write!(f, "random"),
        }
    }
}

/// Board plus turn bookkeeping for a human-vs-bot game. `status` is always
/// the evaluator's classification of `board`.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub first_player_mode: FirstPlayerMode,
    pub first_mark: Mark,
    pub current_turn: Mark,
    pub status: Outcome,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first_mark = choose_first_mark(first_player_mode, rng);

        Self {
            board: Board::new(),
            first_player_mode,
            first_mark,
            current_turn: first_mark,
            status: Outcome::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }

        if mark != self.current_turn {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_valid_move(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.status == Outcome::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Lets the bot pick and place its mark, returning the chosen cell.
    pub fn play_bot_turn(
        &mut self,
        difficulty: BotDifficulty,
        rng: &mut SessionRng,
    ) -> Result<usize, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.current_turn != Mark::Bot {
            return Err("Not the bot's turn".to_string());
        }

        let index = calculate_move(difficulty, &self.board, rng)
            .ok_or_else(|| "Bot has no available move".to_string())?;
        self.place_mark(Mark::Bot, index)?;
        Ok(index)
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.first_player_mode, rng);
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn move_count(&self) -> usize {
        CELL_COUNT - self.board.count(Mark::Empty)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_turn.opponent() {
            self.current_turn = next;
        }
    }
}

fn choose_first_mark(mode: FirstPlayerMode, rng: &mut SessionRng) -> Mark {
    match mode {
        FirstPlayerMode::Human => Mark::Player,
        FirstPlayerMode::Bot => Mark::Bot,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                Mark::Player
            } else {
                Mark::Bot
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_state(mode: FirstPlayerMode) -> (TicTacToeGameState, SessionRng) {
        let mut rng = SessionRng::new(42);
        let state = TicTacToeGameState::new(mode, &mut rng);
        (state, rng)
    }

    #[test]
    fn test_new_game_human_first() {
        let (state, _) = create_state(FirstPlayerMode::Human);
        assert_eq!(state.current_turn, Mark::Player);
        assert_eq!(state.status, Outcome::InProgress);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_new_game_bot_first() {
        let (state, _) = create_state(FirstPlayerMode::Bot);
        assert_eq!(state.current_turn, Mark::Bot);
    }

    #[test]
    fn test_random_first_player_follows_seed() {
        let first = TicTacToeGameState::new(FirstPlayerMode::Random, &mut SessionRng::new(5));
        let second = TicTacToeGameState::new(FirstPlayerMode::Random, &mut SessionRng::new(5));
        assert_eq!(first.first_mark, second.first_mark);
        assert_ne!(first.first_mark, Mark::Empty);
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let (mut state, _) = create_state(FirstPlayerMode::Human);
        state.place_mark(Mark::Player, 4).unwrap();
        assert_eq!(state.current_turn, Mark::Bot);
        assert_eq!(state.last_move, Some(4));
        state.place_mark(Mark::Bot, 0).unwrap();
        assert_eq!(state.current_turn, Mark::Player);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_place_mark_rejects_invalid_moves() {
        let (mut state, _) = create_state(FirstPlayerMode::Human);
        assert_eq!(state.place_mark(Mark::Bot, 0), Err("Not your turn".to_string()));
        assert_eq!(
            state.place_mark(Mark::Player, 9),
            Err("Position out of bounds".to_string())
        );
        assert!(state.place_mark(Mark::Empty, 0).is_err());

        state.place_mark(Mark::Player, 0).unwrap();
        assert_eq!(
            state.place_mark(Mark::Bot, 0),
            Err("Cell is already marked".to_string())
        );
        assert_eq!(state.current_turn, Mark::Bot);
    }

    #[test]
    fn test_win_ends_game() {
        let (mut state, _) = create_state(FirstPlayerMode::Human);
        for (mark, index) in [
            (Mark::Player, 0),
            (Mark::Bot, 3),
            (Mark::Player, 1),
            (Mark::Bot, 4),
            (Mark::Player, 2),
        ] {
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.status, Outcome::PlayerWin);
        assert!(state.is_over());
        assert_eq!(state.winning_line().map(|line| line.cells), Some([0, 1, 2]));
        assert_eq!(
            state.place_mark(Mark::Bot, 5),
            Err("Game is already over".to_string())
        );
    }

    #[test]
    fn test_full_board_is_draw() {
        let (mut state, _) = create_state(FirstPlayerMode::Human);
        for (i, index) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::Player } else { Mark::Bot };
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.status, Outcome::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_bot_turn_blocks_threat() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Human);
        state.place_mark(Mark::Player, 0).unwrap();
        state.place_mark(Mark::Bot, 4).unwrap();
        state.place_mark(Mark::Player, 1).unwrap();
        let index = state.play_bot_turn(BotDifficulty::Tough, &mut rng).unwrap();
        assert_eq!(index, 2);
        assert_eq!(state.current_turn, Mark::Player);
    }

    #[test]
    fn test_bot_turn_requires_bot_to_move() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Human);
        assert_eq!(
            state.play_bot_turn(BotDifficulty::Tough, &mut rng),
            Err("Not the bot's turn".to_string())
        );
    }

    #[test]
    fn test_tough_bot_never_loses_to_random_player() {
        let mut rng = SessionRng::new(2024);
        for game in 0..20 {
            let mode = if game % 2 == 0 {
                FirstPlayerMode::Human
            } else {
                FirstPlayerMode::Bot
            };
            let mut state = TicTacToeGameState::new(mode, &mut rng);
            while !state.is_over() {
                if state.current_turn == Mark::Bot {
                    state.play_bot_turn(BotDifficulty::Tough, &mut rng).unwrap();
                } else {
                    let index = calculate_move(BotDifficulty::Easy, &state.board, &mut rng).unwrap();
                    state.place_mark(Mark::Player, index).unwrap();
                }
            }
            assert_ne!(state.status, Outcome::PlayerWin);
        }
    }

    #[test]
    fn test_reset_keeps_mode() {
        let (mut state, mut rng) = create_state(FirstPlayerMode::Bot);
        state.place_mark(Mark::Bot, 4).unwrap();
        state.reset(&mut rng);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_turn, Mark::Bot);
        assert_eq!(state.first_player_mode, FirstPlayerMode::Bot);
    }

    #[test]
    fn test_first_player_mode_parse() {
        assert_eq!("Random".parse::<FirstPlayerMode>(), Ok(FirstPlayerMode::Random));
        assert!("nobody".parse::<FirstPlayerMode>().is_err());
        assert_eq!(FirstPlayerMode::Bot.to_string(), "bot");
    }
}
