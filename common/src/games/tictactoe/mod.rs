mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::{BotDifficulty, calculate_move};
pub use game_state::{FirstPlayerMode, TicTacToeGameState};
pub use minimax::{find_best_move, minimax};
pub use types::{Mark, Outcome, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
