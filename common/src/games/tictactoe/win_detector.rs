use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Classifies a board. A completed line wins even when the board is full.
pub fn evaluate(board: &Board) -> Outcome {
    // Completed lines never hold `Mark::Empty`.
    match check_win(board) {
        Some(Mark::Bot) => Outcome::BotWin,
        Some(_) => Outcome::PlayerWin,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
