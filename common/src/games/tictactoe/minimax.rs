use super::board::{Board, CELL_COUNT};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Picks the bot's move under perfect play. Cells are tried in ascending
/// order and only a strictly better score replaces the current choice, so
/// ties resolve to the lowest index. Returns `None` on a full board.
pub fn find_best_move(board: &Board) -> Option<usize> {
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        board.set(index, Mark::Bot);
        let score = search(&mut board, 0, false);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores `board` from the bot's point of view. Wins are worth `10 - depth`
/// and losses `-10 + depth`, so the search hastens wins and delays losses.
pub fn minimax(board: &Board, depth: usize, is_maximizing: bool) -> i32 {
    let mut board = *board;
    search(&mut board, depth, is_maximizing)
}

fn search(board: &mut Board, depth: usize, is_maximizing: bool) -> i32 {
    // Depths past i32::MAX clamp there; the scores saturate instead of wrapping.
    let depth_score = i32::try_from(depth).unwrap_or(i32::MAX);
    match evaluate(board) {
        Outcome::BotWin => return WIN_SCORE.saturating_sub(depth_score),
        Outcome::PlayerWin => return (-WIN_SCORE).saturating_add(depth_score),
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_valid_move(index) {
                continue;
            }

            board.set(index, Mark::Bot);
            let eval = search(board, depth.saturating_add(1), false);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_valid_move(index) {
                continue;
            }

            board.set(index, Mark::Player);
            let eval = search(board, depth.saturating_add(1), true);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
