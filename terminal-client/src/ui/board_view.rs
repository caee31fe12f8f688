use common::games::tictactoe::{BOARD_SIZE, Mark, Outcome, TicTacToeGameState};

use crate::config::TicTacToeConfig;

pub struct BoardView {
    player_symbol: char,
    bot_symbol: char,
}

impl BoardView {
    pub fn new(player_symbol: char, bot_symbol: char) -> Self {
        Self {
            player_symbol,
            bot_symbol,
        }
    }

    pub fn from_config(config: &TicTacToeConfig) -> Self {
        Self::new(config.player_symbol, config.bot_symbol)
    }

    pub fn symbol(&self, mark: Mark) -> Option<char> {
        match mark {
            Mark::Player => Some(self.player_symbol),
            Mark::Bot => Some(self.bot_symbol),
            Mark::Empty => None,
        }
    }

    /// Empty cells show their 1-based number; cells of a completed line are
    /// bracketed.
    pub fn render_board(&self, state: &TicTacToeGameState) -> String {
        let winning_line = state.winning_line();
        let rows: Vec<String> = state
            .board
            .cells()
            .chunks(BOARD_SIZE)
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &mark)| {
                        let index = y * BOARD_SIZE + x;
                        let symbol = self
                            .symbol(mark)
                            .unwrap_or_else(|| char::from(b'1' + index as u8));
                        if winning_line.is_some_and(|line| line.contains(index)) {
                            format!("[{}]", symbol)
                        } else {
                            format!(" {} ", symbol)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }

    pub fn status_line(&self, state: &TicTacToeGameState) -> String {
        match state.status {
            Outcome::InProgress => match self.symbol(state.current_turn) {
                Some(symbol) => format!("Next player: {}", symbol),
                None => "Next player: ?".to_string(),
            },
            Outcome::BotWin => format!("Winner: {}", self.bot_symbol),
            Outcome::PlayerWin => format!("Winner: {}", self.player_symbol),
            Outcome::Draw => "Draw!".to_string(),
        }
    }

    pub fn render(&self, state: &TicTacToeGameState) -> String {
        format!("{}\n\n{}", self.render_board(state), self.status_line(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::FirstPlayerMode;

    fn play(moves: &[(Mark, usize)]) -> TicTacToeGameState {
        let mut rng = SessionRng::new(1);
        let mut state = TicTacToeGameState::new(FirstPlayerMode::Human, &mut rng);
        for &(mark, index) in moves {
            state.place_mark(mark, index).unwrap();
        }
        state
    }

    #[test]
    fn test_empty_board_shows_numbers() {
        let view = BoardView::new('X', 'O');
        let state = play(&[]);
        assert_eq!(
            view.render_board(&state),
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
        assert_eq!(view.status_line(&state), "Next player: X");
    }

    #[test]
    fn test_custom_symbols_and_turn() {
        let view = BoardView::new('#', '@');
        let state = play(&[(Mark::Player, 4)]);
        assert!(view.render_board(&state).contains(" # "));
        assert_eq!(view.status_line(&state), "Next player: @");
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let view = BoardView::new('X', 'O');
        let state = play(&[
            (Mark::Player, 0),
            (Mark::Bot, 3),
            (Mark::Player, 1),
            (Mark::Bot, 4),
            (Mark::Player, 2),
        ]);
        let board = view.render_board(&state);
        assert!(board.starts_with("[X]|[X]|[X]"));
        assert!(board.contains(" O | O | 6 "));
        assert_eq!(view.status_line(&state), "Winner: X");
    }
}
