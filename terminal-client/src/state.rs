use std::str::FromStr;

use common::games::tictactoe::{BotDifficulty, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeCommand {
    /// Zero-based cell index; the prompt shows cells as 1-9.
    PlaceMark { cell: usize },
    NewGame,
    SetDifficulty(BotDifficulty),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "Commands: 1-9 place your mark, n new game, \
d <easy|tough> change difficulty, h help, q quit";

impl FromStr for TicTacToeCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Enter a cell number 1-9, or 'h' for help".to_string());
        };
        let argument = parts.next();

        if let Ok(number) = head.parse::<usize>() {
            if !(1..=CELL_COUNT).contains(&number) {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            return Ok(TicTacToeCommand::PlaceMark { cell: number - 1 });
        }

        match head.to_ascii_lowercase().as_str() {
            "n" | "new" => Ok(TicTacToeCommand::NewGame),
            "h" | "help" | "?" => Ok(TicTacToeCommand::Help),
            "q" | "quit" | "exit" => Ok(TicTacToeCommand::Quit),
            "d" | "difficulty" => {
                let argument =
                    argument.ok_or_else(|| "Usage: d <easy|tough>".to_string())?;
                Ok(TicTacToeCommand::SetDifficulty(argument.parse()?))
            }
            other => Err(format!("Unknown command '{}'. {}", other, HELP_TEXT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!("1".parse(), Ok(TicTacToeCommand::PlaceMark { cell: 0 }));
        assert_eq!(" 9 ".parse(), Ok(TicTacToeCommand::PlaceMark { cell: 8 }));
        assert!("0".parse::<TicTacToeCommand>().is_err());
        assert!("10".parse::<TicTacToeCommand>().is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!("N".parse(), Ok(TicTacToeCommand::NewGame));
        assert_eq!("quit".parse(), Ok(TicTacToeCommand::Quit));
        assert_eq!("?".parse(), Ok(TicTacToeCommand::Help));
        assert_eq!(
            "d easy".parse(),
            Ok(TicTacToeCommand::SetDifficulty(BotDifficulty::Easy))
        );
        assert_eq!(
            "difficulty TOUGH".parse(),
            Ok(TicTacToeCommand::SetDifficulty(BotDifficulty::Tough))
        );
    }

    #[test]
    fn test_bad_input() {
        assert!("".parse::<TicTacToeCommand>().is_err());
        assert!("d".parse::<TicTacToeCommand>().is_err());
        assert!("d impossible".parse::<TicTacToeCommand>().is_err());
        assert!("castle".parse::<TicTacToeCommand>().unwrap_err().contains("castle"));
    }
}
