use std::fmt;
use std::str::FromStr;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row-major 3x3 grid. Cheap to copy, so searches work on their own copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: &[Mark]) -> Result<Self, String> {
        let cells: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| {
            format!(
                "Invalid board: expected {} cells, got {}",
                CELL_COUNT,
                cells.len()
            )
        })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Overwrites a cell. Indices outside the grid are ignored.
    pub fn set(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = mark;
        }
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

fn mark_from_symbol(symbol: char) -> Option<Mark> {
    match symbol {
        'X' | 'x' => Some(Mark::Player),
        'O' | 'o' => Some(Mark::Bot),
        '.' | '_' | '-' => Some(Mark::Empty),
        _ => None,
    }
}

fn mark_to_symbol(mark: Mark) -> char {
    match mark {
        Mark::Player => 'X',
        Mark::Bot => 'O',
        Mark::Empty => '.',
    }
}

/// Parses boards written as `XX.OO....`, with `X` for the player and `O`
/// for the bot. Whitespace, `|` and `,` are skipped.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for symbol in s.chars() {
            if symbol.is_whitespace() || symbol == '|' || symbol == ',' {
                continue;
            }
            let mark = mark_from_symbol(symbol)
                .ok_or_else(|| format!("Invalid board: unrecognized cell symbol '{}'", symbol))?;
            cells.push(mark);
        }
        Self::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &mark in row {
                write!(f, "{}", mark_to_symbol(mark))?;
            }
        }
        Ok(())
    }
}
