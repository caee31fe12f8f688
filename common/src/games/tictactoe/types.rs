#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Bot,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Player => Some(Mark::Bot),
            Mark::Bot => Some(Mark::Player),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    BotWin,
    PlayerWin,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        *self != Outcome::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}
