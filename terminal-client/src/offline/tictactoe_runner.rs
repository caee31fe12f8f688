use std::io::Write;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{BotDifficulty, Mark, Outcome, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::TicTacToeConfig;
use crate::state::{HELP_TEXT, TicTacToeCommand};
use crate::ui::BoardView;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Message(String),
    Quit,
}

/// One human-vs-bot match: game state, bot settings and the RNG feeding
/// both the random first player and the easy bot.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    difficulty: BotDifficulty,
    rng: SessionRng,
    view: BoardView,
}

impl TicTacToeSession {
    pub fn new(cfg: &TicTacToeConfig, mut rng: SessionRng) -> Self {
        let state = TicTacToeGameState::new(cfg.first_player, &mut rng);
        Self {
            state,
            difficulty: cfg.difficulty,
            rng,
            view: BoardView::from_config(cfg),
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn difficulty(&self) -> BotDifficulty {
        self.difficulty
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.state.is_over() && self.state.current_turn == Mark::Bot
    }

    pub fn render(&self) -> String {
        self.view.render(&self.state)
    }

    pub fn handle_command(&mut self, command: TicTacToeCommand) -> Result<CommandOutcome, String> {
        match command {
            TicTacToeCommand::PlaceMark { cell } => {
                self.state.place_mark(Mark::Player, cell)?;
                log!("Player placed at cell {}", cell + 1);
                self.log_if_over();
                Ok(CommandOutcome::Continue)
            }
            TicTacToeCommand::NewGame => {
                self.start_new_game();
                Ok(CommandOutcome::Continue)
            }
            TicTacToeCommand::SetDifficulty(difficulty) => {
                self.difficulty = difficulty;
                self.start_new_game();
                Ok(CommandOutcome::Message(format!(
                    "Difficulty set to {}, new game started",
                    difficulty
                )))
            }
            TicTacToeCommand::Help => Ok(CommandOutcome::Message(HELP_TEXT.to_string())),
            TicTacToeCommand::Quit => Ok(CommandOutcome::Quit),
        }
    }

    pub fn play_bot_turn(&mut self) -> Result<usize, String> {
        let index = self.state.play_bot_turn(self.difficulty, &mut self.rng)?;
        log!("Bot ({}) placed at cell {}", self.difficulty, index + 1);
        self.log_if_over();
        Ok(index)
    }

    fn start_new_game(&mut self) {
        self.state.reset(&mut self.rng);
        log!(
            "New game: difficulty {}, {} moves first",
            self.difficulty,
            if self.state.first_mark == Mark::Bot { "bot" } else { "player" }
        );
    }

    fn log_if_over(&self) {
        match self.state.status {
            Outcome::InProgress => {}
            Outcome::BotWin => log!("Game over: bot wins after {} moves", self.state.move_count()),
            Outcome::PlayerWin => {
                log!("Game over: player wins after {} moves", self.state.move_count())
            }
            Outcome::Draw => log!("Game over: draw"),
        }
    }
}

pub async fn run_tictactoe_game(cfg: &TicTacToeConfig, rng: SessionRng) -> Result<(), String> {
    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    play_tictactoe(cfg, rng, input, &mut output).await
}

/// Drives one session: renders after every change, lets the bot move after
/// `bot_delay_ms`, and reads one command per line until `q` or end of input.
async fn play_tictactoe<R, W>(
    cfg: &TicTacToeConfig,
    rng: SessionRng,
    input: R,
    output: &mut W,
) -> Result<(), String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let seed = rng.seed();
    let mut session = TicTacToeSession::new(cfg, rng);
    let bot_delay = Duration::from_millis(cfg.bot_delay_ms);
    let mut lines = input.lines();

    log!(
        "Tic-Tac-Toe started: difficulty {}, first player {}, seed {}",
        session.difficulty(),
        cfg.first_player,
        seed
    );
    write_line(output, HELP_TEXT)?;

    loop {
        write_line(output, &format!("\n{}", session.render()))?;

        if session.is_bot_turn() {
            tokio::time::sleep(bot_delay).await;
            session.play_bot_turn()?;
            continue;
        }

        if session.state().is_over() {
            write_line(output, "Type 'n' for a new game or 'q' to quit.")?;
        }
        write!(output, "> ")
            .and_then(|_| output.flush())
            .map_err(|e| format!("Failed to write prompt: {}", e))?;

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| format!("Failed to read input: {}", e))?
        else {
            log!("Input closed, leaving game");
            break;
        };

        let outcome = line
            .parse::<TicTacToeCommand>()
            .and_then(|command| session.handle_command(command));

        match outcome {
            Ok(CommandOutcome::Continue) => {}
            Ok(CommandOutcome::Message(message)) => write_line(output, &message)?,
            Ok(CommandOutcome::Quit) => break,
            Err(e) => write_line(output, &e)?,
        }
    }

    Ok(())
}

fn write_line(output: &mut impl Write, text: &str) -> Result<(), String> {
    writeln!(output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
}
