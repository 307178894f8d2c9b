use crate::ai::{Difficulty, Policy};
use crate::config::EngineConfig;
use crate::error::{MoveError, SessionError};

use super::board::{Board, Cell, SIZE};
use super::player::Player;
use super::rules::{self, Outcome};

/// Lifecycle of a session. `AiThinking` only exists while the reply is being
/// computed inside [`GameSession::submit_human_move`]; since the decision is
/// synchronous, callers observe the other three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingHuman,
    AiThinking,
    Won(Player),
    Drawn,
}

/// What the presentation layer needs after a turn: the verdict and the AI's
/// reply, if it made one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: Outcome,
    pub ai_move: Option<(usize, usize)>,
}

/// One human-vs-computer game. The session exclusively owns its board,
/// validates every move before applying it, and refuses mutation once the
/// game is decided.
pub struct GameSession {
    board: Board,
    difficulty: Difficulty,
    policy: Box<dyn Policy>,
    state: SessionState,
    seed: Option<u64>,
}

impl GameSession {
    /// Start a session with default configuration (Easy difficulty).
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        GameSession {
            board: Board::new(),
            difficulty: config.difficulty,
            policy: config.difficulty.policy(config.rng_seed),
            state: SessionState::AwaitingHuman,
            seed: config.rng_seed,
        }
    }

    /// Change difficulty. Allowed mid-game; takes effect on the next AI
    /// decision.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.policy = difficulty.policy(self.seed);
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Copy of the current grid for rendering.
    pub fn board_snapshot(&self) -> [[Cell; SIZE]; SIZE] {
        self.board.grid()
    }

    /// Apply the human's move, then the AI's reply if the game continues.
    ///
    /// Rejected moves (occupied cell, bad coordinates, finished game) leave
    /// the session untouched. On success the report carries the outcome
    /// after the last applied move and the AI's cell when it played one.
    pub fn submit_human_move(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<TurnReport, SessionError> {
        if self.state != SessionState::AwaitingHuman {
            return Err(MoveError::GameOver.into());
        }
        self.board.set(row, col, Cell::Human)?;

        let outcome = rules::evaluate(&self.board);
        if outcome != Outcome::Ongoing {
            self.state = terminal_state(outcome);
            return Ok(TurnReport {
                outcome,
                ai_move: None,
            });
        }

        self.state = SessionState::AiThinking;
        let (ai_row, ai_col) = match self.policy.select_move(&mut self.board, Player::Ai) {
            Ok(cell) => cell,
            Err(err) => {
                self.state = SessionState::AwaitingHuman;
                return Err(err.into());
            }
        };
        if let Err(err) = self.board.set(ai_row, ai_col, Cell::Ai) {
            self.state = SessionState::AwaitingHuman;
            return Err(err.into());
        }

        let outcome = rules::evaluate(&self.board);
        self.state = match outcome {
            Outcome::Ongoing => SessionState::AwaitingHuman,
            _ => terminal_state(outcome),
        };
        Ok(TurnReport {
            outcome,
            ai_move: Some((ai_row, ai_col)),
        })
    }

    /// Clear the board and return to `AwaitingHuman`. Valid in any state.
    pub fn reset(&mut self) {
        self.board.clear_all();
        self.state = SessionState::AwaitingHuman;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn terminal_state(outcome: Outcome) -> SessionState {
    match outcome {
        Outcome::Win(player) => SessionState::Won(player),
        Outcome::Draw => SessionState::Drawn,
        Outcome::Ongoing => SessionState::AwaitingHuman,
    }
}
