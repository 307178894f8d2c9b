//! Core game logic: board representation, player marks, win/draw rules, and
//! the session state machine that alternates human and AI turns.

mod board;
mod player;
pub mod rules;
mod session;

pub use board::{Board, Cell, TrialMove, SIZE};
pub use player::Player;
pub use rules::Outcome;
pub use session::{GameSession, SessionState, TurnReport};
