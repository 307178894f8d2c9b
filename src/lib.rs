//! # Tic-Tac-Toe Engine
//!
//! The move-decision engine for a human-vs-computer tic-tac-toe game:
//! board representation, win/draw detection, three selectable AI policies,
//! and a session that orchestrates turn alternation. Rendering and input
//! handling belong to an external presentation layer, which drives a
//! [`game::GameSession`] with chosen cells and a difficulty setting and
//! renders the board snapshots and verdicts it gets back.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win/draw rules, session
//!   state machine
//! - [`ai`] — Policy trait, difficulty levels, and the three move policies
//!   (random, tactical one-ply, exhaustive minimax)
//! - [`config`] — TOML configuration loading
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
