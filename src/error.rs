use std::path::PathBuf;

/// Errors from validating a move against the board or session state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinates ({row}, {col}) are outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("the game is over; no further moves accepted")]
    GameOver,
}

/// Errors from invoking a move policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// The board has no empty cell. The session never invokes a policy in
    /// that state, so hitting this indicates a session bug.
    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// Errors surfaced at the session boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
