use std::path::PathBuf;

use crate::backgammon::{Color, MoveStep, Position};

/// Rejected board mutations. Legal steps never produce these; seeing one
/// means the caller applied something the enumeration did not offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("point {point} is blocked by {owner}")]
    Blocked { point: u8, owner: Color },

    #[error("no {color} checker at {from}")]
    EmptyOrigin { color: Color, from: Position },

    #[error("{color} must re-enter from the bar first")]
    MustReenter { color: Color },

    #[error("{color} cannot bear off before every checker is home")]
    NotAllHome { color: Color },

    #[error("capture flag does not match the checkers on {to}")]
    CaptureMismatch { to: Position },

    #[error("step {step} does not follow the movement rules for {color}")]
    InvalidStep { step: MoveStep, color: Color },

    #[error("{color} has {total} checkers, expected 15")]
    CheckerCount { color: Color, total: u8 },
}

/// Errors raised by the turn state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game has not been started")]
    NotStarted,

    #[error("the game is over")]
    GameOver,

    #[error("no unplayed roll this turn")]
    NoRoll,

    #[error("the dice were already rolled this turn")]
    AlreadyRolled,

    #[error("option [{option}] is not among the last enumerated legal moves")]
    IllegalOption { option: String },

    #[error("board rejected the move: {0}")]
    Board(#[from] BoardError),
}

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("input closed before the game finished")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("game error: {0}")]
    Game(#[from] GameError),
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

    #[error("config validation error: {0}")]
    Validation(String),
}
