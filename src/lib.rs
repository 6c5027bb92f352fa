//! Two-player backgammon rules engine with a console hot-seat front end.
//!
//! - [`backgammon`]: board, move enumeration, dice and the turn state machine
//! - [`console`]: text adapter driving a [`backgammon::Game`]
//! - [`config`]: TOML/CLI game settings
//! - [`error`]: error types

pub mod backgammon;
pub mod config;
pub mod console;
pub mod error;
pub mod misc;
