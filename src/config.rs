use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Who opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// Player one (White) always starts.
    White,
    /// Player two (Black) always starts.
    Black,
    /// Pick the opener with the game's dice source.
    Random,
}

/// Game settings, loadable from TOML. Player one plays White, player two
/// plays Black.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_one: String,
    pub player_two: String,
    /// Fixed seed for reproducible dice. Entropy is used when unset.
    pub seed: Option<u64>,
    pub first_player: FirstPlayer,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_one: "Jugador 1".to_string(),
            player_two: "Jugador 2".to_string(),
            seed: None,
            first_player: FirstPlayer::White,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::Validation("player names must not be blank".into()));
        }
        Ok(())
    }
}
