//! TOML configuration for one hangman installation

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::LetterBoard;
use crate::constants::timing::{MILLIS_PER_SECOND, TICKS_PER_SECOND};
use crate::error::HangmanResult;
use crate::game::{GameSettings, GameSetup, Messages};
use crate::geometry::{BlockRegion, StampMode};
use crate::world::{BlockPos, Location, WorldId};

fn default_world() -> String {
    "world".to_string()
}

fn default_y() -> i32 {
    64
}

fn default_max_guesses() -> usize {
    4
}

fn default_game_cooldown() -> u64 {
    10
}

fn default_player_cooldown() -> u64 {
    3
}

fn default_guess_cooldown() -> u64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// World that serialized locations resolve into
    #[serde(default = "default_world")]
    pub world: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default = "default_y")]
    pub y: i32,
    #[serde(default)]
    pub z: i32,

    #[serde(default = "default_max_guesses")]
    pub max_guesses: usize,
    /// Seconds from a win or loss to the next session
    #[serde(default = "default_game_cooldown")]
    pub game_cooldown: u64,
    /// Seconds between two guesses of one player
    #[serde(default = "default_player_cooldown")]
    pub player_cooldown: u64,
    /// Seconds between any two guesses
    #[serde(default = "default_guess_cooldown")]
    pub guess_cooldown: u64,

    pub word_list: Vec<String>,
    /// Serialized `LetterBoard` JSON
    pub letter_board: String,
    /// Serialized `BlockRegion` JSON, one per stage
    pub stages: Vec<String>,

    #[serde(default)]
    pub stamp_mode: StampMode,
    #[serde(default)]
    pub messages: Messages,
}

impl HangmanConfig {
    pub fn load(path: impl AsRef<Path>) -> HangmanResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded hangman config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> HangmanResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn world_id(&self) -> WorldId {
        WorldId::new(self.world.clone())
    }

    /// Anchor block the board and stages are measured from
    pub fn anchor(&self) -> Location {
        Location::from_block(self.world_id(), BlockPos::new(self.x, self.y, self.z))
    }

    pub fn game_cooldown_ticks(&self) -> u64 {
        self.game_cooldown * TICKS_PER_SECOND
    }

    pub fn player_cooldown_ms(&self) -> u64 {
        self.player_cooldown * MILLIS_PER_SECOND
    }

    pub fn global_cooldown_ms(&self) -> u64 {
        self.guess_cooldown * MILLIS_PER_SECOND
    }

    pub fn settings(&self) -> GameSettings {
        GameSettings {
            game_cooldown_ticks: self.game_cooldown_ticks(),
            player_cooldown_ms: self.player_cooldown_ms(),
            global_cooldown_ms: self.global_cooldown_ms(),
            stamp_mode: self.stamp_mode,
            messages: self.messages.clone(),
        }
    }
}

impl GameSetup {
    /// Restore the board and stages, re-anchored at the configured location
    pub fn from_config(config: &HangmanConfig) -> HangmanResult<Self> {
        let world = config.world_id();
        let anchor = config.anchor();

        let board_json: Value = serde_json::from_str(&config.letter_board)?;
        let letter_board = LetterBoard::deserialize_at(&board_json, &world, anchor.clone())?;

        let stages = config
            .stages
            .iter()
            .map(|raw| {
                let value: Value = serde_json::from_str(raw)?;
                BlockRegion::deserialize_at(&value, &world, anchor.clone())
            })
            .collect::<HangmanResult<Vec<_>>>()?;

        log::debug!(
            "Restored letter board with {} slots and {} stages",
            letter_board.len(),
            stages.len()
        );

        Ok(Self {
            word_list: config.word_list.clone(),
            letter_board,
            stages,
            settings: config.settings(),
        })
    }
}
