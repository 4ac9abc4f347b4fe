//! Hangman played on a voxel world
//!
//! A secret word is shown on a board of player-head blocks. Players click a
//! board slot, pick a letter from a 26-letter menu, and every wrong guess
//! stamps the next captured gallows stage into the world.
//!
//! The host runtime owns the world and the players; this crate owns the game
//! state and reaches the host only through the `HostWorld` trait and the
//! injected `HostServices`.

pub mod board;
pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod game;
pub mod geometry;
pub mod world;

pub use board::{GlyphCatalog, LetterBoard};
pub use commands::{dispatch, Command, CommandContext};
pub use config::HangmanConfig;
pub use editor::{StructureEditor, StructureStore, WandOutcome};
pub use error::{HangmanError, HangmanResult, WorldError};
pub use game::{
    GameCoordinator, GamePhase, GameSettings, GameSetup, GameTask, HostServices, PlayerId,
    PlayerRef,
};
pub use geometry::{BlockRegion, Cuboid, PositionSet, StampMode};
pub use world::{BlockDescriptor, BlockPos, BlockRef, HostWorld, Location, MemoryWorld, WorldId};

/// Initialize `env_logger` on stdout, honouring `RUST_LOG`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,hangman_engine=debug"),
    )
    .target(env_logger::Target::Stdout)
    .try_init();

    if let Err(e) = result {
        log::debug!("env_logger already initialized: {}", e);
    }
}
