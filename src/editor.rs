//! In-world authoring of stages and letter boards
//!
//! Players select a region with two wand clicks (the second click captures it
//! with the player's position as origin) and mark letter slots by clicking
//! while sneaking. Saved structures live in a `StructureStore` keyed by
//! player and name.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::LetterBoard;
use crate::error::{HangmanError, HangmanResult};
use crate::game::{PlayerId, PlayerRef};
use crate::geometry::{BlockRegion, StampMode};
use crate::world::{BlockRef, HostWorld, Location};

/// What a wand click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WandOutcome {
    /// Letter slot appended; carries the new slot count
    LetterBlockAdded(usize),
    /// First corner stored, waiting for the second
    CornerSet,
    /// Region captured between both corners
    RegionCaptured { size: (usize, usize, usize) },
}

/// Saved structure JSON keyed by `"<player-id>.<name>"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureStore {
    entries: BTreeMap<String, String>,
}

impl StructureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(player: &PlayerId, name: &str) -> String {
        format!("{}.{}", player, name)
    }

    pub fn get(&self, player: &PlayerId, name: &str) -> Option<&str> {
        self.entries.get(&Self::key(player, name)).map(String::as_str)
    }

    pub fn insert(&mut self, player: &PlayerId, name: &str, json: String) {
        self.entries.insert(Self::key(player, name), json);
    }

    pub fn remove(&mut self, player: &PlayerId, name: &str) -> Option<String> {
        self.entries.remove(&Self::key(player, name))
    }

    /// Names stored by one player, sorted
    pub fn names_for(&self, player: &PlayerId) -> Vec<&str> {
        let prefix = format!("{}.", player);
        self.entries
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a store file; a missing file is an empty store
    pub fn load(path: impl AsRef<Path>) -> HangmanResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No structure store at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&data)?;
        log::info!("Loaded {} structures from {}", store.len(), path.display());
        Ok(store)
    }

    /// Write the store through a temporary file and rename it into place
    pub fn save(&self, path: impl AsRef<Path>) -> HangmanResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let data = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, data)?;
        fs::rename(&temp_path, path)?;

        log::debug!("Saved {} structures to {}", self.len(), path.display());
        Ok(())
    }
}

/// Per-player selection state for the wand
#[derive(Debug, Default)]
pub struct StructureEditor {
    stamp_mode: StampMode,
    pending_corners: HashMap<PlayerId, Location>,
    selections: HashMap<PlayerId, BlockRegion>,
    letter_blocks: HashMap<PlayerId, Vec<BlockRef>>,
}

impl StructureEditor {
    pub fn new(stamp_mode: StampMode) -> Self {
        Self {
            stamp_mode,
            ..Self::default()
        }
    }

    pub fn on_wand_click(
        &mut self,
        world: &dyn HostWorld,
        player: &PlayerRef,
        clicked: &BlockRef,
        player_location: &Location,
        sneaking: bool,
    ) -> HangmanResult<WandOutcome> {
        if sneaking {
            let blocks = self.letter_blocks.entry(player.id.clone()).or_default();
            blocks.push(clicked.clone());
            log::debug!("{} marked letter slot {} at {}", player.name, blocks.len(), clicked.pos);
            return Ok(WandOutcome::LetterBlockAdded(blocks.len()));
        }

        let corner = Location::from_block(clicked.world.clone(), clicked.pos);
        let Some(first) = self.pending_corners.remove(&player.id) else {
            self.pending_corners.insert(player.id.clone(), corner);
            return Ok(WandOutcome::CornerSet);
        };

        let region = BlockRegion::capture(world, &corner, &first, player_location.clone())?;
        let size = region.size();
        self.selections.insert(player.id.clone(), region);
        log::info!("{} captured a {}x{}x{} region", player.name, size.0, size.1, size.2);
        Ok(WandOutcome::RegionCaptured { size })
    }

    pub fn selection(&self, player: &PlayerId) -> Option<&BlockRegion> {
        self.selections.get(player)
    }

    pub fn letter_blocks(&self, player: &PlayerId) -> &[BlockRef] {
        self.letter_blocks.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_pending_corner(&self, player: &PlayerId) -> bool {
        self.pending_corners.contains_key(player)
    }

    /// Build a letter board from the selection and marked slots, then store it
    ///
    /// The board origin is the selection's minimum corner and its blank
    /// descriptor is whatever the first marked slot currently holds. The
    /// player's selection and marked slots are consumed.
    pub fn save_letter_board(
        &mut self,
        world: &dyn HostWorld,
        player: &PlayerRef,
        name: &str,
        store: &mut StructureStore,
    ) -> HangmanResult<LetterBoard> {
        let origin = self
            .selections
            .get(&player.id)
            .map(|region| region.cuboid().corner_min())
            .ok_or_else(|| HangmanError::IncompleteSelection("no region captured".into()))?;
        let first_pos = self
            .letter_blocks
            .get(&player.id)
            .and_then(|blocks| blocks.first())
            .map(|block| block.pos)
            .ok_or_else(|| HangmanError::IncompleteSelection("no letter blocks marked".into()))?;

        self.selections.remove(&player.id);
        let blocks = self.letter_blocks.remove(&player.id).unwrap_or_default();

        let mut board = LetterBoard::new(origin);
        board.set_blank(world.get_block(first_pos));
        for block in &blocks {
            board.add(&Location::from_block(block.world.clone(), block.pos));
        }

        store.insert(&player.id, name, board.serialize().to_string());
        log::info!("{} saved letter board {} with {} slots", player.name, name, board.len());
        Ok(board)
    }

    /// Store the player's captured region under `name`
    pub fn save_structure(
        &self,
        player: &PlayerRef,
        name: &str,
        store: &mut StructureStore,
    ) -> HangmanResult<()> {
        let region = self
            .selections
            .get(&player.id)
            .ok_or_else(|| HangmanError::IncompleteSelection("no region captured".into()))?;
        store.insert(&player.id, name, region.serialize().to_string());
        log::info!("{} saved structure {}", player.name, name);
        Ok(())
    }

    /// Stamp a stored structure with `location` as its origin
    pub fn build(
        &self,
        world: &mut dyn HostWorld,
        player: &PlayerRef,
        name: &str,
        location: &Location,
        store: &StructureStore,
    ) -> HangmanResult<usize> {
        let raw = store
            .get(&player.id, name)
            .ok_or_else(|| HangmanError::UnknownStructure(name.to_string()))?;
        let value: Value = serde_json::from_str(raw)?;
        let region = BlockRegion::deserialize_at(&value, &location.world, location.clone())?;
        let written = region.stamp_with(world, self.stamp_mode)?;
        log::info!("{} built {} ({} blocks)", player.name, name, written);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BlockPos, WorldId};

    #[test]
    fn test_store_keys_are_per_player() {
        let mut store = StructureStore::new();
        let alex = PlayerId::new("alex-id");
        let sam = PlayerId::new("sam-id");
        store.insert(&alex, "gallows", "{}".into());
        store.insert(&sam, "gallows", "[]".into());
        store.insert(&alex, "board", "{}".into());

        assert_eq!(store.get(&alex, "gallows"), Some("{}"));
        assert_eq!(store.get(&sam, "gallows"), Some("[]"));
        assert_eq!(store.names_for(&alex), vec!["board", "gallows"]);
        assert_eq!(StructureStore::key(&alex, "x"), "alex-id.x");
    }

    #[test]
    fn test_letter_blocks_accumulate_in_click_order() {
        let world = crate::world::MemoryWorld::new(WorldId::new("w"));
        let player = PlayerRef::new("p", "P");
        let here = Location::new(WorldId::new("w"), 0.0, 0.0, 0.0);
        let mut editor = StructureEditor::default();

        for x in 0..3 {
            let block = BlockRef::new(WorldId::new("w"), BlockPos::new(x, 1, 0));
            let outcome = editor.on_wand_click(&world, &player, &block, &here, true).unwrap();
            assert_eq!(outcome, WandOutcome::LetterBlockAdded(x as usize + 1));
        }
        assert_eq!(editor.letter_blocks(&player.id)[2].pos, BlockPos::new(2, 1, 0));
        assert!(!editor.has_pending_corner(&player.id));
    }
}
