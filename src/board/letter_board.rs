//! Display board showing the secret word as head glyphs
//!
//! Slot `i` of the board is the `i`th position of its `PositionSet` and
//! shows character `i` of the word, or `?` while hidden.

use serde_json::Value;

use crate::constants::alphabet::HIDDEN_GLYPH;
use crate::constants::codec::KEY_LETTER_BLOCK_DATA;
use crate::error::{HangmanError, HangmanResult, WorldError};
use crate::geometry::codec::{self, JsonObject};
use crate::geometry::PositionSet;
use crate::board::GlyphCatalog;
use crate::world::{BlockDescriptor, BlockRef, HostWorld, Location, WorldId};

#[derive(Debug, Clone, PartialEq)]
pub struct LetterBoard {
    positions: PositionSet,
    blank: BlockDescriptor,
}

impl LetterBoard {
    /// Empty board whose cleared cells are air
    pub fn new(origin: Location) -> Self {
        Self {
            positions: PositionSet::new(origin),
            blank: BlockDescriptor::air(),
        }
    }

    pub fn from_positions(positions: PositionSet, blank: BlockDescriptor) -> Self {
        Self { positions, blank }
    }

    /// Background block written into cells that cannot hold a glyph
    pub fn set_blank(&mut self, descriptor: BlockDescriptor) {
        self.blank = descriptor;
    }

    pub fn blank(&self) -> &BlockDescriptor {
        &self.blank
    }

    pub fn positions(&self) -> &PositionSet {
        &self.positions
    }

    pub fn add(&mut self, location: &Location) {
        self.positions.add(location);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Replace every slot that is not a player head with the blank block
    pub fn initialize_blanks(&self, world: &mut dyn HostWorld) -> HangmanResult<usize> {
        let mut replaced = 0;
        for block in self.positions.blocks() {
            if !world.get_block(block.pos).is_player_head() {
                world.set_block(block.pos, &self.blank)?;
                replaced += 1;
            }
        }
        if replaced > 0 {
            log::debug!("Initialized {} blank letter slots", replaced);
        }
        Ok(replaced)
    }

    /// True iff `block` is one of this board's slots
    pub fn contains(&self, block: &BlockRef) -> bool {
        self.positions.index_of(block).is_some()
    }

    /// Hide every slot
    pub fn reset(&self, world: &mut dyn HostWorld) -> HangmanResult<()> {
        let dummy = " ".repeat(self.len());
        for index in 0..self.len() {
            self.reveal_at(world, &dummy, index, false)?;
        }
        Ok(())
    }

    /// Render slot `index` as `word[index]` when `show`, otherwise as `?`
    pub fn reveal_at(
        &self,
        world: &mut dyn HostWorld,
        word: &str,
        index: usize,
        show: bool,
    ) -> HangmanResult<()> {
        let block = self.positions.block_at(index).ok_or(HangmanError::SlotOutOfRange {
            index,
            slots: self.len(),
        })?;

        // External edits can replace a slot; convert it back before writing.
        if world.skull_state(block.pos).is_none() {
            self.initialize_blanks(world)?;
        }
        let mut state = world
            .skull_state(block.pos)
            .ok_or(WorldError::NotASkull { pos: block.pos })?;

        let glyph = if show {
            word.chars()
                .nth(index)
                .ok_or(HangmanError::SlotOutOfRange {
                    index,
                    slots: word.chars().count(),
                })?
                .to_ascii_uppercase()
        } else {
            HIDDEN_GLYPH
        };

        state.set_profile(GlyphCatalog::profile_for(glyph)?);
        world.commit_skull(state)?;
        Ok(())
    }

    pub fn serialize(&self) -> Value {
        let mut object = JsonObject::new();
        self.positions.write_fields(&mut object);
        object.insert(
            KEY_LETTER_BLOCK_DATA.into(),
            Value::String(codec::descriptor_to_string(Some(&self.blank))),
        );
        Value::Object(object)
    }

    pub fn deserialize(value: &Value, world: &WorldId) -> HangmanResult<Self> {
        let object = codec::as_object(value)?;
        let positions = PositionSet::read_fields(object, world)?;
        let blank = codec::string_to_descriptor(codec::get_str(object, KEY_LETTER_BLOCK_DATA)?)?
            .unwrap_or_default();
        Ok(Self { positions, blank })
    }

    /// Restore a board and measure its slots from `origin`
    pub fn deserialize_at(value: &Value, world: &WorldId, origin: Location) -> HangmanResult<Self> {
        let board = Self::deserialize(value, world)?;
        Ok(Self {
            positions: board.positions.with_origin(origin),
            blank: board.blank,
        })
    }
}
